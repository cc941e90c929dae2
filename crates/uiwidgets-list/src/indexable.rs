//! The [`Indexable`] contract: a sort key plus a human-readable label.

/// Something that can be placed in a section index by an arbitrary key.
///
/// The key decides ordering. The label is only for display (an alphabet
/// strip entry, a header row) and never takes part in sorting or equality.
pub trait Indexable {
    /// Totally-ordered key identifying the section.
    type Key: Ord;

    /// Returns the index key.
    fn index_key(&self) -> &Self::Key;

    /// Returns the display label for this object's key.
    fn index_label(&self) -> &str;

    /// Orders two indexables by key alone.
    fn cmp_by_key(&self, other: &Self) -> std::cmp::Ordering {
        self.index_key().cmp(other.index_key())
    }
}
