//! Section index over a snapshot of section sizes.
//!
//! A [`SectionIndex`] is built once from an ordered run of sections and
//! translates between flat list positions and section ordinals:
//!
//! - `position_for_section(s)` is the flat position of section `s`'s first item.
//! - `section_for_position(p)` is the section owning flat position `p`.
//!
//! Both lookups are answered from precomputed start positions; the second one
//! is a floor search (largest start `<= p`) in O(log N).
//!
//! The index copies labels and sizes at construction and keeps no reference to
//! its sources. Mutating a source list afterwards does not change any answer;
//! rebuild the index instead.

use smallvec::SmallVec;

use crate::observer::{BoundaryObserver, BoundaryQuery, BoundaryWarning, LogBoundaryObserver};
use crate::{Indexable, IndexableError, IndexableList};

/// Returned by [`SectionIndexer::position_for_section`] for unknown sections.
pub const INVALID_POSITION: i32 = -1;

/// Returned by [`SectionIndexer::section_for_position`] for unreachable positions.
pub const INVALID_SECTION: i32 = -1;

/// Sections kept inline before spilling to the heap. Covers an A-Z strip plus
/// a few extras (`#`, digits group, ...).
const INLINE_SECTIONS: usize = 32;

/// Query surface consumed by fast-scroll and jump-index widgets.
///
/// Out-of-range arguments never panic: implementations report them and return
/// [`INVALID_POSITION`] / [`INVALID_SECTION`]. Scroll-driven callers may pass
/// stale values during transients and treat the sentinel as "do nothing".
pub trait SectionIndexer {
    /// Section labels in display order.
    fn sections(&self) -> &[String];

    /// Flat position of the first item of `section`.
    fn position_for_section(&self, section: i32) -> i32;

    /// Section owning the flat `position`.
    fn section_for_position(&self, position: i32) -> i32;
}

/// Immutable snapshot of section labels, sizes and start positions.
pub struct SectionIndex<O = LogBoundaryObserver> {
    labels: Vec<String>,
    sizes: SmallVec<[usize; INLINE_SECTIONS]>,
    /// `starts[0] == 0`, `starts[i] == starts[i - 1] + sizes[i - 1]`.
    starts: SmallVec<[usize; INLINE_SECTIONS]>,
    observer: O,
}

impl<O> std::fmt::Debug for SectionIndex<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionIndex")
            .field("labels", &self.labels)
            .field("sizes", &self.sizes)
            .field("starts", &self.starts)
            .finish_non_exhaustive()
    }
}

impl SectionIndex<LogBoundaryObserver> {
    /// Builds an index from sections already sorted by key.
    ///
    /// Boundary warnings go to the `log` facade.
    pub fn new<K: Ord, E>(sections: &[IndexableList<K, E>]) -> Result<Self, IndexableError> {
        Self::with_observer(sections, LogBoundaryObserver)
    }

    /// Builds an index from any ordered run of sections.
    pub fn from_sections<'a, K, E, I>(sections: I) -> Result<Self, IndexableError>
    where
        K: Ord + 'a,
        E: 'a,
        I: IntoIterator<Item = &'a IndexableList<K, E>>,
    {
        Self::from_sections_with_observer(sections, LogBoundaryObserver)
    }

    /// Builds an index directly from `(label, size)` pairs.
    pub fn from_sizes<L, I>(sections: I) -> Result<Self, IndexableError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, usize)>,
    {
        Self::from_sizes_with_observer(sections, LogBoundaryObserver)
    }
}

impl<O: BoundaryObserver> SectionIndex<O> {
    /// Like [`SectionIndex::new`], reporting boundary warnings to `observer`.
    pub fn with_observer<K: Ord, E>(
        sections: &[IndexableList<K, E>],
        observer: O,
    ) -> Result<Self, IndexableError> {
        Self::from_sections_with_observer(sections, observer)
    }

    pub fn from_sections_with_observer<'a, K, E, I>(
        sections: I,
        observer: O,
    ) -> Result<Self, IndexableError>
    where
        K: Ord + 'a,
        E: 'a,
        I: IntoIterator<Item = &'a IndexableList<K, E>>,
    {
        Self::from_sizes_with_observer(
            sections
                .into_iter()
                .map(|section| (section.index_label().to_owned(), section.len())),
            observer,
        )
    }

    /// Builds the snapshot in one pass over `(label, size)` pairs.
    ///
    /// Fails if the sections or their items could not all be addressed through
    /// the `i32` [`SectionIndexer`] surface.
    pub fn from_sizes_with_observer<L, I>(sections: I, observer: O) -> Result<Self, IndexableError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, usize)>,
    {
        const MAX_ADDRESSABLE: usize = i32::MAX as usize;

        let iter = sections.into_iter();
        let (lower, _) = iter.size_hint();
        let mut labels = Vec::with_capacity(lower);
        let mut sizes = SmallVec::with_capacity(lower);
        let mut starts = SmallVec::with_capacity(lower);

        let mut next_start = 0usize;
        for (label, size) in iter {
            starts.push(next_start);
            sizes.push(size);
            labels.push(label.into());

            next_start = match next_start.checked_add(size) {
                Some(total) if total <= MAX_ADDRESSABLE => total,
                _ => {
                    return Err(IndexableError::PreconditionViolation {
                        reason: "total item count exceeds the addressable position range",
                    });
                }
            };
        }

        if labels.len() > MAX_ADDRESSABLE {
            return Err(IndexableError::PreconditionViolation {
                reason: "section count exceeds the addressable section range",
            });
        }

        Ok(Self {
            labels,
            sizes,
            starts,
            observer,
        })
    }
}

impl<O> SectionIndex<O> {
    /// Number of sections.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Item count of `section` at construction time.
    pub fn size_of(&self, section: usize) -> Option<usize> {
        self.sizes.get(section).copied()
    }

    /// Total items across all sections.
    pub fn total_items(&self) -> usize {
        match (self.starts.last(), self.sizes.last()) {
            (Some(start), Some(size)) => start + size,
            _ => 0,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Flat position of `section`'s first item, or `None` past the end.
    pub fn start_of(&self, section: usize) -> Option<usize> {
        self.starts.get(section).copied()
    }

    /// Section owning `position`, or `None` when it is not reachable.
    ///
    /// The reachable range is `0..=starts[N-1] + sizes[N-1] - 1`, measured from
    /// the last section. Empty trailing sections own no positions, so a
    /// position equal to their start is unreachable.
    pub fn section_at(&self, position: usize) -> Option<usize> {
        let last_start = *self.starts.last()?;
        let last_size = *self.sizes.last()?;
        if position >= last_start + last_size {
            return None;
        }

        // Floor search: with duplicate starts (empty sections) this lands on
        // the last duplicate, the only one of them that owns any positions.
        let after = self.starts.partition_point(|&start| start <= position);
        Some(after - 1)
    }

    /// Inclusive range accepted by `position_for_section`.
    fn section_range(&self) -> Option<std::ops::RangeInclusive<i64>> {
        let last = self.labels.len().checked_sub(1)?;
        Some(0..=last as i64)
    }

    /// Inclusive range accepted by `section_for_position`.
    fn position_range(&self) -> Option<std::ops::RangeInclusive<i64>> {
        let last_start = *self.starts.last()?;
        let last_size = *self.sizes.last()?;
        let last_position = (last_start + last_size).checked_sub(1)?;
        Some(0..=last_position as i64)
    }
}

impl<O: BoundaryObserver> SectionIndex<O> {
    fn report(
        &self,
        query: BoundaryQuery,
        value: i32,
        valid: Option<std::ops::RangeInclusive<i64>>,
    ) {
        self.observer.boundary_warning(&BoundaryWarning {
            query,
            value: i64::from(value),
            valid,
        });
    }
}

impl<O: BoundaryObserver> SectionIndexer for SectionIndex<O> {
    fn sections(&self) -> &[String] {
        &self.labels
    }

    fn position_for_section(&self, section: i32) -> i32 {
        let start = usize::try_from(section)
            .ok()
            .and_then(|section| self.start_of(section))
            .and_then(|start| i32::try_from(start).ok());
        match start {
            Some(start) => start,
            None => {
                self.report(
                    BoundaryQuery::PositionForSection,
                    section,
                    self.section_range(),
                );
                INVALID_POSITION
            }
        }
    }

    fn section_for_position(&self, position: i32) -> i32 {
        let section = usize::try_from(position)
            .ok()
            .and_then(|position| self.section_at(position))
            .and_then(|section| i32::try_from(section).ok());
        match section {
            Some(section) => section,
            None => {
                self.report(
                    BoundaryQuery::SectionForPosition,
                    position,
                    self.position_range(),
                );
                INVALID_SECTION
            }
        }
    }
}
