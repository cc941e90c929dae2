//! Flattened, sectioned list adapter.
//!
//! [`IndexableListAdapter`] owns a set of [`IndexableList`] sections and
//! presents them as one flat run of rows: every section contributes a header
//! row followed by its children.
//!
//! ```text
//! row:   0    1     2     3    4    5
//!        [A]  ant   ape   [B]  bee  bat
//! ```
//!
//! Row lookups go through a [`SectionIndex`] whose section sizes include the
//! header row, so the adapter doubles as a [`SectionIndexer`] that jumps a
//! fast-scroll strip straight to section headers.

use crate::item_provider::ListItemProvider;
use crate::observer::{BoundaryObserver, LogBoundaryObserver};
use crate::section_index::{SectionIndex, SectionIndexer};
use crate::{Indexable, IndexableError, IndexableList};

/// The two kinds of rows an adapter produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewType {
    Header,
    Child,
}

impl ViewType {
    /// Number of distinct view types.
    pub const COUNT: usize = 2;

    /// Content type id used by [`ListItemProvider::get_content_type`].
    pub fn content_type(self) -> u64 {
        match self {
            ViewType::Header => 0,
            ViewType::Child => 1,
        }
    }
}

/// Stable identity of a row, independent of its flat position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowKey {
    Header(usize),
    Child(usize, usize),
}

impl RowKey {
    /// Tag for header keys: high 2 bits = 00
    const HEADER_TAG: u64 = 0b00 << 62;
    /// Tag for child keys: high 2 bits = 01
    const CHILD_TAG: u64 = 0b01 << 62;
    /// Tag for fallback index keys of rows that do not exist: high 2 bits = 10
    const INDEX_TAG: u64 = 0b10 << 62;
    const TAG_MASK: u64 = 0b11 << 62;
    /// Groups and children are bounded by `i32::MAX` (enforced when the row
    /// index is built), so each half fits in 31 bits.
    const HALF_BITS: u32 = 31;
    const HALF_MASK: u64 = (1u64 << Self::HALF_BITS) - 1;

    /// Packs the key into a tagged `u64` slot id.
    pub fn to_slot_id(self) -> u64 {
        match self {
            RowKey::Header(group) => Self::HEADER_TAG | (group as u64 & Self::HALF_MASK),
            RowKey::Child(group, child) => {
                Self::CHILD_TAG
                    | ((group as u64 & Self::HALF_MASK) << Self::HALF_BITS)
                    | (child as u64 & Self::HALF_MASK)
            }
        }
    }

    /// Inverse of [`RowKey::to_slot_id`]. Returns `None` for foreign ids.
    pub fn from_slot_id(slot_id: u64) -> Option<Self> {
        let value = slot_id & !Self::TAG_MASK;
        match slot_id & Self::TAG_MASK {
            Self::HEADER_TAG if value <= Self::HALF_MASK => Some(RowKey::Header(value as usize)),
            Self::CHILD_TAG => Some(RowKey::Child(
                (value >> Self::HALF_BITS) as usize,
                (value & Self::HALF_MASK) as usize,
            )),
            _ => None,
        }
    }

    fn fallback_slot_id(index: usize) -> u64 {
        Self::INDEX_TAG | (index as u64 & !Self::TAG_MASK)
    }
}

/// One row of the flattened list.
#[derive(Debug)]
pub enum ListRow<'a, K, E> {
    Header {
        group: usize,
        section: &'a IndexableList<K, E>,
    },
    Child {
        group: usize,
        child: usize,
        item: &'a E,
    },
}

impl<K, E> ListRow<'_, K, E> {
    pub fn view_type(&self) -> ViewType {
        match self {
            ListRow::Header { .. } => ViewType::Header,
            ListRow::Child { .. } => ViewType::Child,
        }
    }

    pub fn key(&self) -> RowKey {
        match *self {
            ListRow::Header { group, .. } => RowKey::Header(group),
            ListRow::Child { group, child, .. } => RowKey::Child(group, child),
        }
    }
}

/// How an adapter arranges the sections it is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterOptions {
    /// Stable-sort sections by key before flattening.
    pub sort_sections: bool,
    /// Keep sections with no children (they still get a header row).
    pub show_empty_sections: bool,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            sort_sections: true,
            show_empty_sections: true,
        }
    }
}

impl AdapterOptions {
    pub fn with_sort_sections(mut self, sort_sections: bool) -> Self {
        self.sort_sections = sort_sections;
        self
    }

    pub fn with_empty_sections(mut self, show_empty_sections: bool) -> Self {
        self.show_empty_sections = show_empty_sections;
        self
    }
}

/// Sectioned data flattened into header and child rows.
pub struct IndexableListAdapter<K, E, O = LogBoundaryObserver> {
    sections: Vec<IndexableList<K, E>>,
    options: AdapterOptions,
    observer: O,
    /// Header-inclusive index: section `g` spans `1 + children_count(g)` rows.
    rows: SectionIndex<O>,
}

impl<K, E, O> std::fmt::Debug for IndexableListAdapter<K, E, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexableListAdapter")
            .field("group_count", &self.sections.len())
            .field("options", &self.options)
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}

impl<K: Ord, E> IndexableListAdapter<K, E> {
    pub fn new(sections: Vec<IndexableList<K, E>>) -> Result<Self, IndexableError> {
        Self::with_options(sections, AdapterOptions::default())
    }

    pub fn with_options(
        sections: Vec<IndexableList<K, E>>,
        options: AdapterOptions,
    ) -> Result<Self, IndexableError> {
        Self::with_observer(sections, options, LogBoundaryObserver)
    }
}

impl<K: Ord, E, O: BoundaryObserver + Clone> IndexableListAdapter<K, E, O> {
    /// Builds the adapter, reporting out-of-range fast-scroll queries to `observer`.
    pub fn with_observer(
        mut sections: Vec<IndexableList<K, E>>,
        options: AdapterOptions,
        observer: O,
    ) -> Result<Self, IndexableError> {
        Self::arrange(&mut sections, options);
        let rows = Self::build_rows(&sections, observer.clone())?;
        Ok(Self {
            sections,
            options,
            observer,
            rows,
        })
    }

    /// Mutates the owned sections, then rebuilds the row layout.
    ///
    /// Row lookups only reflect section changes after this rebuild. If the
    /// rebuild fails the previous row layout is kept; lookups that no longer
    /// match the sections return `None` rather than panicking.
    pub fn edit_sections<F>(&mut self, edit: F) -> Result<(), IndexableError>
    where
        F: FnOnce(&mut Vec<IndexableList<K, E>>),
    {
        edit(&mut self.sections);
        Self::arrange(&mut self.sections, self.options);
        self.rows = Self::build_rows(&self.sections, self.observer.clone())?;
        log::debug!(
            "rebuilt indexable list adapter: {} groups, {} rows",
            self.sections.len(),
            self.rows.total_items()
        );
        Ok(())
    }

    /// Index over child items only, without header rows.
    pub fn item_index(&self) -> Result<SectionIndex<O>, IndexableError> {
        SectionIndex::from_sections_with_observer(&self.sections, self.observer.clone())
    }

    fn arrange(sections: &mut Vec<IndexableList<K, E>>, options: AdapterOptions) {
        if !options.show_empty_sections {
            sections.retain(|section| !section.is_empty());
        }
        if options.sort_sections {
            sections.sort();
        }
    }

    fn build_rows(
        sections: &[IndexableList<K, E>],
        observer: O,
    ) -> Result<SectionIndex<O>, IndexableError> {
        SectionIndex::from_sizes_with_observer(
            sections
                .iter()
                .map(|section| (section.index_label().to_owned(), section.len() + 1)),
            observer,
        )
    }
}

impl<K: Ord, E, O> IndexableListAdapter<K, E, O> {
    pub fn options(&self) -> AdapterOptions {
        self.options
    }

    pub fn group_count(&self) -> usize {
        self.sections.len()
    }

    pub fn groups(&self) -> &[IndexableList<K, E>] {
        &self.sections
    }

    pub fn group(&self, group: usize) -> Option<&IndexableList<K, E>> {
        self.sections.get(group)
    }

    pub fn children_count(&self, group: usize) -> Option<usize> {
        self.group(group).map(IndexableList::len)
    }

    pub fn child(&self, group: usize, child: usize) -> Option<&E> {
        self.group(group)?.get(child).ok()
    }

    /// Header-inclusive index backing the flat row layout.
    pub fn row_index(&self) -> &SectionIndex<O> {
        &self.rows
    }

    /// Number of flat rows, headers included.
    pub fn row_count(&self) -> usize {
        self.rows.total_items()
    }

    pub fn view_type_count(&self) -> usize {
        ViewType::COUNT
    }

    /// Resolves a flat row position.
    pub fn row(&self, position: usize) -> Option<ListRow<'_, K, E>> {
        let group = self.rows.section_at(position)?;
        let offset = position - self.rows.start_of(group)?;
        let section = self.sections.get(group)?;
        match offset.checked_sub(1) {
            None => Some(ListRow::Header { group, section }),
            Some(child) => Some(ListRow::Child {
                group,
                child,
                item: section.get(child).ok()?,
            }),
        }
    }

    pub fn item_view_type(&self, position: usize) -> Option<ViewType> {
        self.row(position).map(|row| row.view_type())
    }

    /// Flat position of a group's header (`child == None`) or of one of its children.
    pub fn flat_position(&self, group: usize, child: Option<usize>) -> Option<usize> {
        let header = self.rows.start_of(group)?;
        let children = self.children_count(group)?;
        match child {
            None => Some(header),
            Some(child) if child < children => Some(header + 1 + child),
            Some(_) => None,
        }
    }

    pub fn into_sections(self) -> Vec<IndexableList<K, E>> {
        self.sections
    }
}

impl<K: Ord, E, O: BoundaryObserver> SectionIndexer for IndexableListAdapter<K, E, O> {
    fn sections(&self) -> &[String] {
        self.rows.sections()
    }

    fn position_for_section(&self, section: i32) -> i32 {
        self.rows.position_for_section(section)
    }

    fn section_for_position(&self, position: i32) -> i32 {
        self.rows.section_for_position(position)
    }
}

impl<K: Ord, E, O> ListItemProvider for IndexableListAdapter<K, E, O> {
    fn item_count(&self) -> usize {
        self.row_count()
    }

    fn get_key(&self, index: usize) -> u64 {
        match self.row(index) {
            Some(row) => row.key().to_slot_id(),
            None => RowKey::fallback_slot_id(index),
        }
    }

    fn get_content_type(&self, index: usize) -> Option<u64> {
        self.item_view_type(index).map(ViewType::content_type)
    }

    fn get_index(&self, key: u64) -> Option<usize> {
        match RowKey::from_slot_id(key)? {
            RowKey::Header(group) => self.flat_position(group, None),
            RowKey::Child(group, child) => self.flat_position(group, Some(child)),
        }
    }
}
