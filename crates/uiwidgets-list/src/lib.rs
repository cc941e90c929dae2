//! Indexable lists for sectioned, fast-scrollable list widgets.
//!
//! The crate has two layers:
//!
//! - [`IndexableList`] holds one section's items together with its sort key
//!   and display label.
//! - [`SectionIndex`] snapshots an ordered run of sections and maps flat list
//!   positions to sections and back, the way a jump-to-letter strip needs.
//!
//! [`IndexableListAdapter`] builds on both to flatten sections into header and
//! child rows for a virtualized list.
//!
//! # Example
//!
//! ```
//! use uiwidgets_list::{IndexableList, SectionIndex, SectionIndexer};
//!
//! let mut a = IndexableList::new('a', "A");
//! a.append_all(["Ada", "Alan"]);
//! let mut b = IndexableList::new('b', "B");
//! b.push("Barbara");
//!
//! let index = SectionIndex::new(&[a, b]).unwrap();
//! assert_eq!(index.position_for_section(1), 2);
//! assert_eq!(index.section_for_position(1), 0);
//! assert_eq!(index.section_for_position(3), -1);
//! ```
//!
//! Out-of-range queries never panic: they return `-1` and report a
//! [`BoundaryWarning`] to the index's [`BoundaryObserver`], which logs through
//! the `log` facade unless another observer is injected.

mod adapter;
mod error;
mod indexable;
mod indexable_list;
mod item_provider;
mod observer;
mod section_index;

pub use adapter::*;
pub use error::*;
pub use indexable::*;
pub use indexable_list::*;
pub use item_provider::*;
pub use observer::*;
pub use section_index::*;
