//! Soft boundary reporting for section index queries.
//!
//! Fast-scroll widgets routinely ask about stale sections or positions while
//! a list is mid-scroll. Those queries are answered with a sentinel, and the
//! out-of-range value is handed to a [`BoundaryObserver`] injected at
//! construction. The default observer forwards to the `log` facade.

use std::ops::RangeInclusive;
use std::sync::Mutex;

/// Which query produced a [`BoundaryWarning`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryQuery {
    /// `position_for_section` was given a section outside `[0, N)`.
    PositionForSection,
    /// `section_for_position` was given a position outside the reachable range.
    SectionForPosition,
}

/// Description of an out-of-range query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryWarning {
    pub query: BoundaryQuery,
    /// The offending section or position.
    pub value: i64,
    /// Inclusive valid range, or `None` when no value is valid (empty index).
    pub valid: Option<RangeInclusive<i64>>,
}

impl std::fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (what, given, domain) = match self.query {
            BoundaryQuery::PositionForSection => ("starting position", "section", "sections"),
            BoundaryQuery::SectionForPosition => ("section index", "position", "positions"),
        };
        write!(f, "Cannot get {what} for {given} {}, ", self.value)?;
        match &self.valid {
            Some(range) => write!(
                f,
                "{domain} range is [{},{}].",
                range.start(),
                range.end()
            ),
            None => write!(f, "there are no {domain}."),
        }
    }
}

/// Receives boundary warnings from a section index.
///
/// Implementations must not panic; the queries that call them are
/// documented as never failing.
pub trait BoundaryObserver {
    fn boundary_warning(&self, warning: &BoundaryWarning);
}

/// Default observer: logs each warning at `warn` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogBoundaryObserver;

impl BoundaryObserver for LogBoundaryObserver {
    fn boundary_warning(&self, warning: &BoundaryWarning) {
        log::warn!(target: "uiwidgets_list::section_index", "{warning}");
    }
}

/// Observer that keeps every warning it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    warnings: Mutex<Vec<BoundaryWarning>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far.
    pub fn warnings(&self) -> Vec<BoundaryWarning> {
        match self.warnings.lock() {
            Ok(warnings) => warnings.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drains and returns the recorded warnings.
    pub fn take(&self) -> Vec<BoundaryWarning> {
        match self.warnings.lock() {
            Ok(mut warnings) => std::mem::take(&mut *warnings),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl BoundaryObserver for RecordingObserver {
    fn boundary_warning(&self, warning: &BoundaryWarning) {
        match self.warnings.lock() {
            Ok(mut warnings) => warnings.push(warning.clone()),
            Err(poisoned) => poisoned.into_inner().push(warning.clone()),
        }
    }
}

impl<O: BoundaryObserver + ?Sized> BoundaryObserver for std::sync::Arc<O> {
    fn boundary_warning(&self, warning: &BoundaryWarning) {
        (**self).boundary_warning(warning);
    }
}

impl<O: BoundaryObserver + ?Sized> BoundaryObserver for std::rc::Rc<O> {
    fn boundary_warning(&self, warning: &BoundaryWarning) {
        (**self).boundary_warning(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_warning_message() {
        let warning = BoundaryWarning {
            query: BoundaryQuery::PositionForSection,
            value: 5,
            valid: Some(0..=2),
        };
        assert_eq!(
            warning.to_string(),
            "Cannot get starting position for section 5, sections range is [0,2]."
        );
    }

    #[test]
    fn test_position_warning_message_without_range() {
        let warning = BoundaryWarning {
            query: BoundaryQuery::SectionForPosition,
            value: 0,
            valid: None,
        };
        assert_eq!(
            warning.to_string(),
            "Cannot get section index for position 0, there are no positions."
        );
    }

    #[test]
    fn test_recording_observer_take_drains() {
        let observer = RecordingObserver::new();
        let warning = BoundaryWarning {
            query: BoundaryQuery::SectionForPosition,
            value: -1,
            valid: Some(0..=3),
        };
        observer.boundary_warning(&warning);
        assert_eq!(observer.warnings(), vec![warning.clone()]);
        assert_eq!(observer.take(), vec![warning]);
        assert!(observer.warnings().is_empty());
    }
}
