//! Error type shared by indexable lists and section indexes.

/// Hard failures surfaced to the caller.
///
/// Out-of-range section/position queries are *not* errors; they are reported
/// through a [`BoundaryObserver`](crate::BoundaryObserver) and answered with a
/// sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexableError {
    /// A construction-time invariant did not hold.
    PreconditionViolation { reason: &'static str },
    /// An index-based list operation addressed a slot outside the list.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for IndexableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexableError::PreconditionViolation { reason } => {
                write!(f, "precondition violated: {reason}")
            }
            IndexableError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
        }
    }
}

impl std::error::Error for IndexableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_index() {
        let err = IndexableError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for list of length 3");
    }

    #[test]
    fn display_includes_precondition_reason() {
        let err = IndexableError::PreconditionViolation {
            reason: "too many items",
        };
        assert_eq!(err.to_string(), "precondition violated: too many items");
    }
}
