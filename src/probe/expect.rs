//! Expectation helpers turning operation outcomes into probe results.

use std::fmt::Debug;

use thiserror::Error;

use crate::schema::{ErrorClass, SchemaError, SchemaResult};

/// Why a probe did not hold.
#[derive(Debug, Error)]
pub enum ProbeFailure {
    /// A failure of the given class was required but the operation succeeded
    #[error("expected a {expected} error, but the operation succeeded")]
    UnexpectedSuccess { expected: ErrorClass },

    /// The operation failed, but with a different class than required
    #[error("expected a {expected} error, got {actual}")]
    WrongErrorClass {
        expected: ErrorClass,
        actual: SchemaError,
    },

    /// The operation was required to succeed
    #[error("unexpected error: {0}")]
    Unexpected(#[from] SchemaError),

    /// The operation succeeded with the wrong result
    #[error("{what}: expected {expected}, got {actual}")]
    Mismatch {
        what: String,
        expected: String,
        actual: String,
    },
}

/// Outcome of one probe.
pub type ProbeResult = Result<(), ProbeFailure>;

/// Requires `result` to fail with `expected`; returns the caught error.
pub fn expect_failure<T>(result: SchemaResult<T>, expected: ErrorClass) -> Result<SchemaError, ProbeFailure> {
    match result {
        Ok(_) => Err(ProbeFailure::UnexpectedSuccess { expected }),
        Err(err) if err.class() == expected => Ok(err),
        Err(actual) => Err(ProbeFailure::WrongErrorClass { expected, actual }),
    }
}

/// Requires `result` to succeed; returns the value.
pub fn expect_success<T>(result: SchemaResult<T>) -> Result<T, ProbeFailure> {
    result.map_err(ProbeFailure::Unexpected)
}

/// Requires `actual == expected`.
pub fn expect_eq<T>(what: &str, expected: &T, actual: &T) -> ProbeResult
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(ProbeFailure::Mismatch {
            what: what.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_error() -> SchemaError {
        SchemaError::validation_failed("M", vec![])
    }

    #[test]
    fn test_expected_failure_is_returned() {
        let err = expect_failure::<()>(Err(validation_error()), ErrorClass::Validation).unwrap();
        assert_eq!(err.class(), ErrorClass::Validation);
    }

    #[test]
    fn test_success_when_failure_required() {
        let failure = expect_failure(Ok(1), ErrorClass::Validation).unwrap_err();
        assert!(matches!(
            failure,
            ProbeFailure::UnexpectedSuccess {
                expected: ErrorClass::Validation
            }
        ));
        assert_eq!(
            failure.to_string(),
            "expected a validation error, but the operation succeeded"
        );
    }

    #[test]
    fn test_wrong_class_is_a_failure() {
        let failure =
            expect_failure::<()>(Err(validation_error()), ErrorClass::ImmutabilityOrType)
                .unwrap_err();
        assert!(matches!(failure, ProbeFailure::WrongErrorClass { .. }));
        assert!(failure.to_string().contains("PROBE_VALIDATION_FAILED"));
    }

    #[test]
    fn test_expect_success_wraps_error() {
        let failure = expect_success::<()>(Err(validation_error())).unwrap_err();
        assert!(matches!(failure, ProbeFailure::Unexpected(_)));
        assert_eq!(expect_success(Ok(7)).unwrap(), 7);
    }

    #[test]
    fn test_expect_eq_reports_both_sides() {
        assert!(expect_eq("len", &1, &1).is_ok());
        let failure = expect_eq("len", &1, &2).unwrap_err();
        assert_eq!(failure.to_string(), "len: expected 1, got 2");
    }
}
