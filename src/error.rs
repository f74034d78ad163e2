//! Error types for the formula engines

use thiserror::Error;

/// Result alias used by every fallible engine function
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Precondition violations raised by the engines
///
/// There is a single kind of failure: an argument outside the domain of the
/// formula. Nothing is retried and no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// An input violated a precondition of the formula
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// What the parameter must satisfy
        reason: &'static str,
    },
}

impl FinanceError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        FinanceError::InvalidArgument { name, reason }
    }
}

/// Reject a zero divisor with an `InvalidArgument` naming the parameter
pub(crate) fn ensure_nonzero(value: f64, name: &'static str) -> FinanceResult<f64> {
    if value == 0.0 {
        return Err(FinanceError::invalid(name, "cannot be zero"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_parameter() {
        let err = FinanceError::invalid("principal", "must be positive");
        assert_eq!(err.to_string(), "Invalid argument `principal`: must be positive");
    }

    #[test]
    fn test_ensure_nonzero() {
        assert_eq!(ensure_nonzero(2.5, "total"), Ok(2.5));
        assert!(matches!(
            ensure_nonzero(0.0, "total"),
            Err(FinanceError::InvalidArgument { name: "total", .. })
        ));
        // -0.0 compares equal to zero
        assert!(ensure_nonzero(-0.0, "cost").is_err());
    }
}
