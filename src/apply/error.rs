//! Error types for partial application.
//!
//! Placeholder substitution consumes fresh arguments positionally; running
//! out of them is an arity violation and is reported through a distinct
//! error type rather than by silently invoking the callable with a short
//! argument list.

/// Represents an arity violation during placeholder substitution.
///
/// Raised when a partial application holds more placeholders than the call
/// supplies fresh arguments to fill them.
///
/// # Examples
///
/// ```rust
/// use curryfn::apply::ArityError;
///
/// let error = ArityError {
///     placeholders: 2,
///     supplied: 1,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "placeholder substitution requires 2 arguments, but only 1 were supplied"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityError {
    /// How many placeholders the applied-argument list contains.
    pub placeholders: usize,
    /// How many fresh arguments the call supplied.
    pub supplied: usize,
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "placeholder substitution requires {} arguments, but only {} were supplied",
            self.placeholders, self.supplied
        )
    }
}

impl std::error::Error for ArityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_error_display() {
        let error = ArityError {
            placeholders: 3,
            supplied: 0,
        };
        assert_eq!(
            format!("{error}"),
            "placeholder substitution requires 3 arguments, but only 0 were supplied"
        );
    }

    #[test]
    fn test_arity_error_equality() {
        let first = ArityError {
            placeholders: 2,
            supplied: 1,
        };
        let second = ArityError {
            placeholders: 2,
            supplied: 1,
        };
        let third = ArityError {
            placeholders: 2,
            supplied: 0,
        };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn test_arity_error_source() {
        use std::error::Error;

        let error = ArityError {
            placeholders: 1,
            supplied: 0,
        };
        assert!(error.source().is_none());
    }
}
