//! Error taxonomy for formatting operations.
//!
//! The C ABI collapses every failure to the `0` sentinel; the safe API keeps
//! the distinction so in-process callers can tell a bad argument from a
//! timestamp the platform rejected.

use thiserror::Error;

/// The result for fallible formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Why a formatting call produced no output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// A required reference was absent or a capacity was not positive.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The timestamp could not be broken down into calendar fields.
    #[error("timestamp {0} is outside the representable calendar range")]
    ConversionFailure(i64),

    /// The rendered text plus terminator did not fit the output buffer.
    ///
    /// Also covers the `strftime` ambiguity where a legitimately empty
    /// expansion is indistinguishable from overflow.
    #[error("formatted output does not fit in {capacity} bytes")]
    FormattingOverflow {
        /// Capacity of the buffer the render was attempted into.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            FormatError::InvalidArgument("output buffer is empty").to_string(),
            "invalid argument: output buffer is empty"
        );
        assert_eq!(
            FormatError::ConversionFailure(i64::MAX).to_string(),
            format!("timestamp {} is outside the representable calendar range", i64::MAX)
        );
        assert_eq!(
            FormatError::FormattingOverflow { capacity: 4 }.to_string(),
            "formatted output does not fit in 4 bytes"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_bounds<T: Send + Sync>() {}
        assert_bounds::<FormatError>();
    }
}
