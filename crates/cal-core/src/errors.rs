//! Error types for calendario.
//!
//! Every library crate in the workspace reports failures through the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] macro
//! keeps precondition checks to one line at the call site.
//!
//! [`ensure!`]: crate::ensure

use thiserror::Error;

/// The top-level error type used throughout calendario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A (year, month, day) triple that does not name a real calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month, 1-based.
        month: i32,
        /// Requested day of month.
        day: i32,
    },

    /// Text that could not be parsed into the requested value.
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// Name of the value being parsed (e.g. `"date"`).
        what: &'static str,
        /// The offending input.
        input: String,
    },
}

/// Shorthand `Result` type used throughout calendario.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cal_core::{ensure, errors::Error};
/// fn positive(x: i32) -> cal_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_is_zero_padded() {
        let err = Error::InvalidDate {
            year: 2025,
            month: 2,
            day: 31,
        };
        assert_eq!(err.to_string(), "invalid date: 2025-02-31");
    }

    #[test]
    fn parse_message_quotes_input() {
        let err = Error::Parse {
            what: "date",
            input: "2025-13".into(),
        };
        assert_eq!(err.to_string(), "cannot parse date from \"2025-13\"");
    }
}
