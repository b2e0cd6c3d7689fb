//! The application error type and the fallback adapter used by the console.

use crate::models::DatabaseId;

/// The errors that may occur while talking to the database or the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The database could not be opened or prepared for use.
    #[error("could not connect to database at {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A category with the same name is already stored.
    #[error("a category named \"{0}\" already exists")]
    DuplicateCategoryName(String),

    /// An expense referenced a category id that is not stored.
    #[error("category {0} does not exist")]
    UnknownCategory(DatabaseId),

    /// Any other SQL error, including rows that could not be decoded.
    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// The input stream ended while a prompt was waiting for a line.
    #[error("input closed")]
    InputClosed,

    /// A total of stored amounts does not fit in a `Decimal`.
    #[error("amount total is too large to represent")]
    AmountOverflow,

    /// The user gave up on a prompt by repeatedly entering invalid values.
    #[error("no valid input after {0} attempts")]
    TooManyAttempts(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Degrades a failed result to a fallback value, logging the error.
///
/// The console's read paths use this so that a failed query looks the same as
/// an empty one: no rows, a zero total, `false`.
pub trait OrLog<T> {
    fn or_log(self, fallback: T, context: &str) -> T;
}

impl<T> OrLog<T> for Result<T, Error> {
    fn or_log(self, fallback: T, context: &str) -> T {
        self.unwrap_or_else(|error| {
            tracing::error!("{context}: {error}");
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_log_keeps_ok_value() {
        let result: Result<i32, Error> = Ok(7);
        assert_eq!(result.or_log(0, "ignored"), 7);
    }

    #[test]
    fn test_or_log_substitutes_fallback_on_error() {
        let result: Result<Vec<i32>, Error> = Err(Error::InputClosed);
        assert!(result.or_log(Vec::new(), "Error fetching").is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::DuplicateCategoryName("Food".to_string()).to_string(),
            "a category named \"Food\" already exists"
        );
        assert_eq!(Error::UnknownCategory(42).to_string(), "category 42 does not exist");
        assert_eq!(
            Error::AmountOverflow.to_string(),
            "amount total is too large to represent"
        );
        assert_eq!(
            Error::TooManyAttempts(3).to_string(),
            "no valid input after 3 attempts"
        );
    }
}
