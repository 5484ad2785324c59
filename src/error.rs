//! Error types for the path-prefix library.
//!
//! This module provides the error type for prefix join operations,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a path-prefix error.
///
/// # Examples
///
/// ```
/// use path_prefix::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("/posts/new"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the path-prefix library.
///
/// Join operations are infallible for well-typed inputs; the only runtime
/// failure is an explicitly absent separator passed to
/// [`PathPrefix::relative_join_with`](crate::PathPrefix::relative_join_with).
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid argument was provided to a join operation.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: String,
        /// The reason the argument is invalid.
        reason: String,
    },
}

impl Error {
    /// Check if error indicates an invalid argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_prefix::Error;
    ///
    /// let err = Error::InvalidArgument {
    ///     argument: "separator".to_string(),
    ///     reason: "must be present".to_string(),
    /// };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
