//! Error types for the Bookshelf plugin.
//!
//! This module defines the centralized error type [`BookshelfError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The only error a user can provoke is an input validation failure. It is caught at
//! the form boundary and shown inline, so it never reaches the library or the
//! renderer. The remaining variants cover plugin setup (themes, configuration, I/O).

use crate::domain::validation::FieldError;
use thiserror::Error;

/// The main error type for Bookshelf plugin operations.
///
/// # Examples
///
/// ```
/// use bookshelf::domain::BookshelfError;
///
/// fn load_theme() -> Result<(), BookshelfError> {
///     Err(BookshelfError::Theme("unknown theme".to_string()))
/// }
/// assert!(load_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// One or more book fields failed validation.
    ///
    /// Carries every failing field so callers can surface them individually.
    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<FieldError>),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<FieldError> for BookshelfError {
    fn from(error: FieldError) -> Self {
        Self::Validation(vec![error])
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A specialized `Result` type for Bookshelf operations.
pub type Result<T> = std::result::Result<T, BookshelfError>;
