//! Domain layer for the Bookshelf plugin.
//!
//! This module contains the core domain types and rules, independent of Zellij APIs
//! or rendering concerns.
//!
//! # Organization
//!
//! - [`book`]: the `Book` record and its identifier
//! - [`library`]: the ordered in-memory collection of books
//! - [`validation`]: field validators shared by the form and `Book::new`
//! - [`error`]: error types and result aliases
//!
//! # Examples
//!
//! ```
//! use bookshelf::domain::{Library, Result};
//!
//! fn build() -> Result<Library> {
//!     let mut library = Library::new();
//!     library.add("Dune", "Frank Herbert", 412, false)?;
//!     Ok(library)
//! }
//! assert_eq!(build().unwrap().len(), 1);
//! ```

pub mod book;
pub mod error;
pub mod library;
pub mod validation;

pub use book::{Book, BookId};
pub use error::{BookshelfError, Result};
pub use library::Library;
pub use validation::{FieldError, FieldErrorKind, FormField};
