//! Book domain model.
//!
//! A [`Book`] is one entry of the reading list. Its [`BookId`] is generated at
//! construction and never changes; it exists only so the UI can map a card back to
//! the book it was drawn from and is never shown to the user.

use crate::domain::error::Result;
use crate::domain::validation;
use std::fmt;
use uuid::Uuid;

/// Opaque, unique identifier of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(Uuid);

impl BookId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single book in the library.
///
/// Fields are validated once in [`Book::new`] and are read-only afterwards,
/// except the read flag, which only [`Book::toggle_read`] changes:
///
/// ```compile_fail
/// use bookshelf::domain::Book;
///
/// let mut book = Book::new("Dune", "Frank Herbert", 412, false).unwrap();
/// book.pages = 0;
/// ```
///
/// ```compile_fail
/// use bookshelf::domain::Book;
///
/// let mut book = Book::new("Dune", "Frank Herbert", 412, false).unwrap();
/// book.read = true;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    pages: u32,
    read: bool,
}

impl Book {
    /// Creates a book with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Validation`](crate::domain::BookshelfError::Validation)
    /// if the title or author is blank or `pages` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::domain::Book;
    ///
    /// let book = Book::new("Dune", "Frank Herbert", 412, false)?;
    /// assert_eq!(book.title(), "Dune");
    /// assert!(Book::new("", "Frank Herbert", 412, false).is_err());
    /// # Ok::<(), bookshelf::BookshelfError>(())
    /// ```
    pub fn new(title: &str, author: &str, pages: u32, read: bool) -> Result<Self> {
        let title = validation::validate_title(title)?;
        let author = validation::validate_author(author)?;
        let pages = validation::validate_pages(pages)?;

        Ok(Self {
            id: BookId::new(),
            title,
            author,
            pages,
            read,
        })
    }

    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    /// Title, non-empty and trimmed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author, non-empty and trimmed.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Page count, at least one.
    #[must_use]
    pub const fn pages(&self) -> u32 {
        self.pages
    }

    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.read
    }

    /// Flips the read flag.
    pub fn toggle_read(&mut self) {
        self.read = !self.read;
    }

    /// Status text shown on the book's card.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Not Read"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookshelfError;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut book = Book::new("The Hobbit", "J.R.R. Tolkien", 295, true).unwrap();
        book.toggle_read();
        assert!(!book.is_read());
        assert_eq!(book.status_label(), "Not Read");
        book.toggle_read();
        assert!(book.is_read());
        assert_eq!(book.status_label(), "Read");
    }

    #[test]
    fn identical_books_get_distinct_ids() {
        let a = Book::new("Dune", "Frank Herbert", 412, false).unwrap();
        let b = Book::new("Dune", "Frank Herbert", 412, false).unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_zero_pages() {
        let err = Book::new("Dune", "Frank Herbert", 0, false).unwrap_err();
        assert!(matches!(err, BookshelfError::Validation(ref errors) if errors.len() == 1));
    }

    #[test]
    fn stores_trimmed_text() {
        let book = Book::new("  Dune  ", " Frank Herbert ", 412, false).unwrap();
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), "Frank Herbert");
    }
}
