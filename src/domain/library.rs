//! The in-memory book collection.
//!
//! [`Library`] owns an ordered list of books for the lifetime of the plugin. Books
//! are kept in insertion order and looked up by linear scan, which is fine for a
//! hand-maintained reading list.
//!
//! Every successful mutation raises a render request. The controller drains it with
//! [`Library::take_render_request`] after each event so the display always reflects
//! the current contents. Mutations that bypass the library (toggling a book through
//! [`Library::find_mut`]) must call [`Library::request_render`] themselves.

use crate::domain::book::{Book, BookId};
use crate::domain::error::Result;

/// Ordered, in-memory collection of books.
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
    render_requested: bool,
}

impl Library {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library seeded with the two demonstration books.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::domain::Library;
    ///
    /// let library = Library::with_demo_books();
    /// let titles: Vec<&str> = library.books().iter().map(|b| b.title()).collect();
    /// assert_eq!(titles, ["The Hobbit", "The Great Gatsby"]);
    /// ```
    #[must_use]
    pub fn with_demo_books() -> Self {
        let mut library = Self::new();
        let demo = [
            ("The Hobbit", "J.R.R. Tolkien", 295, true),
            ("The Great Gatsby", "F. Scott Fitzgerald", 218, false),
        ];
        for (title, author, pages, read) in demo {
            if let Err(e) = library.add(title, author, pages, read) {
                tracing::warn!(error = %e, title, "demo book rejected");
            }
        }
        library
    }

    /// Creates a book and appends it to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the fields are invalid. The library is left
    /// unchanged in that case.
    pub fn add(&mut self, title: &str, author: &str, pages: u32, read: bool) -> Result<BookId> {
        let book = Book::new(title, author, pages, read)?;
        let id = book.id();

        tracing::debug!(book_id = %id, title = %book.title(), pages, read, "book added");

        self.books.push(book);
        self.render_requested = true;
        Ok(id)
    }

    /// Removes the book with `id`, keeping the order of the rest.
    ///
    /// Returns `false` (and changes nothing) if no such book exists.
    pub fn remove(&mut self, id: BookId) -> bool {
        let Some(index) = self.books.iter().position(|b| b.id() == id) else {
            tracing::debug!(book_id = %id, "remove ignored, no such book");
            return false;
        };

        let removed = self.books.remove(index);
        tracing::debug!(book_id = %id, title = %removed.title(), "book removed");
        self.render_requested = true;
        true
    }

    #[must_use]
    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id() == id)
    }

    pub fn find_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id() == id)
    }

    /// Books in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Asks for a redraw after a change made outside `add`/`remove`.
    pub fn request_render(&mut self) {
        self.render_requested = true;
    }

    /// Returns whether a render was requested since the last call, and clears it.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }
}
