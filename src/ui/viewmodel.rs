//! View model types representing renderable UI state.
//!
//! The view model is the display tree of the plugin: an immutable value computed
//! from `AppState` by `AppState::compute_viewmodel()` and consumed by the renderer.
//! It contains no business logic, only display-ready data. Because it is a plain
//! value with `PartialEq`, two renders of unchanged state can be compared directly.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::ui::viewmodel::{Body, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " My Library (0 books) ".to_string() },
//!     body: Body::Empty(EmptyState {
//!         message: "Your library is empty".to_string(),
//!         subtitle: "Press 'a' to add a book".to_string(),
//!     }),
//!     footer: FooterInfo { keybindings: "a: add  q: quit".to_string() },
//! };
//! assert!(vm.cards().is_empty());
//! ```

use crate::domain::{BookId, FormField};

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title and book count).
    pub header: HeaderInfo,

    /// Main area between header and footer.
    pub body: Body,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

impl UIViewModel {
    /// Cards in the body, or an empty slice if the body shows something else.
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        match &self.body {
            Body::Cards(cards) => cards,
            Body::Empty(_) | Body::Form(_) => &[],
        }
    }
}

/// What the main area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Placeholder for an empty library.
    Empty(EmptyState),
    /// One card per visible book, in library order.
    Cards(Vec<CardView>),
    /// The add-book form.
    Form(FormView),
}

/// Visual state of a card, mirrored in its accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Read,
    NotRead,
}

/// Display information for a single book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Id of the book this card was drawn from. Never printed.
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub state: CardState,
    /// "Read" or "Not Read".
    pub status_label: String,
    /// Label of the toggle button ("Mark Read" / "Mark Unread").
    pub toggle_label: String,
    /// Label of the remove button.
    pub remove_label: String,
    /// Whether this card has the keyboard selection.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "a: add  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when the library holds no books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Your library is empty").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// The add-book form as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Inputs in tab order.
    pub fields: Vec<FieldView>,

    /// Blocking notice from aggregate validation, if any.
    pub alert: Option<String>,
}

/// One input row of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: String,
    pub value: FieldValue,
    pub is_focused: bool,
    /// Inline error text under the input.
    pub error: Option<String>,
}

/// Contents of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}
