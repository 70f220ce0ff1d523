//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the [`Library`] and the add-book form, tracks the keyboard selection and
//! the pane size, and computes the display tree (`UIViewModel`) from a snapshot of
//! all of that.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` is a pure function of the state: calling it twice without an
//! intervening mutation yields equal view models. It handles windowing (showing the
//! cards that fit around the selection), the empty placeholder, and the form panel.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::AppState;
//! use bookshelf::domain::Library;
//! use bookshelf::ui::Theme;
//!
//! let state = AppState::new(Library::with_demo_books(), Theme::default());
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.cards().len(), 2);
//! ```

use super::form::FormState;
use super::modes::{FormMode, ValidationStyle};
use crate::domain::{Book, BookId, FormField, Library};
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CardState, CardView, EmptyState, FieldValue, FieldView, FooterInfo, FormView,
    HeaderInfo, UIViewModel,
};

/// Pane size in character cells, as last reported by the render callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All books of the session.
    pub library: Library,

    /// Contents and feedback of the add-book form.
    pub form: FormState,

    /// Whether the form is open.
    pub form_mode: FormMode,

    /// How submission failures are reported.
    pub validation_style: ValidationStyle,

    /// Zero-based index of the selected book within the library.
    ///
    /// Clamped by `clamp_selection()` after removals. Wraps around during
    /// navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Pane size used for windowing and click resolution.
    pub viewport: Viewport,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state around an existing library.
    ///
    /// The form starts hidden, validation is inline, and the first card is selected.
    #[must_use]
    pub fn new(library: Library, theme: Theme) -> Self {
        Self {
            library,
            form: FormState::default(),
            form_mode: FormMode::Hidden,
            validation_style: ValidationStyle::Inline,
            selected_index: 0,
            viewport: Viewport::default(),
            theme,
        }
    }

    /// Records the pane size. Called by the plugin before every render.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = Viewport { rows, cols };
    }

    /// Opens the form, discarding stale errors from a previous attempt.
    pub fn show_form(&mut self) {
        self.form.clear_feedback();
        self.form.focus = FormField::Title;
        self.form_mode = FormMode::Visible;
    }

    /// Closes the form and resets its inputs.
    pub fn hide_form(&mut self) {
        self.form.reset();
        self.form_mode = FormMode::Hidden;
    }

    /// Moves selection down by one card, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.library.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.library.len();
    }

    /// Moves selection up by one card, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.library.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.library.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Selects the card of `id`, if it exists.
    pub fn select(&mut self, id: BookId) {
        if let Some(index) = self.library.books().iter().position(|b| b.id() == id) {
            self.selected_index = index;
        }
    }

    /// Keeps the selection within the library after it shrinks.
    pub fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.library.len().saturating_sub(1));
    }

    /// Id of the selected book, if the library is not empty.
    #[must_use]
    pub fn selected_book_id(&self) -> Option<BookId> {
        self.library.books().get(self.selected_index).map(Book::id)
    }

    /// Computes the display tree from the current state.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Work out how many cards fit between header and footer
    /// 2. Center the window on the selected card
    /// 3. Shift the window back if it runs past the last card
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let body = match self.form_mode {
            FormMode::Visible => Body::Form(self.compute_form_view()),
            FormMode::Hidden if self.library.is_empty() => Body::Empty(EmptyState {
                message: "Your library is empty".to_string(),
                subtitle: "Press 'a' to add your first book".to_string(),
            }),
            FormMode::Hidden => Body::Cards(self.compute_cards()),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_cards(&self) -> Vec<CardView> {
        let books = self.library.books();
        let per_page = layout::cards_per_page(self.viewport.rows);

        let mut visible_start = self.selected_index.saturating_sub(per_page / 2);
        let visible_end = (visible_start + per_page).min(books.len());
        if visible_end - visible_start < per_page && books.len() >= per_page {
            visible_start = visible_end.saturating_sub(per_page);
        }

        books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, book)| {
                self.compute_card(book, visible_start + offset == self.selected_index)
            })
            .collect()
    }

    /// Card for one book. Title and author are cut to the pane width.
    fn compute_card(&self, book: &Book, is_selected: bool) -> CardView {
        let max_text = self
            .viewport
            .cols
            .saturating_sub(layout::CARD_TEXT_COL + 1);

        let (state, toggle_label) = if book.is_read() {
            (CardState::Read, "Mark Unread")
        } else {
            (CardState::NotRead, "Mark Read")
        };

        CardView {
            id: book.id(),
            title: truncate(book.title(), max_text),
            author: truncate(book.author(), max_text.saturating_sub(3)),
            pages: book.pages(),
            state,
            status_label: book.status_label().to_string(),
            toggle_label: toggle_label.to_string(),
            remove_label: "Remove".to_string(),
            is_selected,
        }
    }

    fn compute_form_view(&self) -> FormView {
        let fields = FormField::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                label: field.label().to_string(),
                value: if field.is_text() {
                    FieldValue::Text(self.form.value(field).to_string())
                } else {
                    FieldValue::Checkbox(self.form.read)
                },
                is_focused: self.form.focus == field,
                error: self.form.error(field).map(|e| e.message().to_string()),
            })
            .collect();

        FormView {
            fields,
            alert: self.form.alert.map(str::to_string),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.form_mode {
            FormMode::Visible => " Add a New Book ".to_string(),
            FormMode::Hidden => {
                let count = self.library.len();
                let noun = if count == 1 { "book" } else { "books" };
                format!(" My Library ({count} {noun}) ")
            }
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.form_mode {
            FormMode::Visible if self.form.alert.is_some() => "Press any key to continue",
            FormMode::Visible => "Tab/↑↓: field  Space: tick read  Enter: add book  Esc: cancel",
            FormMode::Hidden if self.library.is_empty() => "a: add book  q: quit",
            FormMode::Hidden => {
                "a: add  j/k: select  r: toggle read  d: remove  click a button  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Cuts `text` to at most `max` characters, marking the cut with "..." when
/// there is room for it.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max < 3 {
        return text.chars().take(max).collect();
    }
    let keep = max.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}
