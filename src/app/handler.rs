//! Event handling and state transition logic.
//!
//! This module implements the controller: it takes one user event at a time,
//! applies it to `AppState`, and reports whether the pane must be redrawn.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys and mouse clicks)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState`, `FormState` and `Library` methods
//! 4. Render requests raised by the library are drained into the result
//!
//! # Event Types
//!
//! - **Form**: `ShowForm`, `CancelForm`, `SubmitForm`, `NextField`, `PrevField`,
//!   `Char`, `Backspace`, `DismissAlert`
//! - **Cards**: `SelectNext`, `SelectPrev`, `ToggleSelected`, `RemoveSelected`,
//!   `Click`
//! - **Plugin**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::{handle_event, AppState, Event};
//! use bookshelf::domain::Library;
//! use bookshelf::ui::Theme;
//!
//! let mut state = AppState::new(Library::new(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::ShowForm)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

use crate::app::modes::FormMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::BookId;
use crate::ui::layout::{self, CardTarget};

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes and
/// action emissions. Events are processed strictly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the add-book form.
    ShowForm,
    /// Closes the form without adding anything.
    CancelForm,
    /// Validates the form and adds the book if it passes.
    SubmitForm,
    /// Moves form focus to the next field.
    NextField,
    /// Moves form focus to the previous field.
    PrevField,
    /// Types a character into the focused field.
    Char(char),
    /// Deletes the last character of the focused field.
    Backspace,
    /// Dismisses the blocking validation notice.
    DismissAlert,

    /// Moves the card selection down (wraps to top).
    SelectNext,
    /// Moves the card selection up (wraps to bottom).
    SelectPrev,
    /// Toggles the read status of the selected card.
    ToggleSelected,
    /// Removes the selected card.
    RemoveSelected,
    /// Mouse click at a 1-indexed pane cell.
    Click {
        row: usize,
        col: usize,
    },

    /// Hides the plugin pane.
    CloseFocus,
}

impl Event {
    /// Builds a [`Event::Click`] from a 0-indexed pane position as reported by
    /// Zellij.
    ///
    /// Returns `None` for a negative line.
    ///
    /// ```rust
    /// use bookshelf::Event;
    ///
    /// assert_eq!(Event::from_click(0, 0), Some(Event::Click { row: 1, col: 1 }));
    /// assert_eq!(Event::from_click(-1, 4), None);
    /// ```
    #[must_use]
    pub fn from_click(line: isize, col: usize) -> Option<Self> {
        let row = usize::try_from(line).ok()?.checked_add(1)?;
        Some(Self::Click {
            row,
            col: col.checked_add(1)?,
        })
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `true` when visible state
/// changed, including every library mutation.
///
/// # Errors
///
/// Returns an error only if a validated submission is still rejected by the
/// library, which indicates the form and the domain disagree on the rules.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let (changed, actions) = match event {
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::ShowForm => {
            if state.form_mode == FormMode::Visible {
                return Ok((false, vec![]));
            }
            tracing::debug!("showing add-book form");
            state.show_form();
            (true, vec![])
        }
        Event::CancelForm => {
            if state.form_mode == FormMode::Hidden {
                return Ok((false, vec![]));
            }
            tracing::debug!("add-book form cancelled");
            state.hide_form();
            (true, vec![])
        }
        Event::SubmitForm => (submit_form(state)?, vec![]),
        Event::NextField | Event::PrevField | Event::Char(_) | Event::Backspace => {
            (edit_form(state, event), vec![])
        }
        Event::DismissAlert => (state.form.alert.take().is_some(), vec![]),
        Event::SelectNext | Event::SelectPrev => {
            if state.form_mode == FormMode::Visible || state.library.is_empty() {
                return Ok((false, vec![]));
            }
            if *event == Event::SelectNext {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
            (true, vec![])
        }
        Event::ToggleSelected | Event::RemoveSelected => {
            if state.form_mode == FormMode::Visible {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_book_id() else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };
            let target = if *event == Event::ToggleSelected {
                CardTarget::Toggle
            } else {
                CardTarget::Remove
            };
            (dispatch_card_action(state, id, target), vec![])
        }
        Event::Click { row, col } => (handle_click(state, *row, *col), vec![]),
    };

    let render_requested = state.library.take_render_request();
    Ok((changed || render_requested, actions))
}

fn submit_form(state: &mut AppState) -> Result<bool> {
    if state.form_mode != FormMode::Visible {
        return Ok(false);
    }

    let Some(book) = state.form.submit(state.validation_style) else {
        return Ok(true);
    };

    let id = state
        .library
        .add(&book.title, &book.author, book.pages, book.read)?;
    state.hide_form();
    state.select(id);
    Ok(true)
}

fn edit_form(state: &mut AppState, event: &Event) -> bool {
    if state.form_mode != FormMode::Visible {
        return false;
    }

    let style = state.validation_style;
    match event {
        Event::NextField => state.form.focus_next(),
        Event::PrevField => state.form.focus_prev(),
        Event::Char(c) => state.form.insert_char(*c, style),
        Event::Backspace => state.form.delete_char(style),
        _ => return false,
    }
    true
}

/// Resolves a click through the card layout of the current display.
fn handle_click(state: &mut AppState, row: usize, col: usize) -> bool {
    if state.form_mode == FormMode::Visible {
        return false;
    }

    let viewmodel = state.compute_viewmodel();
    let layouts = layout::card_layouts(viewmodel.cards());

    match layout::hit_test(&layouts, row, col) {
        Some(hit) => {
            tracing::debug!(row, col, book_id = %hit.id, target = ?hit.target, "card clicked");
            dispatch_card_action(state, hit.id, hit.target)
        }
        None => {
            tracing::trace!(row, col, "click outside any card");
            false
        }
    }
}

/// Applies a card action to the book it was resolved to.
///
/// Returns `false` if the book no longer exists, so stale clicks are ignored.
fn dispatch_card_action(state: &mut AppState, id: BookId, target: CardTarget) -> bool {
    if state.library.find(id).is_none() {
        tracing::debug!(book_id = %id, "card action for unknown book ignored");
        return false;
    }

    match target {
        CardTarget::Remove => {
            state.library.remove(id);
            state.clamp_selection();
        }
        CardTarget::Toggle => {
            state.select(id);
            if let Some(book) = state.library.find_mut(id) {
                book.toggle_read();
                tracing::debug!(book_id = %id, read = book.is_read(), "read status toggled");
            }
            // toggling bypasses the library's mutation path
            state.library.request_render();
        }
        CardTarget::Body => state.select(id),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::ValidationStyle;
    use crate::domain::{FormField, Library};
    use crate::ui::layout::BODY_START_ROW;
    use crate::ui::Theme;

    fn demo_state() -> AppState {
        AppState::new(Library::with_demo_books(), Theme::default())
    }

    fn send(state: &mut AppState, event: Event) -> bool {
        handle_event(state, &event).unwrap().0
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }

    #[test]
    fn form_opens_and_cancels() {
        let mut state = demo_state();
        assert!(send(&mut state, Event::ShowForm));
        assert_eq!(state.form_mode, FormMode::Visible);

        type_text(&mut state, "Half");
        assert!(send(&mut state, Event::CancelForm));
        assert_eq!(state.form_mode, FormMode::Hidden);
        assert!(state.form.title.is_empty());
        assert!(!send(&mut state, Event::CancelForm));
    }

    #[test]
    fn reopening_clears_previous_errors() {
        let mut state = demo_state();
        send(&mut state, Event::ShowForm);
        type_text(&mut state, "Dune");
        send(&mut state, Event::SubmitForm);
        assert!(!state.form.errors.is_empty());

        // keep typed text but hide, then reopen
        state.form_mode = FormMode::Hidden;
        send(&mut state, Event::ShowForm);
        assert!(state.form.errors.is_empty());
        assert_eq!(state.form.focus, FormField::Title);
    }

    #[test]
    fn successful_submit_adds_and_closes() {
        let mut state = demo_state();
        send(&mut state, Event::ShowForm);
        type_text(&mut state, "Dune");
        send(&mut state, Event::NextField);
        type_text(&mut state, "Frank Herbert");
        send(&mut state, Event::NextField);
        type_text(&mut state, "412");
        send(&mut state, Event::NextField);
        send(&mut state, Event::Char(' '));

        assert!(send(&mut state, Event::SubmitForm));
        assert_eq!(state.form_mode, FormMode::Hidden);
        assert_eq!(state.library.len(), 3);

        let added = &state.library.books()[2];
        assert_eq!(added.title(), "Dune");
        assert!(added.is_read());
        assert_eq!(state.selected_index, 2);
        assert_eq!(state.form.title, "");
    }

    #[test]
    fn empty_title_keeps_form_open() {
        let mut state = demo_state();
        send(&mut state, Event::ShowForm);
        send(&mut state, Event::NextField);
        type_text(&mut state, "X");
        send(&mut state, Event::NextField);
        type_text(&mut state, "10");

        assert!(send(&mut state, Event::SubmitForm));
        assert_eq!(state.form_mode, FormMode::Visible);
        assert_eq!(state.library.len(), 2);
        assert_eq!(state.form.focus, FormField::Title);
        assert!(state.form.error(FormField::Title).is_some());
        assert!(state.form.error(FormField::Author).is_none());
    }

    #[test]
    fn alert_style_blocks_until_dismissed() {
        let mut state = demo_state();
        state.validation_style = ValidationStyle::Alert;
        send(&mut state, Event::ShowForm);
        send(&mut state, Event::SubmitForm);

        assert!(state.form.alert.is_some());
        assert!(send(&mut state, Event::DismissAlert));
        assert!(state.form.alert.is_none());
        assert!(!send(&mut state, Event::DismissAlert));
        assert_eq!(state.form_mode, FormMode::Visible);
    }

    #[test]
    fn keyboard_toggle_and_remove() {
        let mut state = demo_state();
        send(&mut state, Event::SelectNext);
        let gatsby = state.selected_book_id().unwrap();

        assert!(send(&mut state, Event::ToggleSelected));
        assert!(state.library.find(gatsby).unwrap().is_read());

        assert!(send(&mut state, Event::RemoveSelected));
        assert!(state.library.find(gatsby).is_none());
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn click_on_toggle_button_flips_status() {
        let mut state = demo_state();
        let hobbit = state.library.books()[0].id();
        let vm = state.compute_viewmodel();
        let layouts = layout::card_layouts(vm.cards());

        let toggle = &layouts[0];
        assert!(send(
            &mut state,
            Event::Click { row: toggle.action_row(), col: toggle.toggle.start }
        ));
        assert!(!state.library.find(hobbit).unwrap().is_read());
    }

    #[test]
    fn pane_positions_become_one_indexed_clicks() {
        assert_eq!(Event::from_click(0, 0), Some(Event::Click { row: 1, col: 1 }));
        assert_eq!(Event::from_click(7, 12), Some(Event::Click { row: 8, col: 13 }));
        assert_eq!(Event::from_click(-1, 3), None);
        assert_eq!(Event::from_click(isize::MIN, 0), None);
    }

    #[test]
    fn zero_indexed_click_on_toggle_button_flips_status() {
        let mut state = demo_state();
        let hobbit = state.library.books()[0].id();
        let vm = state.compute_viewmodel();
        let card = layout::card_layouts(vm.cards())[0].clone();

        let line = isize::try_from(card.action_row() - 1).unwrap();
        let click = Event::from_click(line, card.toggle.start - 1).unwrap();
        assert_eq!(
            layout::hit_test(&[card.clone()], card.action_row(), card.toggle.start)
                .map(|hit| hit.target),
            Some(CardTarget::Toggle)
        );

        assert!(send(&mut state, click));
        assert!(!state.library.find(hobbit).unwrap().is_read());
    }

    #[test]
    fn click_on_remove_button_deletes_book() {
        let mut state = demo_state();
        let gatsby = state.library.books()[1].id();
        let vm = state.compute_viewmodel();
        let layouts = layout::card_layouts(vm.cards());

        let card = &layouts[1];
        assert!(send(
            &mut state,
            Event::Click { row: card.action_row(), col: card.remove.start }
        ));
        assert!(state.library.find(gatsby).is_none());
        assert_eq!(state.library.len(), 1);
    }

    #[test]
    fn click_outside_cards_is_ignored() {
        let mut state = demo_state();
        assert!(!send(&mut state, Event::Click { row: 1, col: 1 }));
        assert!(!send(&mut state, Event::Click { row: BODY_START_ROW + 5, col: 4 }));
        assert_eq!(state.library.len(), 2);
    }

    #[test]
    fn stale_card_action_is_ignored() {
        let mut state = demo_state();
        let ghost = BookId::new();
        assert!(!dispatch_card_action(&mut state, ghost, CardTarget::Remove));
        assert!(!dispatch_card_action(&mut state, ghost, CardTarget::Toggle));
        assert_eq!(state.library.len(), 2);
        assert!(!state.library.take_render_request());
    }

    #[test]
    fn card_events_are_ignored_while_form_open() {
        let mut state = demo_state();
        send(&mut state, Event::ShowForm);
        assert!(!send(&mut state, Event::RemoveSelected));
        assert!(!send(&mut state, Event::SelectNext));
        assert_eq!(state.library.len(), 2);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = demo_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
