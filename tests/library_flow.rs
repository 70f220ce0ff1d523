//! End-to-end tests driving the plugin through its public event API.
//!
//! Every test starts from `initialize`, sends the events the plugin shim would
//! produce for keys and clicks, and inspects the library and the rendered pane.

use bookshelf::app::modes::FormMode;
use bookshelf::ui::helpers::strip_ansi;
use bookshelf::ui::layout::{self, CardLayout};
use bookshelf::ui::render_to_string;
use bookshelf::{handle_event, initialize, AppState, BookId, Config, Event, ValidationStyle};

fn send(state: &mut AppState, event: Event) -> bool {
    handle_event(state, &event).unwrap().0
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

fn layout_of(state: &AppState, id: BookId) -> CardLayout {
    let vm = state.compute_viewmodel();
    layout::card_layouts(vm.cards())
        .into_iter()
        .find(|l| l.id == id)
        .unwrap()
}

fn add_book(state: &mut AppState, title: &str, author: &str, pages: &str, read: bool) {
    send(state, Event::ShowForm);
    type_text(state, title);
    send(state, Event::NextField);
    type_text(state, author);
    send(state, Event::NextField);
    type_text(state, pages);
    if read {
        send(state, Event::NextField);
        send(state, Event::Char(' '));
    }
    send(state, Event::SubmitForm);
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn test_starts_with_demo_books() {
    let state = initialize(&Config::default());
    let books = state.library.books();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title(), "The Hobbit");
    assert_eq!(books[0].author(), "J.R.R. Tolkien");
    assert_eq!(books[0].pages(), 295);
    assert!(books[0].is_read());
    assert_eq!(books[1].title(), "The Great Gatsby");
    assert!(!books[1].is_read());

    let plain = strip_ansi(&render_to_string(&state));
    assert!(plain.contains("The Hobbit"));
    assert!(plain.contains("The Great Gatsby"));
}

// ============================================================================
// Add, toggle and remove
// ============================================================================

#[test]
fn test_dune_lifecycle() {
    let mut state = initialize(&Config::default());

    add_book(&mut state, "Dune", "Frank Herbert", "412", false);
    assert_eq!(state.form_mode, FormMode::Hidden);
    assert_eq!(state.library.len(), 3);

    let dune = state.library.books()[2].clone();
    assert_eq!(dune.title(), "Dune");
    assert_eq!(dune.pages(), 412);
    assert!(!dune.is_read());

    let plain = strip_ansi(&render_to_string(&state));
    assert!(plain.contains("Dune"));
    assert!(plain.contains("by Frank Herbert"));
    assert!(plain.contains("412 pages"));

    let card = layout_of(&state, dune.id());
    assert!(send(
        &mut state,
        Event::Click { row: card.action_row(), col: card.toggle.start + 1 }
    ));
    assert!(state.library.find(dune.id()).unwrap().is_read());

    let card = layout_of(&state, dune.id());
    assert!(send(
        &mut state,
        Event::Click { row: card.action_row(), col: card.remove.end - 1 }
    ));
    assert!(state.library.find(dune.id()).is_none());
    assert_eq!(state.library.len(), 2);
    assert!(!strip_ansi(&render_to_string(&state)).contains("Dune"));
}

#[test]
fn test_toggle_twice_restores_status() {
    let mut state = initialize(&Config::default());
    let hobbit = state.library.books()[0].id();

    send(&mut state, Event::ToggleSelected);
    assert!(!state.library.find(hobbit).unwrap().is_read());
    send(&mut state, Event::ToggleSelected);
    assert!(state.library.find(hobbit).unwrap().is_read());
}

#[test]
fn test_removing_every_book_shows_placeholder() {
    let mut state = initialize(&Config::default());

    while !state.library.is_empty() {
        assert!(send(&mut state, Event::RemoveSelected));
    }

    let vm = state.compute_viewmodel();
    assert!(vm.cards().is_empty());
    assert!(strip_ansi(&render_to_string(&state)).contains("Your library is empty"));
    assert!(!send(&mut state, Event::RemoveSelected));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_title_is_rejected_inline() {
    let mut state = initialize(&Config::default());

    add_book(&mut state, "   ", "Anon", "10", false);

    assert_eq!(state.form_mode, FormMode::Visible);
    assert_eq!(state.library.len(), 2);
    let plain = strip_ansi(&render_to_string(&state));
    assert!(plain.contains("Title is required"));
    assert!(!plain.contains("Author is required"));
}

#[test]
fn test_errors_clear_while_typing() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::ShowForm);
    send(&mut state, Event::SubmitForm);
    assert!(strip_ansi(&render_to_string(&state)).contains("Title is required"));

    type_text(&mut state, "Emma");
    assert!(!strip_ansi(&render_to_string(&state)).contains("Title is required"));

    send(&mut state, Event::Backspace);
    send(&mut state, Event::Backspace);
    send(&mut state, Event::Backspace);
    send(&mut state, Event::Backspace);
    assert!(strip_ansi(&render_to_string(&state)).contains("Title is required"));
}

#[test]
fn test_bad_page_counts_are_rejected() {
    for pages in ["0", "-3", "abc", "12.5"] {
        let mut state = initialize(&Config::default());
        add_book(&mut state, "Emma", "Jane Austen", pages, false);

        assert_eq!(state.form_mode, FormMode::Visible, "pages {pages:?}");
        assert_eq!(state.library.len(), 2, "pages {pages:?}");
    }
}

#[test]
fn test_alert_validation_style() {
    let config = Config {
        validation: ValidationStyle::Alert,
        ..Config::default()
    };
    let mut state = initialize(&config);

    add_book(&mut state, "", "", "", false);
    let plain = strip_ansi(&render_to_string(&state));
    assert!(plain.contains("Please fill in all fields correctly!"));

    send(&mut state, Event::DismissAlert);
    assert!(state.form.alert.is_none());
    assert_eq!(state.form_mode, FormMode::Visible);
    assert_eq!(state.library.len(), 2);
}

#[test]
fn test_cancel_discards_input() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::ShowForm);
    type_text(&mut state, "Draft");
    send(&mut state, Event::CancelForm);

    assert_eq!(state.library.len(), 2);
    send(&mut state, Event::ShowForm);
    assert!(state.form.title.is_empty());
}
