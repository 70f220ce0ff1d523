//! Composable UI component renderers.
//!
//! Each component draws one part of the pane into a [`Frame`].
//!
//! # Components
//!
//! - [`header`]: Title bar with the book count
//! - [`footer`]: Keybinding hints
//! - [`cards`]: One card per visible book, with its action buttons
//! - [`form`]: Add-book form with inline errors and the alert banner
//! - [`empty`]: Placeholder for an empty library
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Body: cards | form | empty state]
//! [Border]
//! [Footer]
//! [blank line]
//! ```

mod cards;
mod empty;
mod footer;
mod form;
mod header;

use crate::ui::helpers::Frame;
use crate::ui::layout::BODY_START_ROW;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use cards::render_cards;
use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;

/// Renders a horizontal border line across the pane and returns the next row.
fn render_border(frame: &mut Frame, row: usize, color: &str) -> usize {
    let line = "─".repeat(frame.cols());
    frame.position_cursor(row, 1);
    frame.push(&Theme::fg(color));
    frame.push(&line);
    frame.push(Theme::reset());
    row + 1
}

/// Draws the whole view model: chrome first, then the body.
pub fn render_layout(frame: &mut Frame, vm: &UIViewModel, theme: &Theme) {
    let mut current_row = 2;
    current_row = render_header(frame, current_row, &vm.header, theme);
    let body_row = render_border(frame, current_row, &theme.colors.border);
    debug_assert_eq!(body_row, BODY_START_ROW);

    match &vm.body {
        Body::Empty(empty) => render_empty_state(frame, body_row, empty, theme),
        Body::Cards(cards) => render_cards(frame, cards, theme),
        Body::Form(form) => render_form(frame, body_row, form, theme),
    }

    let footer_row = frame.rows().saturating_sub(1);
    render_border(frame, footer_row.saturating_sub(1), &theme.colors.border);
    render_footer(frame, footer_row, &vm.footer, theme);
}
