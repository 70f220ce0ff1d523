//! Top-level rendering coordinator.
//!
//! Every render is a full replacement of the pane: the frame is cleared, the view
//! model is recomputed from `AppState`, and the components draw it from scratch.
//! Nothing is patched incrementally.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::AppState;
//! use bookshelf::domain::Library;
//! use bookshelf::ui::{render_to_string, Theme};
//!
//! let state = AppState::new(Library::with_demo_books(), Theme::default());
//! let output = render_to_string(&state);
//! assert!(output.contains("The Hobbit"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;

/// Renders the plugin UI to stdout at the state's viewport size.
pub fn render(state: &AppState) {
    print!("{}", render_to_string(state));
}

/// Renders the plugin UI into an ANSI string.
#[must_use]
pub fn render_to_string(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();
    let mut frame = Frame::new(state.viewport.rows, state.viewport.cols);

    frame.clear();
    components::render_layout(&mut frame, &viewmodel, &state.theme);

    tracing::trace!(
        rows = state.viewport.rows,
        cols = state.viewport.cols,
        cards = viewmodel.cards().len(),
        "rendered pane"
    );
    frame.into_string()
}
