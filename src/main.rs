//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the Bookshelf library and Zellij.
//! It translates Zellij key and mouse events into library events, runs them
//! through `handle_event`, executes the returned actions, and draws the pane.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `Mouse` and `PermissionRequestResult`
//! 3. **Update**: Map events, delegate to the library layer
//! 4. **Render**: Record the pane size and redraw everything
//!
//! # Keybindings
//!
//! With the card list showing:
//! - `a`: Open the add-book form
//! - `j`/`Down`, `k`/`Up`: Move the card selection
//! - `r`/`Space`: Toggle read status of the selected card
//! - `d`/`x`/`Delete`: Remove the selected card
//! - Left click: Press a card button, or select a card
//! - `q`: Close plugin
//!
//! With the form showing:
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Move between fields
//! - `Space` on "Read it?": Tick or untick
//! - `Enter`: Add the book
//! - `Esc`: Cancel
//! - Any key while a notice is shown: Dismiss it

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookshelf::{handle_event, Action, Config, Event, FormMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: bookshelf::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookshelf::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the initial state, and subscribes to input.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookshelf::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        self.app = bookshelf::initialize(&config);

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!(books = self.app.library.len(), "plugin load complete");
    }

    /// Returns `true` if the pane should be redrawn.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard =
            tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                tracing::debug!(?status, "permission request result");
                None
            }
            _ => None,
        };
        let Some(our_event) = our_event else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        bookshelf::ui::render(&self.app);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.form_mode {
            FormMode::Visible if self.app.form.alert.is_some() => Some(Event::DismissAlert),
            FormMode::Visible => Self::map_form_key(key),
            FormMode::Hidden => Self::map_list_key(key),
        }
    }

    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::CancelForm,
            BareKey::Enter => Event::SubmitForm,
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_list_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('a') => Event::ShowForm,
            BareKey::Down | BareKey::Char('j') => Event::SelectNext,
            BareKey::Up | BareKey::Char('k') => Event::SelectPrev,
            BareKey::Char('r' | ' ') => Event::ToggleSelected,
            BareKey::Delete | BareKey::Char('d' | 'x') => Event::RemoveSelected,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps mouse events to application events.
    ///
    /// Zellij reports 0-indexed pane positions; the library works in 1-indexed
    /// terminal cells.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => Event::from_click(line, col),
            Mouse::ScrollDown(_) if self.app.form_mode == FormMode::Hidden => {
                Some(Event::SelectNext)
            }
            Mouse::ScrollUp(_) if self.app.form_mode == FormMode::Hidden => Some(Event::SelectPrev),
            _ => None,
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
