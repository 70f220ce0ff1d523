//! Bookshelf: a Zellij plugin for keeping a reading list.
//!
//! Books are shown as cards in a plugin pane. Each card has buttons to toggle its
//! read status and to remove it, and new books are added through a form that is
//! validated as you type.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key / Mouse events
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and card action dispatch          │
//! │  - Add-book form state                              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────┐           ┌─────────────────────┐
//! │ UI Layer (ui/)    │           │ Domain (domain/)    │
//! │ - Card layout     │           │ - Book, Library     │
//! │ - Rendering       │           │ - Field validation  │
//! │ - Theming         │           │ - Errors            │
//! └───────────────────┘           └─────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OpenTelemetry file export (observability/)       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library lives in memory only: every session starts from the demo books
//! (or from nothing, with `seed "false"`).
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookshelf.wasm" {
//!         theme "catppuccin-latte"
//!         theme_file "~/.config/zellij/bookshelf-theme.toml"
//!         trace_level "debug"
//!         validation "alert"
//!         seed "false"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookshelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.library.len(), 2);
//!
//! for event in [Event::SelectNext, Event::ToggleSelected] {
//!     let (should_render, _actions) = handle_event(&mut state, &event)?;
//!     assert!(should_render);
//! }
//! assert!(state.library.books()[1].is_read());
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FormMode, ValidationStyle};
pub use domain::{Book, BookId, BookshelfError, Library, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme, already mapped into the sandbox.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// How a bad submission is reported. Default: inline.
    pub validation: ValidationStyle,

    /// Whether the session starts with the two demo books. Default: `true`
    pub seed_demo_books: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            validation: ValidationStyle::Inline,
            seed_demo_books: true,
        }
    }
}

impl Config {
    /// Parses the configuration map.
    ///
    /// Invalid values are logged and replaced by their defaults; a typo in the
    /// layout never prevents the plugin from loading.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookshelf::{Config, ValidationStyle};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("validation".to_string(), "alert".to_string());
    /// map.insert("theme_file".to_string(), "~/paper.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.validation, ValidationStyle::Alert);
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/paper.toml"));
    /// assert!(config.seed_demo_books);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let validation = config
            .get("validation")
            .map_or(Ok(defaults.validation), |v| parse_validation(v))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid configuration, using inline validation");
                defaults.validation
            });

        let seed_demo_books = config
            .get("seed")
            .map_or(Ok(defaults.seed_demo_books), |v| parse_flag("seed", v))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid configuration, seeding demo books");
                defaults.seed_demo_books
            });

        Self {
            theme_name: config.get("theme").cloned(),
            theme_file: config
                .get("theme_file")
                .map(|path| infrastructure::expand_tilde(path)),
            trace_level: config.get("trace_level").cloned(),
            validation,
            seed_demo_books,
        }
    }
}

fn parse_validation(value: &str) -> Result<ValidationStyle> {
    ValidationStyle::from_config(value).ok_or_else(|| {
        BookshelfError::Config(format!(
            "validation must be \"inline\" or \"alert\", got {value:?}"
        ))
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(BookshelfError::Config(format!(
            "{key} must be \"true\" or \"false\", got {other:?}"
        ))),
    }
}

/// Builds the initial application state.
///
/// The theme is taken from `theme_file`, then `theme`, then the default; a theme
/// that fails to load falls back to the default with a warning.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookshelf plugin");

    let theme = load_theme(config);
    let library = if config.seed_demo_books {
        Library::with_demo_books()
    } else {
        Library::new()
    };

    let mut state = AppState::new(library, theme);
    state.validation_style = config.validation;

    tracing::debug!(
        books = state.library.len(),
        validation = ?state.validation_style,
        theme = %state.theme.name,
        "app state initialized"
    );
    state
}

fn load_theme(config: &Config) -> Theme {
    if let Some(path) = &config.theme_file {
        return Theme::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(
                theme_file = %path,
                error = %e,
                "failed to load theme file, using default"
            );
            Theme::default()
        });
    }

    config
        .theme_name
        .as_deref()
        .map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
}
