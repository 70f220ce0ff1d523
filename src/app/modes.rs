//! Mode types for the application state machine.
//!
//! The add-book form is either hidden (the card list is shown and accepts card
//! actions) or visible (keystrokes edit the form). Independently, the plugin is
//! configured with a [`ValidationStyle`] that decides how a bad submission is
//! reported.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::modes::{FormMode, ValidationStyle};
//!
//! let mode = FormMode::Hidden;
//! assert_eq!(ValidationStyle::from_config("alert"), Some(ValidationStyle::Alert));
//! assert_ne!(mode, FormMode::Visible);
//! ```

/// Visibility of the add-book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Card list is shown. Available keybindings: a (add), j/k (select),
    /// r (toggle read), d (remove), q (quit). Mouse clicks act on cards.
    #[default]
    Hidden,

    /// Form panel is shown and receives all typing.
    Visible,
}

/// How submission failures are reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationStyle {
    /// Each field is checked on its own and while typing; errors appear under the
    /// offending field.
    #[default]
    Inline,

    /// A single aggregate check on submit, reported with one blocking notice.
    Alert,
}

impl ValidationStyle {
    /// Parses the `validation` configuration value.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inline" => Some(Self::Inline),
            "alert" => Some(Self::Alert),
            _ => None,
        }
    }
}
