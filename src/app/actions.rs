//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates `AppState` directly; anything that needs the Zellij
//! host is returned as an [`Action`] and executed by the plugin shim after the
//! event has been processed. Re-rendering is not an action: it is signalled by the
//! boolean returned alongside the actions.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,
}
