//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain layer. It
//! implements the controller of the plugin: events come in, the library and form
//! are updated, and the caller learns whether to redraw.
//!
//! # Architecture
//!
//! ```text
//! Key / Mouse → Events → Event Handler → State Mutations → (render?, Actions)
//!                                              ↓
//!                              AppState::compute_viewmodel → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Add-book form inputs and validation feedback
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Form visibility and validation style
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::FormState;
pub use handler::{handle_event, Event};
pub use modes::{FormMode, ValidationStyle};
pub use state::{AppState, Viewport};
