//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled output for the plugin
//! pane, and maps pane cells back to cards for mouse input.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//!                                     ↓
//!                          layout::hit_test ← Mouse click
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Card geometry shared by drawing and click resolution
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Output frame and text utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{Body, CardView, EmptyState, FooterInfo, FormView, HeaderInfo, UIViewModel};
