//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`. Everything
//! that turns user-facing paths into sandbox paths lives here.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
