//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (form validation, counter, theme)
//! - `messages.rs` - Events sent from widget callbacks to the dispatch loop
//! - `state.rs` - Main application coordinator
//! - `error.rs` - Error types

pub mod domain;
pub mod error;
pub mod messages;
pub mod state;

// Re-exports for convenient external access
pub use domain::counter::Counter;
pub use domain::form::{FormInput, validate};
pub use domain::theme::{Palette, ThemeMode};
pub use error::{AppError, Result};
pub use messages::Message;
pub use state::AppState;
