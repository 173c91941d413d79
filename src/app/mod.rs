//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, TextStats, Settings, Messages)
//! - `services/` - Business operations (file I/O, export, text helpers)
//! - `infrastructure/` - External integrations (FLTK buffer, logging, platform, error)
//! - `state.rs` - Main window controller

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Document, Message, TextStats, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use services::export::ExportFormat;
pub use state::{AppState, CloseChoice};
