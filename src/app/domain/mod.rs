//! Domain layer - core data structures and types.
//!
//! - Document
//! - Text statistics
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;
pub mod stats;

pub use document::Document;
pub use messages::Message;
pub use settings::{AppSettings, FONT_SIZES, ThemeMode};
pub use stats::TextStats;
