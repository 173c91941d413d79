//! Services layer - business operations and utilities.
//!
//! - File reading and writing
//! - Export through pandoc or in-process HTML
//! - Text helpers for titles and labels

pub mod export;
pub mod file_io;
pub mod text_ops;
