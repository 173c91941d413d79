//! Infrastructure layer - external integrations and utilities.
//!
//! - FLTK buffer access
//! - Logging setup
//! - Platform theme detection
//! - Error types

pub mod buffer;
pub mod error;
pub mod logging;
pub mod platform;
