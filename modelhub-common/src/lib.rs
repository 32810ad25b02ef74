//! # Modelhub Common Library
//!
//! Shared code for the modelhub services including:
//! - Event types (ImportEvent enum) and the EventBus
//! - Configuration loading
//! - Error types
//! - Utility functions

pub mod config;
pub mod error;
pub mod events;
pub mod uuid_utils;

pub use error::{Error, Result};
