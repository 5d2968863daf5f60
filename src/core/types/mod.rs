//! Core type definitions for proc-access
//!
//! Fundamental types shared across the crate: the error taxonomy for token
//! and process operations, and common identifier aliases.

mod error;

// Re-export all public types
pub use error::{AccessError, AccessResult};

// Common type aliases
pub type ProcessId = u32;
