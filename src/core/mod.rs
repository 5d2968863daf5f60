//! Core module containing fundamental types for proc-access
//!
//! This module provides the building blocks used throughout the crate:
//! the error taxonomy, result alias, and common identifiers.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{AccessError, AccessResult, ProcessId};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

// Platform verification at compile time
#[cfg(not(target_os = "windows"))]
compile_error!("proc-access only supports Windows platform");
