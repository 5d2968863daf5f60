//! Windows API layer for token and process operations
//!
//! Provides safe wrappers around the Windows API functions the crate issues.
//! All unsafe FFI calls are contained within this module with proper error
//! handling and validation.

pub mod bindings;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use types::Handle;
pub use utils::ErrorCode;

// Re-export key bindings
pub use bindings::{advapi32, kernel32};
