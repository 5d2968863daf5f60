//! Debug-privilege elevation and process handle acquisition for Windows
//!
//! Covers the two step interaction a diagnostic tool performs before it can
//! touch another process: enable `SeDebugPrivilege` on its own token, then
//! open the target process by identifier. Every failure surfaces as a typed
//! error carrying the system status code, and every acquired handle is
//! released when its owner goes out of scope.

pub mod core;
pub mod process;
pub mod token;
pub mod windows;

// Re-export main types from core module
pub use crate::core::types::{AccessError, AccessResult, ProcessId};

// Re-export core directly for full access
pub use crate::core::*;

pub use crate::process::{open_target, CurrentProcess, OpenOptions, ProcessAccess, ProcessHandle};
pub use crate::token::{
    enable_debug_privilege, AccessToken, Privilege, PrivilegeState, TokenAccess, DEBUG_PRIVILEGE,
};
