//! Access token and privilege management
//!
//! Elevation is a three step sequence: open the process token, resolve the
//! privilege name to a LUID, then adjust the token. Each step short-circuits
//! on failure, so a later step never runs against the debris of an earlier
//! one.

pub mod access;
pub mod privilege;

pub use access::{AccessToken, TokenAccess};
pub use privilege::{Privilege, PrivilegeState, DEBUG_PRIVILEGE};

use crate::core::types::AccessResult;
use crate::process::CurrentProcess;

/// Enable the debug privilege on a process's token
///
/// Opens the token with adjustment and query rights, resolves
/// [`DEBUG_PRIVILEGE`], and applies it. The returned token is still open so
/// the caller can inspect the result; dropping it releases the handle while
/// the enabled privilege stays on the process token.
pub fn enable_debug_privilege(process: &CurrentProcess) -> AccessResult<AccessToken> {
    let token = AccessToken::open_for_adjustment(process)?;
    let privilege = Privilege::debug()?;
    token.adjust(&privilege)?;
    Ok(token)
}
