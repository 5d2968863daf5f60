//! Access token opening and privilege adjustment

use crate::core::types::{AccessError, AccessResult};
use crate::process::CurrentProcess;
use crate::token::privilege::{Privilege, PrivilegeState};
use crate::windows::bindings::advapi32;
use crate::windows::types::Handle;
use std::fmt;
use winapi::um::winnt::{HANDLE, SE_PRIVILEGE_ENABLED};

/// Access rights for token handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccess {
    value: u32,
}

impl TokenAccess {
    /// Required to change the privileges in a token
    pub const ADJUST_PRIVILEGES: TokenAccess = TokenAccess { value: 0x0020 };

    /// Required to read the token's privilege set
    pub const QUERY: TokenAccess = TokenAccess { value: 0x0008 };

    /// Combine multiple access rights
    pub fn combine(rights: &[TokenAccess]) -> TokenAccess {
        let value = rights.iter().fold(0, |acc, r| acc | r.value);
        TokenAccess { value }
    }

    /// Get the raw access mask value
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Owned handle to a process access token
///
/// The underlying handle is closed when the value is dropped. Privileges
/// enabled through the token stay on the process token after the handle is
/// released.
pub struct AccessToken {
    handle: Handle,
    access: TokenAccess,
}

impl AccessToken {
    /// Open the access token of the given process
    pub fn open(process: &CurrentProcess, access: TokenAccess) -> AccessResult<Self> {
        let raw = unsafe { advapi32::open_process_token(process.raw(), access.value())? };
        Ok(AccessToken {
            handle: Handle::new(raw),
            access,
        })
    }

    /// Open the token with the rights needed to adjust and inspect privileges
    pub fn open_for_adjustment(process: &CurrentProcess) -> AccessResult<Self> {
        Self::open(
            process,
            TokenAccess::combine(&[TokenAccess::ADJUST_PRIVILEGES, TokenAccess::QUERY]),
        )
    }

    /// Create a token wrapper from a raw handle (for testing purposes)
    #[doc(hidden)]
    pub fn from_raw_handle(handle: HANDLE, access: TokenAccess) -> Self {
        AccessToken {
            handle: Handle::new(handle),
            access,
        }
    }

    /// Apply a privilege request to the token
    ///
    /// Call-level success is not enough; the privilege must actually have
    /// been assigned, otherwise this reports
    /// [`PrivilegeNotAssigned`](AccessError::PrivilegeNotAssigned).
    pub fn adjust(&self, privilege: &Privilege) -> AccessResult<()> {
        if !self.is_valid() {
            return Err(AccessError::InvalidHandle(
                "Token handle is null".to_string(),
            ));
        }
        unsafe {
            advapi32::adjust_token_privileges(
                self.handle.raw(),
                privilege.name(),
                privilege.luid(),
                privilege.enables(),
            )
        }
    }

    /// Report the token's current state for a privilege
    pub fn privilege_state(&self, privilege: &Privilege) -> AccessResult<PrivilegeState> {
        if !self.is_valid() {
            return Err(AccessError::InvalidHandle(
                "Token handle is null".to_string(),
            ));
        }
        let entries = unsafe { advapi32::query_token_privileges(self.handle.raw())? };
        let luid = privilege.luid();
        for entry in entries {
            if entry.Luid.LowPart == luid.LowPart && entry.Luid.HighPart == luid.HighPart {
                if entry.Attributes & SE_PRIVILEGE_ENABLED != 0 {
                    return Ok(PrivilegeState::Enabled);
                }
                return Ok(PrivilegeState::Disabled);
            }
        }
        Ok(PrivilegeState::NotPresent)
    }

    /// List the names of all privileges held by the token
    pub fn held_privileges(&self) -> AccessResult<Vec<String>> {
        if !self.is_valid() {
            return Err(AccessError::InvalidHandle(
                "Token handle is null".to_string(),
            ));
        }
        let entries = unsafe { advapi32::query_token_privileges(self.handle.raw())? };
        let mut names = Vec::with_capacity(entries.len());
        for entry in entries {
            names.push(advapi32::lookup_privilege_name(entry.Luid)?);
        }
        Ok(names)
    }

    /// Get the access rights the token was opened with
    pub fn access(&self) -> TokenAccess {
        self.access
    }

    /// Check if the token handle is valid
    pub fn is_valid(&self) -> bool {
        !self.handle.is_null()
    }

    /// Get the raw token handle
    ///
    /// # Safety
    /// The handle stays owned by this token; the caller must not close it.
    pub unsafe fn raw(&self) -> HANDLE {
        self.handle.raw()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("valid", &self.is_valid())
            .field("access", &format!("0x{:X}", self.access.value()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;
    use winapi::um::winnt::{TOKEN_ADJUST_PRIVILEGES, TOKEN_QUERY};

    #[test]
    fn test_access_rights() {
        assert_eq!(TokenAccess::ADJUST_PRIVILEGES.value(), TOKEN_ADJUST_PRIVILEGES);
        assert_eq!(TokenAccess::QUERY.value(), TOKEN_QUERY);
    }

    #[test]
    fn test_access_combine() {
        let combined = TokenAccess::combine(&[TokenAccess::ADJUST_PRIVILEGES, TokenAccess::QUERY]);
        assert_eq!(combined.value(), 0x0028);
        assert_eq!(TokenAccess::combine(&[]).value(), 0);
    }

    #[test]
    fn test_null_token_is_invalid() {
        let token = AccessToken::from_raw_handle(ptr::null_mut(), TokenAccess::QUERY);
        assert!(!token.is_valid());
        assert_eq!(token.access(), TokenAccess::QUERY);
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_adjust_rejects_null_token() {
        let token = AccessToken::from_raw_handle(ptr::null_mut(), TokenAccess::ADJUST_PRIVILEGES);
        let privilege = Privilege::debug().unwrap();
        match token.adjust(&privilege) {
            Err(AccessError::InvalidHandle(_)) => {}
            other => panic!("Expected invalid handle error, got {:?}", other),
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_privilege_state_rejects_null_token() {
        let token = AccessToken::from_raw_handle(ptr::null_mut(), TokenAccess::QUERY);
        let privilege = Privilege::debug().unwrap();
        match token.privilege_state(&privilege) {
            Err(AccessError::InvalidHandle(_)) => {}
            other => panic!("Expected invalid handle error, got {:?}", other),
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_query_token() {
        let current = CurrentProcess::get();
        let token = AccessToken::open(&current, TokenAccess::QUERY).unwrap();
        assert!(token.is_valid());
        assert_eq!(token.access(), TokenAccess::QUERY);
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_change_notify_privilege_enabled_by_default() {
        // Every token holds SeChangeNotifyPrivilege enabled out of the box
        let current = CurrentProcess::get();
        let token = AccessToken::open(&current, TokenAccess::QUERY).unwrap();
        let privilege = Privilege::lookup("SeChangeNotifyPrivilege").unwrap();
        let state = token.privilege_state(&privilege).unwrap();
        assert_eq!(state, PrivilegeState::Enabled);
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_held_privileges_are_named() {
        let current = CurrentProcess::get();
        let token = AccessToken::open(&current, TokenAccess::QUERY).unwrap();
        let names = token.held_privileges().unwrap();
        assert!(names.iter().any(|n| n == "SeChangeNotifyPrivilege"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_debug_formatting() {
        let current = CurrentProcess::get();
        let token = AccessToken::open(&current, TokenAccess::QUERY).unwrap();
        let debug = format!("{:?}", token);
        assert!(debug.contains("valid: true"));
        assert!(debug.contains("0x8"));
    }
}
