//! Privilege names, lookup, and state

use crate::core::types::AccessResult;
use crate::windows::bindings::advapi32;
use std::fmt;
use winapi::um::winnt::LUID;

/// Name of the privilege that allows opening arbitrary processes
pub const DEBUG_PRIVILEGE: &str = "SeDebugPrivilege";

/// A privilege name resolved to its locally unique identifier
///
/// Construction performs the name lookup, so holding a `Privilege` means the
/// local system recognized the name. Nothing has been applied to any token
/// yet; pass the value to [`AccessToken::adjust`](crate::token::AccessToken::adjust)
/// for that.
pub struct Privilege {
    name: String,
    luid: LUID,
    enable: bool,
}

impl Privilege {
    /// Resolve a privilege name, requesting that it be enabled
    pub fn lookup(name: &str) -> AccessResult<Self> {
        let luid = advapi32::lookup_privilege_value(name)?;
        Ok(Privilege {
            name: name.to_string(),
            luid,
            enable: true,
        })
    }

    /// Resolve the debug privilege
    pub fn debug() -> AccessResult<Self> {
        Self::lookup(DEBUG_PRIVILEGE)
    }

    /// Request that the privilege be removed from the enabled set instead
    pub fn disable(mut self) -> Self {
        self.enable = false;
        self
    }

    /// The privilege name as passed to the lookup
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved locally unique identifier
    pub fn luid(&self) -> LUID {
        self.luid
    }

    /// Whether adjustment will enable (true) or disable (false) the privilege
    pub fn enables(&self) -> bool {
        self.enable
    }
}

impl fmt::Debug for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Privilege")
            .field("name", &self.name)
            .field("luid_low", &self.luid.LowPart)
            .field("luid_high", &self.luid.HighPart)
            .field("enable", &self.enable)
            .finish()
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// State of a privilege on a particular token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivilegeState {
    /// Present in the token and enabled
    Enabled,
    /// Present in the token but currently disabled
    Disabled,
    /// Not held by the token at all
    NotPresent,
}

impl fmt::Display for PrivilegeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivilegeState::Enabled => write!(f, "enabled"),
            PrivilegeState::Disabled => write!(f, "disabled"),
            PrivilegeState::NotPresent => write!(f, "not present"),
        }
    }
}
