//! Safe process handle wrapper with RAII semantics

use crate::core::types::{AccessError, AccessResult, ProcessId};
use crate::windows::bindings::kernel32;
use crate::windows::types::Handle;
use std::fmt;
use winapi::um::winnt::HANDLE;

/// Access rights for process handles
#[derive(Debug, Clone, Copy)]
pub struct ProcessAccess {
    value: u32,
}

impl ProcessAccess {
    /// All possible access rights
    pub const ALL_ACCESS: Self = Self { value: 0x1FFFFF };
    /// Query information access
    pub const QUERY_INFORMATION: Self = Self { value: 0x0400 };
    /// Query a restricted subset of information
    pub const QUERY_LIMITED_INFORMATION: Self = Self { value: 0x1000 };

    /// Combine access rights
    pub fn combine(rights: &[Self]) -> Self {
        let mut value = 0;
        for right in rights {
            value |= right.value;
        }
        Self { value }
    }

    /// Get raw value
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Safe wrapper around a Windows process handle
///
/// The handle is closed when the value is dropped, on every exit path.
pub struct ProcessHandle {
    handle: Handle,
    pid: ProcessId,
    access: ProcessAccess,
}

impl ProcessHandle {
    /// Create a new ProcessHandle from raw handle
    ///
    /// # Safety
    /// This function is intended for testing purposes only.
    /// The handle must be valid or null.
    #[doc(hidden)]
    pub fn from_raw_handle(handle: *mut winapi::ctypes::c_void, pid: ProcessId) -> Self {
        ProcessHandle {
            handle: Handle::new(handle),
            pid,
            access: ProcessAccess::QUERY_INFORMATION,
        }
    }

    /// Create a new ProcessHandle (for internal testing only)
    #[cfg(test)]
    pub fn new(handle: *mut winapi::ctypes::c_void, pid: ProcessId) -> Self {
        Self::from_raw_handle(handle, pid)
    }

    /// Open a process with specified access rights
    pub fn open(pid: ProcessId, access: ProcessAccess) -> AccessResult<Self> {
        let raw_handle = kernel32::open_process(pid, access.value())?;
        Ok(ProcessHandle {
            handle: Handle::new(raw_handle),
            pid,
            access,
        })
    }

    /// Open a process with all access rights
    pub fn open_all_access(pid: ProcessId) -> AccessResult<Self> {
        Self::open(pid, ProcessAccess::ALL_ACCESS)
    }

    /// Open a process for querying basic information
    pub fn open_for_query(pid: ProcessId) -> AccessResult<Self> {
        Self::open(pid, ProcessAccess::QUERY_LIMITED_INFORMATION)
    }

    /// Get the process ID the handle was opened for
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Get the raw handle
    ///
    /// # Safety
    /// The returned handle is only valid as long as this ProcessHandle exists
    pub unsafe fn raw(&self) -> HANDLE {
        self.handle.raw()
    }

    /// Get the access rights
    pub fn access(&self) -> ProcessAccess {
        self.access
    }

    /// Check if handle is valid
    pub fn is_valid(&self) -> bool {
        !self.handle.is_null()
    }

    /// Ask the system which process the handle refers to
    pub fn reported_pid(&self) -> AccessResult<ProcessId> {
        if !self.is_valid() {
            return Err(AccessError::InvalidHandle(
                "Process handle is null".to_string(),
            ));
        }
        unsafe { kernel32::process_id(self.handle.raw()) }
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("valid", &self.is_valid())
            .field("access", &format!("0x{:X}", self.access.value()))
            .finish()
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProcessHandle(pid={}, valid={})",
            self.pid,
            self.is_valid()
        )
    }
}
