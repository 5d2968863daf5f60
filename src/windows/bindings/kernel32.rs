//! Kernel32.dll bindings for process and handle operations

use crate::core::types::{AccessError, AccessResult};
use winapi::shared::minwindef::FALSE;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::{
    GetCurrentProcess, GetCurrentProcessId, GetProcessId, OpenProcess,
};
use winapi::um::winnt::HANDLE;

/// Pseudo handle referring to the calling process
///
/// Pseudo handles are not real handle table entries and must not be closed.
pub fn current_process() -> HANDLE {
    unsafe { GetCurrentProcess() }
}

/// Identifier of the calling process
pub fn current_process_id() -> u32 {
    unsafe { GetCurrentProcessId() }
}

/// Safe wrapper for OpenProcess
pub fn open_process(pid: u32, desired_access: u32) -> AccessResult<HANDLE> {
    unsafe {
        let handle = OpenProcess(desired_access, FALSE, pid);
        if handle.is_null() {
            Err(AccessError::ProcessOpenFailed {
                pid,
                code: GetLastError(),
            })
        } else {
            Ok(handle)
        }
    }
}

/// Safe wrapper for GetProcessId
///
/// # Safety
/// The handle must be a valid process handle with query rights
pub unsafe fn process_id(handle: HANDLE) -> AccessResult<u32> {
    let pid = GetProcessId(handle);
    if pid == 0 {
        Err(AccessError::last_os_error())
    } else {
        Ok(pid)
    }
}

/// Safe wrapper for CloseHandle
///
/// # Safety
/// The handle must be a valid Windows handle
pub unsafe fn close_handle(handle: HANDLE) -> AccessResult<()> {
    if handle.is_null() {
        return Ok(());
    }

    if CloseHandle(handle) == FALSE {
        Err(AccessError::InvalidHandle(format!(
            "CloseHandle failed: error {}",
            GetLastError()
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_current_process_pseudo_handle() {
        let handle = current_process();
        assert!(!handle.is_null());

        // The pseudo handle is stable across calls
        assert_eq!(handle, current_process());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_current_process_id_matches_std() {
        assert_eq!(current_process_id(), std::process::id());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_open_process_pid_zero() {
        let result = open_process(0, 0x1FFFFF);
        match result {
            Err(AccessError::ProcessOpenFailed { pid, code }) => {
                assert_eq!(pid, 0);
                assert_ne!(code, 0);
            }
            _ => panic!("Expected ProcessOpenFailed for pid 0"),
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_process_id_of_current() {
        let current = current_process();
        let pid = unsafe { process_id(current) }.unwrap();
        assert_eq!(pid, std::process::id());
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_close_null_handle() {
        // Null is never handed to the OS; closing it is a no-op
        unsafe {
            assert!(close_handle(ptr::null_mut()).is_ok());
        }
    }
}
