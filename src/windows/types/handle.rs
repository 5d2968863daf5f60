//! Safe HANDLE wrapper with automatic cleanup

use crate::windows::bindings::kernel32;
use std::fmt;
use std::ptr;
use tracing::debug;
use winapi::um::winnt::HANDLE;

/// Owned wrapper around a Windows HANDLE with RAII semantics
///
/// The wrapped handle is closed exactly once, when the wrapper drops. A null
/// handle is never passed to the close call.
pub struct Handle {
    handle: HANDLE,
}

impl Handle {
    /// Wrap a raw handle, taking ownership of it
    pub fn new(handle: HANDLE) -> Self {
        Handle { handle }
    }

    /// Create a null handle
    pub fn null() -> Self {
        Handle {
            handle: ptr::null_mut(),
        }
    }

    /// Check if the handle is null
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Get the raw handle without giving up ownership
    pub fn raw(&self) -> HANDLE {
        self.handle
    }

    /// Take ownership of the raw handle, preventing automatic cleanup
    pub fn take(mut self) -> HANDLE {
        let handle = self.handle;
        self.handle = ptr::null_mut();
        handle
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            let result = unsafe { kernel32::close_handle(self.handle) };
            if let Err(err) = result {
                debug!("CloseHandle refused {:p}: {}", self.handle, err);
            }
        }
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.handle).finish()
    }
}

// Send + Sync are safe because HANDLEs are process-local
unsafe impl Send for Handle {}
unsafe impl Sync for Handle {}
