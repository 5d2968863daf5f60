//! Identity of the calling process

use crate::core::types::ProcessId;
use crate::windows::bindings::kernel32;
use winapi::um::winnt::HANDLE;

/// The calling process, passed around as an explicit value
///
/// Wraps the current-process pseudo handle. Pseudo handles are not real
/// entries in the handle table, so this type carries no `Drop` and the
/// handle is never closed.
#[derive(Clone, Copy)]
pub struct CurrentProcess {
    handle: HANDLE,
}

impl CurrentProcess {
    /// Get the calling process
    pub fn get() -> Self {
        CurrentProcess {
            handle: kernel32::current_process(),
        }
    }

    /// Get the raw pseudo handle
    pub fn raw(&self) -> HANDLE {
        self.handle
    }

    /// Get the identifier of the calling process
    pub fn pid(&self) -> ProcessId {
        kernel32::current_process_id()
    }
}

impl std::fmt::Debug for CurrentProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentProcess")
            .field("handle", &self.handle)
            .finish()
    }
}
