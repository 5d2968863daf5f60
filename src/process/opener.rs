//! Two step pipeline: elevate the caller, then open the target

use crate::core::types::{AccessResult, ProcessId};
use crate::process::current::CurrentProcess;
use crate::process::handle::{ProcessAccess, ProcessHandle};
use crate::token;
use tracing::debug;

/// Options for opening a target process
#[derive(Debug, Clone)]
pub struct OpenOptions {
    /// Access rights to request on the target
    pub access: ProcessAccess,
    /// Enable the debug privilege on the calling process first
    pub elevate: bool,
}

impl Default for OpenOptions {
    fn default() -> Self {
        OpenOptions {
            access: ProcessAccess::ALL_ACCESS,
            elevate: true,
        }
    }
}

/// Open a target process, optionally enabling the debug privilege first
///
/// The steps are gated: a failed elevation aborts the pipeline and no open
/// is attempted. The token handle used for the adjustment is released before
/// this function returns, on success and failure alike; the enabled
/// privilege itself stays on the process token.
pub fn open_target(pid: ProcessId, options: &OpenOptions) -> AccessResult<ProcessHandle> {
    if options.elevate {
        let current = CurrentProcess::get();
        let _token = token::enable_debug_privilege(&current)?;
        debug!("Debug privilege enabled for process {}", current.pid());
    }

    let handle = ProcessHandle::open(pid, options.access)?;
    debug!(
        "Opened process {} with access 0x{:X}",
        pid,
        options.access.value()
    );
    Ok(handle)
}
