//! Advapi32.dll bindings for token and privilege operations

use crate::core::types::{AccessError, AccessResult};
use crate::windows::utils::{string_to_wide, wide_to_string, ErrorCode};
use std::mem;
use winapi::shared::minwindef::{DWORD, FALSE};
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::processthreadsapi::OpenProcessToken;
use winapi::um::securitybaseapi::{AdjustTokenPrivileges, GetTokenInformation};
use winapi::um::winbase::{LookupPrivilegeNameW, LookupPrivilegeValueW};
use winapi::um::winnt::{
    TokenPrivileges, HANDLE, LUID, LUID_AND_ATTRIBUTES, SE_PRIVILEGE_ENABLED, TOKEN_PRIVILEGES,
};

/// Safe wrapper for OpenProcessToken
///
/// # Safety
/// The process handle must be valid (a real handle or the current-process
/// pseudo handle)
pub unsafe fn open_process_token(process: HANDLE, desired_access: u32) -> AccessResult<HANDLE> {
    let mut token: HANDLE = std::ptr::null_mut();

    if OpenProcessToken(process, desired_access, &mut token) == FALSE {
        Err(AccessError::TokenOpenFailed {
            code: GetLastError(),
        })
    } else {
        Ok(token)
    }
}

/// Resolve a privilege name to its locally unique identifier
pub fn lookup_privilege_value(name: &str) -> AccessResult<LUID> {
    let wide_name = string_to_wide(name);
    let mut luid = LUID {
        LowPart: 0,
        HighPart: 0,
    };

    unsafe {
        if LookupPrivilegeValueW(std::ptr::null(), wide_name.as_ptr(), &mut luid) == FALSE {
            return Err(AccessError::privilege_lookup_failed(name, GetLastError()));
        }
    }

    Ok(luid)
}

/// Resolve a locally unique identifier back to its privilege name
pub fn lookup_privilege_name(luid: LUID) -> AccessResult<String> {
    let mut luid = luid;
    let mut size: DWORD = 0;

    unsafe {
        // First call reports the required length, including the null
        LookupPrivilegeNameW(
            std::ptr::null(),
            &mut luid,
            std::ptr::null_mut(),
            &mut size,
        );
        if size == 0 {
            return Err(AccessError::last_os_error());
        }

        let mut buffer = vec![0u16; size as usize];
        if LookupPrivilegeNameW(std::ptr::null(), &mut luid, buffer.as_mut_ptr(), &mut size)
            == FALSE
        {
            return Err(AccessError::last_os_error());
        }

        Ok(wide_to_string(&buffer))
    }
}

/// Safe wrapper for AdjustTokenPrivileges, requesting a single privilege
///
/// AdjustTokenPrivileges can report call-level success while assigning
/// nothing; the follow-up last-error check catches that case and turns it
/// into a failure of its own.
///
/// # Safety
/// The token handle must be valid and opened with adjust-privileges rights
pub unsafe fn adjust_token_privileges(
    token: HANDLE,
    name: &str,
    luid: LUID,
    enable: bool,
) -> AccessResult<()> {
    let mut privileges = TOKEN_PRIVILEGES {
        PrivilegeCount: 1,
        Privileges: [LUID_AND_ATTRIBUTES {
            Luid: luid,
            Attributes: if enable { SE_PRIVILEGE_ENABLED } else { 0 },
        }],
    };

    if AdjustTokenPrivileges(
        token,
        FALSE,
        &mut privileges,
        mem::size_of::<TOKEN_PRIVILEGES>() as DWORD,
        std::ptr::null_mut(),
        std::ptr::null_mut(),
    ) == FALSE
    {
        return Err(AccessError::privilege_adjust_failed(name, GetLastError()));
    }

    let code = GetLastError();
    if ErrorCode::from(code) == ErrorCode::NotAllAssigned {
        return Err(AccessError::privilege_not_assigned(name, code));
    }

    Ok(())
}

/// Query the token's privilege set
///
/// # Safety
/// The token handle must be valid and opened with query rights
pub unsafe fn query_token_privileges(token: HANDLE) -> AccessResult<Vec<LUID_AND_ATTRIBUTES>> {
    // First call reports the required buffer size
    let mut size: DWORD = 0;
    GetTokenInformation(token, TokenPrivileges, std::ptr::null_mut(), 0, &mut size);

    if size == 0 {
        return Err(AccessError::TokenQueryFailed {
            code: GetLastError(),
        });
    }

    // u32 elements keep the buffer aligned for TOKEN_PRIVILEGES
    let mut buffer = vec![0u32; (size as usize + 3) / 4];
    if GetTokenInformation(
        token,
        TokenPrivileges,
        buffer.as_mut_ptr() as *mut _,
        size,
        &mut size,
    ) == FALSE
    {
        return Err(AccessError::TokenQueryFailed {
            code: GetLastError(),
        });
    }

    let header = buffer.as_ptr() as *const TOKEN_PRIVILEGES;
    let count = (*header).PrivilegeCount as usize;
    let entries = std::ptr::addr_of!((*header).Privileges) as *const LUID_AND_ATTRIBUTES;

    Ok(std::slice::from_raw_parts(entries, count).to_vec())
}
