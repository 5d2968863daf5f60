//! Custom error types for proc-access

use thiserror::Error;

/// Main error type for token and process handle operations
///
/// Every variant that wraps a failed operating-system call carries the
/// numeric status code reported by `GetLastError` at the point of failure.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Failed to open access token: error {code}")]
    TokenOpenFailed { code: u32 },

    #[error("Failed to look up privilege \"{name}\": error {code}")]
    PrivilegeLookupFailed { name: String, code: u32 },

    #[error("Failed to adjust token privileges for \"{name}\": error {code}")]
    PrivilegeAdjustFailed { name: String, code: u32 },

    #[error("Privilege \"{name}\" was not assigned to the token: error {code}")]
    PrivilegeNotAssigned { name: String, code: u32 },

    #[error("Failed to open process {pid}: error {code}")]
    ProcessOpenFailed { pid: u32, code: u32 },

    #[error("Failed to query token privileges: error {code}")]
    TokenQueryFailed { code: u32 },

    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    #[error("Windows API error: {0}")]
    WindowsApiError(#[from] windows::core::Error),
}

/// Result type alias for token and process handle operations
pub type AccessResult<T> = Result<T, AccessError>;

impl AccessError {
    /// Creates a new Windows API error with the last error code
    pub fn last_os_error() -> Self {
        AccessError::WindowsApiError(windows::core::Error::from_win32())
    }

    /// Creates a privilege lookup failure
    pub fn privilege_lookup_failed(name: impl Into<String>, code: u32) -> Self {
        AccessError::PrivilegeLookupFailed {
            name: name.into(),
            code,
        }
    }

    /// Creates a privilege adjustment failure
    pub fn privilege_adjust_failed(name: impl Into<String>, code: u32) -> Self {
        AccessError::PrivilegeAdjustFailed {
            name: name.into(),
            code,
        }
    }

    /// Creates a partial-assignment failure
    pub fn privilege_not_assigned(name: impl Into<String>, code: u32) -> Self {
        AccessError::PrivilegeNotAssigned {
            name: name.into(),
            code,
        }
    }

    /// The operating-system status code behind this error, if one was captured
    pub fn status_code(&self) -> Option<u32> {
        match self {
            AccessError::TokenOpenFailed { code }
            | AccessError::PrivilegeLookupFailed { code, .. }
            | AccessError::PrivilegeAdjustFailed { code, .. }
            | AccessError::PrivilegeNotAssigned { code, .. }
            | AccessError::ProcessOpenFailed { code, .. }
            | AccessError::TokenQueryFailed { code } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccessError::TokenOpenFailed { code: 5 };
        assert_eq!(err.to_string(), "Failed to open access token: error 5");

        let err = AccessError::privilege_lookup_failed("SeBogusPrivilege", 1313);
        assert_eq!(
            err.to_string(),
            "Failed to look up privilege \"SeBogusPrivilege\": error 1313"
        );
    }

    #[test]
    fn test_all_error_variants() {
        let errors: Vec<(AccessError, &str)> = vec![
            (
                AccessError::TokenOpenFailed { code: 6 },
                "Failed to open access token: error 6",
            ),
            (
                AccessError::PrivilegeLookupFailed {
                    name: "SeDebugPrivilege".to_string(),
                    code: 1313,
                },
                "Failed to look up privilege \"SeDebugPrivilege\": error 1313",
            ),
            (
                AccessError::PrivilegeAdjustFailed {
                    name: "SeDebugPrivilege".to_string(),
                    code: 5,
                },
                "Failed to adjust token privileges for \"SeDebugPrivilege\": error 5",
            ),
            (
                AccessError::PrivilegeNotAssigned {
                    name: "SeDebugPrivilege".to_string(),
                    code: 1300,
                },
                "Privilege \"SeDebugPrivilege\" was not assigned to the token: error 1300",
            ),
            (
                AccessError::ProcessOpenFailed { pid: 1804, code: 87 },
                "Failed to open process 1804: error 87",
            ),
            (
                AccessError::TokenQueryFailed { code: 998 },
                "Failed to query token privileges: error 998",
            ),
            (
                AccessError::InvalidHandle("token handle is null".to_string()),
                "Invalid handle: token handle is null",
            ),
        ];

        for (error, expected) in errors {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_helper_methods() {
        let err = AccessError::privilege_lookup_failed("SeShutdownPrivilege", 1313);
        match err {
            AccessError::PrivilegeLookupFailed { name, code } => {
                assert_eq!(name, "SeShutdownPrivilege");
                assert_eq!(code, 1313);
            }
            _ => panic!("Wrong error type"),
        }

        let err = AccessError::privilege_adjust_failed("SeDebugPrivilege", 5);
        match err {
            AccessError::PrivilegeAdjustFailed { name, code } => {
                assert_eq!(name, "SeDebugPrivilege");
                assert_eq!(code, 5);
            }
            _ => panic!("Wrong error type"),
        }

        let err = AccessError::privilege_not_assigned("SeDebugPrivilege", 1300);
        match err {
            AccessError::PrivilegeNotAssigned { name, code } => {
                assert_eq!(name, "SeDebugPrivilege");
                assert_eq!(code, 1300);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_status_code() {
        assert_eq!(
            AccessError::TokenOpenFailed { code: 5 }.status_code(),
            Some(5)
        );
        assert_eq!(
            AccessError::ProcessOpenFailed { pid: 0, code: 87 }.status_code(),
            Some(87)
        );
        assert_eq!(
            AccessError::privilege_not_assigned("SeDebugPrivilege", 1300).status_code(),
            Some(1300)
        );
        assert_eq!(
            AccessError::InvalidHandle("null".to_string()).status_code(),
            None
        );
    }

    #[test]
    #[cfg_attr(miri, ignore = "FFI not supported in Miri")]
    fn test_from_windows_error() {
        let access_err: AccessError = windows::core::Error::from_win32().into();
        assert!(matches!(access_err, AccessError::WindowsApiError(_)));
        assert_eq!(access_err.status_code(), None);
    }

    #[test]
    fn test_access_result_type() {
        fn example_function() -> AccessResult<u32> {
            Ok(42)
        }

        fn failing_function() -> AccessResult<u32> {
            Err(AccessError::TokenOpenFailed { code: 6 })
        }

        assert_eq!(example_function().unwrap(), 42);
        assert!(failing_function().is_err());
    }

    #[test]
    fn test_error_debug_format() {
        let err = AccessError::ProcessOpenFailed { pid: 1804, code: 5 };
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("ProcessOpenFailed"));
        assert!(debug_str.contains("1804"));
    }
}
