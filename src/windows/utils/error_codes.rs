//! Windows error code handling utilities

use std::fmt;

/// Windows error codes seen during token and process handle operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    AccessDenied = 5,
    InvalidHandle = 6,
    InvalidParameter = 87,
    InsufficientBuffer = 122,
    NotAllAssigned = 1300,
    NoSuchPrivilege = 1313,
    Unknown(u32),
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            0 => ErrorCode::Success,
            5 => ErrorCode::AccessDenied,
            6 => ErrorCode::InvalidHandle,
            87 => ErrorCode::InvalidParameter,
            122 => ErrorCode::InsufficientBuffer,
            1300 => ErrorCode::NotAllAssigned,
            1313 => ErrorCode::NoSuchPrivilege,
            _ => ErrorCode::Unknown(code),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Success => write!(f, "Success"),
            ErrorCode::AccessDenied => write!(f, "Access denied"),
            ErrorCode::InvalidHandle => write!(f, "Invalid handle"),
            ErrorCode::InvalidParameter => write!(f, "Invalid parameter"),
            ErrorCode::InsufficientBuffer => write!(f, "Insufficient buffer"),
            ErrorCode::NotAllAssigned => write!(f, "Not all privileges were assigned"),
            ErrorCode::NoSuchPrivilege => write!(f, "No such privilege"),
            ErrorCode::Unknown(code) => write!(f, "Unknown error: {}", code),
        }
    }
}
