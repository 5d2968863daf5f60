//! Process handle management for Windows
//!
//! This module provides safe abstractions for identifying the calling
//! process, opening a target process, and the combined elevate-then-open
//! pipeline.

pub mod current;
pub mod handle;
pub mod opener;

pub use current::CurrentProcess;
pub use handle::{ProcessAccess, ProcessHandle};
pub use opener::{open_target, OpenOptions};
