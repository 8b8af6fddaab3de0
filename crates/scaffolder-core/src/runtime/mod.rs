//! External processes
//!
//! This module provides:
//! - Tool lookup on PATH (package manager, editor)
//! - Dependency installation behind the [`CommandRunner`] seam

pub mod installer;
pub mod tool;

pub use installer::{CommandRunner, Installer, TokioRunner};
pub use tool::{ToolConfig, ToolManager};
