//! Typed failures callers may want to match on
//!
//! Everything else travels as `anyhow::Error` with context attached. These variants
//! can be recovered with `err.downcast_ref::<ScaffoldError>()`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The destination already holds a file or directory
    #[error("A file or directory named `{name}` already exists at {}", .path.display())]
    NameCollision { name: String, path: PathBuf },

    /// Every candidate name tried so far collided
    #[error("Could not find an unused project name after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    /// The name is empty once normalized into a file name
    #[error("`{0}` is not a usable project name")]
    InvalidName(String),

    /// A subprocess exited unsuccessfully
    #[error("`{command}` failed ({status})")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// A required executable is not on PATH
    #[error("{tool} is required but was not found on PATH (see {docs_url})")]
    MissingTool {
        tool: &'static str,
        docs_url: &'static str,
    },
}
