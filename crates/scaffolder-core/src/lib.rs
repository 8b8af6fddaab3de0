//! Scaffolder Core - create SvelteKit apps that run on Bun
//!
//! This library provides everything behind the `create-svelte-bun` CLI, and can be
//! called directly to create a project without any prompts.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name handling, config generation, template copying,
//!   dependency installation
//! - **Layer 2: Workflow Orchestration** - [`Scaffolder`] drives one creation, talking to
//!   the operator through the [`Prompter`] trait and to subprocesses through [`CommandRunner`]
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use scaffolder_core::{create_project, ProjectOptions};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let dir = create_project(ProjectOptions {
//!     name: Some("demo-app".into()),
//!     biome: Some(true),
//!     ..Default::default()
//! })
//! .await?;
//! println!("created {}", dir.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod naming;
pub mod options;
pub mod product;
pub mod prompt;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// Re-export main types for convenience
pub use config::{DependencySet, Manifest};
pub use error::ScaffoldError;
pub use options::{CreateArgs, ProjectOptions, ResolvedOptions};
pub use product::{ProductConfig, SvelteKitBun};
pub use prompt::{Prompt, Prompter};
pub use runtime::{CommandRunner, TokioRunner};
pub use scaffold::{Outcome, Scaffolder, MAX_NAME_ATTEMPTS};
pub use templates::TemplateSource;

#[cfg(feature = "tui")]
pub use tui::run;

/// CLI version - used for template compatibility checking
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Create a project in the current directory without prompting
///
/// Fails with [`ScaffoldError::NameCollision`] when `options.name` is already taken
/// and with [`ScaffoldError::MissingTool`] when Bun is not installed.
pub async fn create_project(options: ProjectOptions) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    create_project_in(&SvelteKitBun, &options, &cwd, &TokioRunner).await
}

/// Create a project in `cwd` for `config`, running subprocesses through `runner`
pub async fn create_project_in<C: ProductConfig, R: CommandRunner>(
    config: &C,
    options: &ProjectOptions,
    cwd: &Path,
    runner: &R,
) -> Result<PathBuf> {
    if runner.locate(config.installer()).is_none() {
        return Err(ScaffoldError::MissingTool {
            tool: config.installer(),
            docs_url: config.installer_docs_url(),
        }
        .into());
    }

    Scaffolder::new(config, runner, cwd).create(options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::installer::testing::Recording;

    #[tokio::test]
    async fn test_missing_installer_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Recording::default();
        let options = ProjectOptions {
            name: Some("demo-app".into()),
            ..Default::default()
        };

        let err = create_project_in(&SvelteKitBun, &options, dir.path(), &runner)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::MissingTool { tool: "bun", .. })
        ));
        assert!(!dir.path().join("demo-app").exists());
    }

    #[tokio::test]
    async fn test_create_project_in_with_installer() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Recording::default().with_path(&["bun"]);
        let options = ProjectOptions {
            name: Some("demo-app".into()),
            svelte_check: Some(true),
            ..Default::default()
        };

        let project = create_project_in(&SvelteKitBun, &options, dir.path(), &runner)
            .await
            .unwrap();

        assert_eq!(project, dir.path().join("demo-app"));
        assert!(project.join("tsconfig.json").is_file());
    }
}
