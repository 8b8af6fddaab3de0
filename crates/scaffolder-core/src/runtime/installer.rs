//! Dependency installation through the package manager

use crate::config::DependencySet;
use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Runs external programs
///
/// The creation flow goes through this trait for every subprocess so it can be
/// exercised without the real tools.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` in `cwd` and wait for it; a non-zero exit is an error
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()>;

    /// Start `program` in `cwd` without waiting for it to exit
    fn spawn_detached(&self, program: &str, args: &[String], cwd: &Path) -> Result<()>;

    /// Full path of `program` if it is on PATH
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// Real subprocesses via `tokio::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioRunner;

fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

impl CommandRunner for TokioRunner {
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        let command = command_line(program, args);
        tracing::debug!(%command, cwd = %cwd.display(), "running");

        let output = TokioCommand::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| format!("Failed to start `{}`", command))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::warn!(%command, status = %output.status, "command failed");
        Err(ScaffoldError::CommandFailed {
            command,
            status: output.status.to_string(),
            stderr,
        }
        .into())
    }

    fn spawn_detached(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        std::process::Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start `{}`", command_line(program, args)))?;
        Ok(())
    }
}

/// Installs a [`DependencySet`] with the package manager
pub struct Installer<'a, R: CommandRunner> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: CommandRunner> Installer<'a, R> {
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Runtime packages, then development packages
    ///
    /// Strictly sequential: both invocations share the project's lockfile.
    pub async fn install(&self, deps: &DependencySet, project_dir: &Path) -> Result<()> {
        if !deps.runtime.is_empty() {
            let mut args = vec!["install".to_string()];
            args.extend(deps.runtime.iter().cloned());
            self.runner.run(self.program, &args, project_dir).await?;
        }

        if !deps.dev.is_empty() {
            let mut args = vec!["install".to_string()];
            args.extend(deps.dev.iter().cloned());
            args.push("-d".to_string());
            self.runner.run(self.program, &args, project_dir).await?;
        }

        Ok(())
    }

    /// Generate SvelteKit's types (`.svelte-kit/`) so editors resolve `$app` and friends
    pub async fn sync(&self, project_dir: &Path) -> Result<()> {
        let args = ["run", "svelte-kit", "sync"].map(String::from);
        self.runner.run(self.program, &args, project_dir).await
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Recording;
    use super::*;
    use crate::options::{ResolvedOptions, ToolChoices};

    fn deps(svelte_check: bool, biome: bool) -> DependencySet {
        DependencySet::for_options(&ResolvedOptions::new(
            "demo-app",
            ToolChoices {
                svelte_check,
                biome,
                strict_ts: false,
            },
        ))
    }

    #[tokio::test]
    async fn test_runtime_then_dev() {
        let runner = Recording::default();
        let dir = Path::new("/projects/demo-app");

        Installer::new(&runner, "bun")
            .install(&deps(true, false), dir)
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.program == "bun" && c.cwd == dir));

        assert_eq!(calls[0].args[0], "install");
        assert!(calls[0].args.contains(&"@sveltejs/kit".to_string()));
        assert!(!calls[0].args.contains(&"-d".to_string()));

        assert_eq!(calls[1].args.last().map(String::as_str), Some("-d"));
        assert!(calls[1].args.contains(&"svelte-check".to_string()));
        assert!(!calls[1].args.contains(&"@biomejs/biome".to_string()));
    }

    #[tokio::test]
    async fn test_failed_runtime_install_stops_dev_install() {
        let runner = Recording::failing_at(0);

        let err = Installer::new(&runner, "bun")
            .install(&deps(false, false), Path::new("."))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::CommandFailed { .. })
        ));
        assert_eq!(runner.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_sync_command() {
        let runner = Recording::default();
        Installer::new(&runner, "bun")
            .sync(Path::new("."))
            .await
            .unwrap();
        assert_eq!(runner.calls()[0].args, ["run", "svelte-kit", "sync"]);
    }

    #[test]
    fn test_command_line_rendering() {
        let args = vec!["install".to_string(), "-d".to_string()];
        assert_eq!(command_line("bun", &args), "bun install -d");
    }

    #[tokio::test]
    async fn test_tokio_runner_reports_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let err = TokioRunner
            .run("definitely-not-a-real-tool-4f2a", &[], dir.path())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
    }
}
