//! Project creation flow
//!
//! ```text
//! resolve options -> validate name (retry on collision) -> copy template
//!   -> write generated config -> install runtime deps -> install dev deps
//!   -> svelte-kit sync -> (interactive) offer to open the editor
//! ```
//!
//! Cancelling any prompt before the template is copied stops the flow with
//! nothing written.

use crate::config::{self, DependencySet};
use crate::error::ScaffoldError;
use crate::naming;
use crate::options::{
    self, CreateArgs, NameCandidate, ProjectOptions, ResolvedOptions, ToolChoices,
};
use crate::product::ProductConfig;
use crate::proceed;
use crate::prompt::{Prompt, Prompter, Silent};
use crate::runtime::{CommandRunner, Installer};
use crate::templates::{self, TemplateManifest, TemplateSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use url::Url;

/// How many project names are tried before giving up
pub const MAX_NAME_ATTEMPTS: usize = 5;

/// How an interactive run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(PathBuf),
    Cancelled,
}

/// Result of checking a candidate destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCheck {
    Available(PathBuf),
    Taken(PathBuf),
}

/// Check whether anything already lives at `cwd/name`
///
/// Broken symlinks count as taken.
pub fn check_destination(cwd: &Path, name: &str) -> NameCheck {
    let path = cwd.join(name);
    if path.symlink_metadata().is_ok() {
        NameCheck::Taken(path)
    } else {
        NameCheck::Available(path)
    }
}

/// Normalize a candidate, warning when the name had to change
fn normalize<P: Prompter + ?Sized>(candidate: &NameCandidate, prompter: &mut P) -> Result<String> {
    let raw = candidate.as_str();
    let normalized = naming::normalize_name(raw)
        .ok_or_else(|| ScaffoldError::InvalidName(raw.to_string()))?;
    if normalized != raw {
        prompter.warning(&format!(
            "Project name after normalization: {}",
            normalized.bold()
        ))?;
    }
    Ok(normalized)
}

fn file_url(path: &Path) -> String {
    Url::from_file_path(path)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

/// Creates projects in one working directory
pub struct Scaffolder<'a, C: ProductConfig, R: CommandRunner> {
    config: &'a C,
    runner: &'a R,
    cwd: PathBuf,
    template: TemplateSource,
    cli_version: &'a str,
}

impl<'a, C: ProductConfig, R: CommandRunner> Scaffolder<'a, C, R> {
    /// Scaffolder using the product's template (environment override or embedded)
    pub fn new(config: &'a C, runner: &'a R, cwd: impl Into<PathBuf>) -> Self {
        Self {
            config,
            runner,
            cwd: cwd.into(),
            template: TemplateSource::resolve(config, None),
            cli_version: crate::CLI_VERSION,
        }
    }

    pub fn with_template(mut self, template: TemplateSource) -> Self {
        self.template = template;
        self
    }

    pub fn with_cli_version(mut self, cli_version: &'a str) -> Self {
        self.cli_version = cli_version;
        self
    }

    /// Programmatic creation
    ///
    /// A name given in `options` that is already taken fails immediately with
    /// [`ScaffoldError::NameCollision`]. A generated name is resampled instead.
    pub async fn create(&self, options: &ProjectOptions) -> Result<PathBuf> {
        let mut reporter = Silent;
        let manifest = self.load_template(&mut reporter).await?;

        let mut resolved = None;
        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let candidate = options::programmatic_name(options, &mut rand::rng());
            let name = normalize(&candidate, &mut reporter)?;

            match check_destination(&self.cwd, &name) {
                NameCheck::Available(path) => {
                    resolved = Some((ResolvedOptions::new(name, options.tool_choices()), path));
                    break;
                }
                NameCheck::Taken(path) if !candidate.is_generated() => {
                    return Err(ScaffoldError::NameCollision { name, path }.into());
                }
                NameCheck::Taken(path) => {
                    tracing::debug!(attempt, path = %path.display(), "generated name taken");
                }
            }
        }

        let (resolved, project_dir) = resolved.ok_or(ScaffoldError::RetriesExhausted {
            attempts: MAX_NAME_ATTEMPTS,
        })?;

        self.build(&resolved, &manifest, &project_dir, &mut reporter)
            .await?;
        Ok(project_dir)
    }

    /// Interactive creation driven by `prompter`
    ///
    /// A taken name is reported and the name is asked for again, ignoring
    /// `--name` from then on, up to [`MAX_NAME_ATTEMPTS`] times.
    pub async fn create_interactive<P: Prompter + ?Sized>(
        &self,
        args: &CreateArgs,
        prompter: &mut P,
    ) -> Result<Outcome> {
        let manifest = self.load_template(prompter).await?;

        let (resolved, project_dir) = match self.resolve_interactive(args, prompter)? {
            Prompt::Proceed(resolved) => resolved,
            Prompt::Cancelled => return Ok(Outcome::Cancelled),
        };

        self.build(&resolved, &manifest, &project_dir, prompter)
            .await?;
        self.offer_editor(&project_dir, prompter);

        Ok(Outcome::Created(project_dir))
    }

    fn resolve_interactive<P: Prompter + ?Sized>(
        &self,
        args: &CreateArgs,
        prompter: &mut P,
    ) -> Result<Prompt<(ResolvedOptions, PathBuf)>> {
        let mut name_flag = args.name.as_deref();

        for _ in 0..MAX_NAME_ATTEMPTS {
            let candidate = proceed!(options::prompt_name(
                name_flag.take(),
                args.yes,
                prompter,
                &mut rand::rng(),
            )?);

            let name = match normalize(&candidate, prompter) {
                Ok(name) => name,
                Err(e) => {
                    prompter.error(&format!("{}. Trying a different one.", e))?;
                    continue;
                }
            };

            match check_destination(&self.cwd, &name) {
                NameCheck::Taken(path) => {
                    tracing::debug!(path = %path.display(), "name taken");
                    prompter.error(
                        "A file or directory with the same name exists. Trying a different one.",
                    )?;
                }
                NameCheck::Available(path) => {
                    prompter.info(&format!("Project path: {}", file_url(&path).green()))?;
                    let tools: ToolChoices = proceed!(options::prompt_tools(args, prompter)?);
                    return Ok(Prompt::Proceed((ResolvedOptions::new(name, tools), path)));
                }
            }
        }

        Err(ScaffoldError::RetriesExhausted {
            attempts: MAX_NAME_ATTEMPTS,
        }
        .into())
    }

    async fn load_template<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<TemplateManifest> {
        let manifest = self
            .template
            .manifest()
            .await
            .with_context(|| format!("Failed to load {}", self.template.describe()))?;
        tracing::debug!(template = %manifest.name, source = %self.template.describe(), "template loaded");

        if let Some(warning) = templates::check_compatibility(
            self.cli_version,
            &manifest.version,
            self.config.upgrade_command(),
        ) {
            prompter.warning(&format!(
                "Version warning: {}",
                warning.lines().next().unwrap_or(&warning)
            ))?;
        }

        Ok(manifest)
    }

    /// Everything after the options are settled; each step is fatal on failure
    async fn build<P: Prompter + ?Sized>(
        &self,
        resolved: &ResolvedOptions,
        manifest: &TemplateManifest,
        project_dir: &Path,
        prompter: &mut P,
    ) -> Result<()> {
        tracing::info!(?resolved, dir = %project_dir.display(), "creating project");

        prompter.start_step("Copying template...");
        let copied = match templates::copy_template(&self.template, manifest, project_dir).await {
            Ok(copied) => copied,
            Err(e) => {
                prompter.fail_step("Failed to copy template");
                return Err(e);
            }
        };

        let generated = config::generate(resolved)?;
        if let Err(e) = generated.write_to(project_dir).await {
            prompter.fail_step("Failed to write configuration");
            return Err(e);
        }
        prompter.finish_step(&format!(
            "Created {} files in {}",
            copied.len() + generated.paths().count(),
            project_dir.display()
        ));

        let deps = DependencySet::for_options(resolved);
        let installer = Installer::new(self.runner, self.config.installer());

        prompter.start_step(&format!(
            "Installing dependencies with {}...",
            self.config.installer()
        ));
        let installed = match installer.install(&deps, project_dir).await {
            Ok(()) => installer.sync(project_dir).await,
            Err(e) => Err(e),
        };
        if let Err(e) = installed {
            prompter.fail_step("Installation failed");
            if let Some(ScaffoldError::CommandFailed { stderr, .. }) = e.downcast_ref::<ScaffoldError>() {
                if !stderr.is_empty() {
                    prompter.error(stderr)?;
                }
            }
            return Err(e);
        }
        prompter.finish_step("Dependencies installed");

        tracing::info!(dir = %project_dir.display(), "project created");
        Ok(())
    }

    /// Offer to open the project in the editor; never fails the flow
    fn offer_editor<P: Prompter + ?Sized>(&self, project_dir: &Path, prompter: &mut P) {
        let editor = self.config.editor();
        if self.runner.locate(editor).is_none() {
            tracing::debug!(editor, "editor not on PATH");
            return;
        }

        let question = format!("Open in {}?", self.config.editor_display_name());
        match prompter.confirm(&question, true) {
            Ok(Prompt::Proceed(true)) => {
                if let Err(e) = self
                    .runner
                    .spawn_detached(editor, &[".".to_string()], project_dir)
                {
                    tracing::warn!(error = %e, "failed to open editor");
                    let _ = prompter.warning(&format!("Could not open {}: {}", editor, e));
                }
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "editor prompt failed"),
        }
    }
}
