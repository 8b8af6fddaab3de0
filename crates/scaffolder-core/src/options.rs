//! Project options and their resolution
//!
//! Options arrive from two directions:
//! - **Programmatic**: a [`ProjectOptions`] record from a library caller
//! - **Interactive**: [`CreateArgs`] parsed from the command line, with the
//!   operator prompted for anything the flags leave open
//!
//! Both converge on [`ResolvedOptions::new`].

use crate::naming::{self, DEFAULT_PROJECT_NAME};
use crate::prompt::{Prompt, Prompter};
use crate::proceed;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options supplied by a library caller; absent fields take defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectOptions {
    /// Project directory name; a random name is generated when absent
    pub name: Option<String>,

    /// Set up svelte-check for type checking
    pub svelte_check: Option<bool>,

    /// Set up the Biome linter
    pub biome: Option<bool>,

    /// Enable strict TypeScript
    pub strict_ts: Option<bool>,
}

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name given with `--name`
    pub name: Option<String>,

    /// `--check` was passed
    pub check: bool,

    /// `--biome` was passed
    pub biome: bool,

    /// `--strict` was passed
    pub strict: bool,

    /// Accept every optional tool without prompting
    pub yes: bool,

    /// Local directory to use as the template instead of the embedded one
    pub template_dir: Option<PathBuf>,
}

/// Which optional tooling to set up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolChoices {
    pub svelte_check: bool,
    pub biome: bool,
    pub strict_ts: bool,
}

/// Fully decided options for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub name: String,
    pub svelte_check: bool,
    pub biome: bool,
    pub strict_ts: bool,
}

impl ResolvedOptions {
    pub fn new(name: impl Into<String>, tools: ToolChoices) -> Self {
        Self {
            name: name.into(),
            svelte_check: tools.svelte_check,
            biome: tools.biome,
            strict_ts: tools.strict_ts,
        }
    }
}

impl ProjectOptions {
    /// Tool choices with absent fields switched off
    pub fn tool_choices(&self) -> ToolChoices {
        ToolChoices {
            svelte_check: self.svelte_check.unwrap_or(false),
            biome: self.biome.unwrap_or(false),
            strict_ts: self.strict_ts.unwrap_or(false),
        }
    }
}

/// Where a candidate project name came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCandidate {
    /// Chosen by the caller or operator
    Given(String),
    /// Sampled by [`naming::random_name`]
    Generated(String),
}

impl NameCandidate {
    pub fn as_str(&self) -> &str {
        match self {
            NameCandidate::Given(name) | NameCandidate::Generated(name) => name,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, NameCandidate::Generated(_))
    }
}

/// Programmatic name: the caller's name, or a freshly sampled one
pub fn programmatic_name<R: Rng + ?Sized>(options: &ProjectOptions, rng: &mut R) -> NameCandidate {
    match &options.name {
        Some(name) => NameCandidate::Given(name.clone()),
        None => NameCandidate::Generated(naming::random_name(rng)),
    }
}

/// Interactive name: the `--name` flag when present, otherwise ask
///
/// Under `--yes` a random name is used without asking.
pub fn prompt_name<P: Prompter + ?Sized, R: Rng + ?Sized>(
    flag: Option<&str>,
    yes: bool,
    prompter: &mut P,
    rng: &mut R,
) -> Result<Prompt<NameCandidate>> {
    if let Some(name) = flag {
        return Ok(Prompt::Proceed(NameCandidate::Given(name.to_string())));
    }

    let random = yes || proceed!(prompter.confirm("Use a random project name?", false)?);
    if random {
        return Ok(Prompt::Proceed(NameCandidate::Generated(naming::random_name(rng))));
    }

    let name = proceed!(prompter.text("Project name", DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_NAME)?);
    Ok(Prompt::Proceed(NameCandidate::Given(name)))
}

/// Interactive tool choices: a flag or `--yes` means yes, otherwise ask
pub fn prompt_tools<P: Prompter + ?Sized>(
    args: &CreateArgs,
    prompter: &mut P,
) -> Result<Prompt<ToolChoices>> {
    let mut ask = |flag: bool, message: String| -> Result<Prompt<bool>> {
        if flag || args.yes {
            Ok(Prompt::Proceed(true))
        } else {
            prompter.confirm(&message, true)
        }
    };

    let svelte_check = proceed!(ask(
        args.check,
        format!(
            "Use {} for typechecking and Svelte code quality?",
            "svelte-check".bold()
        ),
    )?);
    let biome = proceed!(ask(args.biome, format!("Use {} linter?", "Biome".bold()))?);
    let strict_ts = proceed!(ask(args.strict, "Use strict TypeScript?".to_string())?);

    Ok(Prompt::Proceed(ToolChoices {
        svelte_check,
        biome,
        strict_ts,
    }))
}
