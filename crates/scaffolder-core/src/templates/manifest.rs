//! Template descriptor types and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name of the descriptor at the root of every template
pub const TEMPLATE_MANIFEST: &str = "template.yaml";

fn default_ignore_file() -> String {
    "gitignore".to_string()
}

/// Template descriptor (`<template>/template.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    pub name: String,

    /// Description of what the template provides
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,

    /// Placeholder shipped without its leading dot; renamed to `.<ignore_file>` after copying
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
}

impl TemplateManifest {
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse template.yaml")
    }

    /// Final name of the ignore file placeholder
    pub fn ignore_file_target(&self) -> String {
        format!(".{}", self.ignore_file.trim_start_matches('.'))
    }
}
