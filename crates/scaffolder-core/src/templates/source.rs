//! Where template files come from
//!
//! The embedded template ships inside the binary. A local directory can stand in
//! for it during template development.

use super::embedded;
use super::manifest::{TemplateManifest, TEMPLATE_MANIFEST};
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Template source - either compiled in or a local directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded,
    Local(PathBuf),
}

impl TemplateSource {
    /// Pick the source: an explicit directory, then the product's environment
    /// override, then the embedded template
    pub fn resolve<C: ProductConfig>(config: &C, explicit: Option<&Path>) -> Self {
        match explicit
            .map(Path::to_path_buf)
            .or_else(|| config.template_dir_override())
        {
            Some(path) => Self::Local(path),
            None => Self::Embedded,
        }
    }

    /// Read and parse the template descriptor
    pub async fn manifest(&self) -> Result<TemplateManifest> {
        match self {
            TemplateSource::Embedded => {
                let content = embedded::file(TEMPLATE_MANIFEST)
                    .context("Embedded template has no template.yaml")?;
                TemplateManifest::parse(content)
            }
            TemplateSource::Local(path) => {
                if !path.is_dir() {
                    anyhow::bail!("Template directory not found: {}", path.display());
                }
                let manifest_path = path.join(TEMPLATE_MANIFEST);
                let content = fs::read_to_string(&manifest_path)
                    .await
                    .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
                TemplateManifest::parse(&content)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded => "built-in template".to_string(),
            TemplateSource::Local(path) => format!("local template {}", path.display()),
        }
    }
}
