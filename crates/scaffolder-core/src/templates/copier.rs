//! Template materialization into a fresh project directory

use super::embedded;
use super::manifest::{TemplateManifest, TEMPLATE_MANIFEST};
use super::source::TemplateSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Copy the template into `target_dir`, then restore the ignore file's leading dot
///
/// `target_dir` must not exist yet; it is created here and creation fails if
/// something already occupies the path. Returns the relative paths written.
/// On failure the partially populated directory is left behind.
pub async fn copy_template(
    source: &TemplateSource,
    manifest: &TemplateManifest,
    target_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir(target_dir)
        .await
        .with_context(|| format!("Failed to create project directory: {}", target_dir.display()))?;

    let mut copied_files = match source {
        TemplateSource::Embedded => copy_embedded(target_dir).await?,
        TemplateSource::Local(root) => copy_local(root, target_dir).await?,
    };

    let placeholder = PathBuf::from(&manifest.ignore_file);
    if let Some(entry) = copied_files.iter_mut().find(|p| **p == placeholder) {
        let real = PathBuf::from(manifest.ignore_file_target());
        fs::rename(target_dir.join(&*entry), target_dir.join(&real))
            .await
            .with_context(|| format!("Failed to rename {} to {}", entry.display(), real.display()))?;
        *entry = real;
    } else {
        tracing::debug!(placeholder = %manifest.ignore_file, "template has no ignore file placeholder");
    }

    Ok(copied_files)
}

async fn copy_embedded(target_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut copied_files = Vec::new();

    for (file_path, contents) in embedded::FILES {
        if *file_path == TEMPLATE_MANIFEST {
            continue;
        }

        let target_path = target_dir.join(file_path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target_path, contents)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        copied_files.push(PathBuf::from(*file_path));
    }

    Ok(copied_files)
}

async fn copy_local(root: &Path, target_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut copied_files = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read template: {}", root.display()))?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .context("Template entry outside template root")?;

        // The descriptor describes the template, it is not part of the project
        if entry.depth() == 1 && relative == Path::new(TEMPLATE_MANIFEST) {
            continue;
        }

        let target_path = target_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .with_context(|| format!("Failed to create directory: {}", target_path.display()))?;
        } else {
            fs::copy(entry.path(), &target_path)
                .await
                .with_context(|| format!("Failed to copy file: {}", entry.path().display()))?;
            copied_files.push(relative.to_path_buf());
        }
    }

    Ok(copied_files)
}
