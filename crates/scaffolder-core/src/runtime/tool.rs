//! External tool lookup
//!
//! Finds executables like `bun` or `code` on PATH and points people at install
//! docs when they are missing.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::process::Command;

/// Configuration for an external tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "bun")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// URL to the documentation
    pub docs_url: &'static str,
}

/// Manager for checking CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Full path of the executable, if it is on PATH
    pub fn locate(&self) -> Option<PathBuf> {
        which::which(self.config.name).ok()
    }

    pub fn is_installed(&self) -> bool {
        self.locate().is_some()
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Open the tool's documentation in the default browser
    pub fn open_docs(&self) -> Result<()> {
        println!(
            "{}",
            format!(
                "Opening {} documentation in your browser...",
                self.config.display_name
            )
            .cyan()
        );
        open::that(self.config.docs_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_tool() -> ToolManager {
        ToolManager::new(ToolConfig {
            name: "definitely-not-a-real-tool-4f2a",
            display_name: "Nothing",
            docs_url: "https://example.invalid",
        })
    }

    #[test]
    fn test_missing_tool_is_not_installed() {
        let tool = missing_tool();
        assert!(!tool.is_installed());
        assert!(tool.locate().is_none());
        assert!(tool.get_version().is_none());
    }
}
