//! Product configuration trait for CLI binaries
//!
//! This trait defines what the creation flow needs to know about the product it
//! scaffolds: which tools it shells out to, where docs live, and how to talk about itself.

use std::path::{Path, PathBuf};

/// Configuration trait for a scaffolded product
///
/// Each product implements this trait to define:
/// - Product identity (display name)
/// - External tools (package manager, editor)
/// - Template override location
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Banner shown when an interactive session starts
    fn intro(&self) -> &'static str;

    /// Package manager executable used for installs
    fn installer(&self) -> &'static str;

    /// Where to send people who do not have the package manager yet
    fn installer_docs_url(&self) -> &'static str;

    /// Editor executable offered after creation
    fn editor(&self) -> &'static str;

    /// Human-readable editor name
    fn editor_display_name(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;

    /// Template directory from the environment, if set
    fn template_dir_override(&self) -> Option<PathBuf> {
        std::env::var_os(self.template_dir_env())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

/// SvelteKit served by Bun
#[derive(Debug, Clone, Copy, Default)]
pub struct SvelteKitBun;

impl ProductConfig for SvelteKitBun {
    fn display_name(&self) -> &'static str {
        "SvelteKit + Bun"
    }

    fn intro(&self) -> &'static str {
        "Create a new SvelteKit app using Bun."
    }

    fn installer(&self) -> &'static str {
        "bun"
    }

    fn installer_docs_url(&self) -> &'static str {
        "https://bun.sh/docs/installation"
    }

    fn editor(&self) -> &'static str {
        "code"
    }

    fn editor_display_name(&self) -> &'static str {
        "VS Code"
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_SVELTE_BUN_TEMPLATE_DIR"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install create-svelte-bun --force"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // cd to directory if not current
        if current.as_deref() != Some(dir) {
            let shown = current
                .as_deref()
                .and_then(|cwd| dir.strip_prefix(cwd).ok())
                .unwrap_or(dir);
            steps.push(format!("cd {}", shown.display()));
        }

        steps.push("bun run dev".to_string());
        steps
    }
}
