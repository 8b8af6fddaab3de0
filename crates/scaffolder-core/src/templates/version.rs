//! Version comparison for CLI and template compatibility

use anyhow::Result;
use semver::Version;

/// Compare CLI version against the minimum version a template declares
///
/// Returns a warning message if the CLI is older than the template expects.
/// Unparseable versions never produce a warning.
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version).ok()?;
    let template_ver = parse_version(template_version).ok()?;

    (cli_ver < template_ver).then(|| {
        format!(
            "This template was designed for CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            template_ver, cli_ver, upgrade_command
        )
    })
}

/// Parse version string, accepting a leading `v`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
