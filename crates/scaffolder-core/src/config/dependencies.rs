//! Packages installed into a new project

use crate::options::ResolvedOptions;

/// Always installed as runtime dependencies
pub const DEPENDENCIES: &[&str] = &[
    "@calle.wester/svelte-adapter-bun",
    "@sveltejs/kit",
    "@sveltejs/vite-plugin-svelte",
    "svelte",
    "vite",
];

/// Always installed as development dependencies
pub const DEV_DEPENDENCIES: &[&str] = &["typescript", "@types/bun"];

pub const SVELTE_CHECK_PACKAGE: &str = "svelte-check";
pub const BIOME_PACKAGE: &str = "@biomejs/biome";

/// Runtime and development packages, in install order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySet {
    pub runtime: Vec<String>,
    pub dev: Vec<String>,
}

impl DependencySet {
    /// Base lists plus the packages for each enabled tool
    ///
    /// Built from scratch on every call, so resolving options again after a
    /// name collision never appends a package twice.
    pub fn for_options(options: &ResolvedOptions) -> Self {
        let runtime = DEPENDENCIES.iter().map(|p| p.to_string()).collect();
        let mut dev: Vec<String> = DEV_DEPENDENCIES.iter().map(|p| p.to_string()).collect();

        if options.svelte_check {
            dev.push(SVELTE_CHECK_PACKAGE.to_string());
        }
        if options.biome {
            dev.push(BIOME_PACKAGE.to_string());
        }

        Self { runtime, dev }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ToolChoices;

    fn resolve(svelte_check: bool, biome: bool) -> ResolvedOptions {
        ResolvedOptions::new(
            "demo-app",
            ToolChoices {
                svelte_check,
                biome,
                strict_ts: false,
            },
        )
    }

    #[test]
    fn test_no_tools_means_base_lists() {
        let deps = DependencySet::for_options(&resolve(false, false));
        assert_eq!(deps.runtime, DEPENDENCIES);
        assert_eq!(deps.dev, DEV_DEPENDENCIES);
    }

    #[test]
    fn test_optional_packages_follow_options() {
        for svelte_check in [false, true] {
            for biome in [false, true] {
                let deps = DependencySet::for_options(&resolve(svelte_check, biome));
                assert_eq!(
                    deps.dev.iter().any(|p| p == SVELTE_CHECK_PACKAGE),
                    svelte_check
                );
                assert_eq!(deps.dev.iter().any(|p| p == BIOME_PACKAGE), biome);
                assert_eq!(deps.runtime, DEPENDENCIES);
            }
        }
    }

    #[test]
    fn test_repeated_resolution_does_not_duplicate() {
        let options = resolve(true, true);
        let first = DependencySet::for_options(&options);
        let second = DependencySet::for_options(&options);
        assert_eq!(first, second);
        assert_eq!(
            second.dev,
            ["typescript", "@types/bun", "svelte-check", "@biomejs/biome"]
        );
    }
}
