//! Configuration file generation

use crate::options::ResolvedOptions;
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

pub const PACKAGE_JSON: &str = "package.json";
pub const TSCONFIG_JSON: &str = "tsconfig.json";
pub const BIOME_JSON: &str = "biome.json";
pub const EXTENSIONS_JSON: &str = ".vscode/extensions.json";

const BIOME_SCHEMA: &str = "https://biomejs.dev/schemas/1.5.2/schema.json";

/// Editor extensions recommended for every project
pub const EXTENSIONS: &[&str] = &[
    "EditorConfig.EditorConfig",
    "esbenp.prettier-vscode",
    "svelte.svelte-vscode",
];

pub const BIOME_EXTENSION: &str = "biomejs.biome";

/// Generated files keyed by path relative to the project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    files: BTreeMap<String, String>,
}

impl Manifest {
    fn insert(&mut self, path: &str, value: &Value) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", path))?;
        contents.push('\n');
        self.files.insert(path.to_string(), contents);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.files.len()
    }

    /// Write every file below `root`, creating parent directories as needed
    ///
    /// Existing files are overwritten. Writes are independent; a failure part way
    /// leaves the earlier files in place.
    pub async fn write_to(&self, root: &Path) -> Result<()> {
        for (relative, contents) in &self.files {
            let target_path = root.join(relative);
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&target_path, contents)
                .await
                .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
        }
        Ok(())
    }
}

/// Generate every configuration file for `options`
pub fn generate(options: &ResolvedOptions) -> Result<Manifest> {
    let mut manifest = Manifest::default();

    manifest.insert(PACKAGE_JSON, &package_json(options))?;
    manifest.insert(TSCONFIG_JSON, &tsconfig_json(options))?;
    if options.biome {
        manifest.insert(BIOME_JSON, &biome_json())?;
    }
    manifest.insert(EXTENSIONS_JSON, &extensions_json(options))?;

    Ok(manifest)
}

fn package_json(options: &ResolvedOptions) -> Value {
    let mut scripts = Map::new();
    scripts.insert("start".into(), json!("bun build/index.js"));
    scripts.insert("build".into(), json!("bun --bun vite build"));
    scripts.insert("dev".into(), json!("bun --bun vite"));
    if options.svelte_check {
        scripts.insert(
            "check".into(),
            json!("bun --bun svelte-kit sync && svelte-check"),
        );
    }
    if options.biome {
        scripts.insert("lint".into(), json!("biome lint ./src"));
    }

    json!({
        "name": options.name,
        "private": true,
        "type": "module",
        "scripts": scripts,
        "prettier": {
            "arrowParens": "avoid",
            "bracketSpacing": false,
            "semi": false,
            "singleQuote": true,
            "trailingComma": "none"
        }
    })
}

fn tsconfig_json(options: &ResolvedOptions) -> Value {
    json!({
        "extends": "./.svelte-kit/tsconfig.json",
        "compilerOptions": {
            "checkJs": true,
            "esModuleInterop": true,
            "strict": options.strict_ts
        }
    })
}

fn biome_json() -> Value {
    json!({
        "$schema": BIOME_SCHEMA,
        "linter": {
            "enabled": true,
            "rules": { "recommended": true },
            "ignore": ["build", ".svelte-kit", "node_modules"]
        },
        "formatter": { "enabled": false }
    })
}

fn extensions_json(options: &ResolvedOptions) -> Value {
    let mut recommendations: Vec<&str> = EXTENSIONS.to_vec();
    if options.biome {
        recommendations.push(BIOME_EXTENSION);
    }
    json!({ "recommendations": recommendations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ToolChoices;
    use std::collections::BTreeSet;

    fn resolve(svelte_check: bool, biome: bool, strict_ts: bool) -> ResolvedOptions {
        ResolvedOptions::new(
            "demo-app",
            ToolChoices {
                svelte_check,
                biome,
                strict_ts,
            },
        )
    }

    fn parse(manifest: &Manifest, path: &str) -> Value {
        serde_json::from_str(manifest.get(path).unwrap()).unwrap()
    }

    fn script_names(manifest: &Manifest) -> BTreeSet<String> {
        parse(manifest, PACKAGE_JSON)["scripts"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_scripts_match_enabled_tools() {
        for svelte_check in [false, true] {
            for biome in [false, true] {
                let manifest = generate(&resolve(svelte_check, biome, false)).unwrap();

                let mut expected: BTreeSet<String> =
                    ["start", "build", "dev"].iter().map(|s| s.to_string()).collect();
                if svelte_check {
                    expected.insert("check".into());
                }
                if biome {
                    expected.insert("lint".into());
                }

                assert_eq!(script_names(&manifest), expected);
            }
        }
    }

    #[test]
    fn test_strict_flag_reaches_tsconfig() {
        for strict in [false, true] {
            let manifest = generate(&resolve(false, false, strict)).unwrap();
            let tsconfig = parse(&manifest, TSCONFIG_JSON);
            assert_eq!(tsconfig["compilerOptions"]["strict"], Value::Bool(strict));
            assert_eq!(tsconfig["extends"], "./.svelte-kit/tsconfig.json");
        }
    }

    #[test]
    fn test_biome_config_only_with_linter() {
        let without = generate(&resolve(true, false, true)).unwrap();
        assert!(!without.contains(BIOME_JSON));
        assert_eq!(without.len(), 3);

        let with = generate(&resolve(false, true, true)).unwrap();
        let biome = parse(&with, BIOME_JSON);
        assert_eq!(biome["formatter"]["enabled"], false);
        assert_eq!(biome["linter"]["rules"]["recommended"], true);
        assert_eq!(
            biome["linter"]["ignore"],
            json!(["build", ".svelte-kit", "node_modules"])
        );
    }

    #[test]
    fn test_extension_recommendations() {
        let plain = parse(&generate(&resolve(false, false, false)).unwrap(), EXTENSIONS_JSON);
        assert_eq!(plain["recommendations"], json!(EXTENSIONS));

        let linted = parse(&generate(&resolve(false, true, false)).unwrap(), EXTENSIONS_JSON);
        let recommendations = linted["recommendations"].as_array().unwrap();
        assert_eq!(recommendations.len(), EXTENSIONS.len() + 1);
        assert_eq!(recommendations.last().unwrap(), BIOME_EXTENSION);
    }

    #[test]
    fn test_package_json_basics() {
        let package = parse(&generate(&resolve(false, false, false)).unwrap(), PACKAGE_JSON);
        assert_eq!(package["name"], "demo-app");
        assert_eq!(package["private"], true);
        assert_eq!(package["type"], "module");
        assert_eq!(package["prettier"]["singleQuote"], true);
        assert_eq!(package["prettier"]["trailingComma"], "none");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let options = resolve(true, true, true);
        assert_eq!(generate(&options).unwrap(), generate(&options).unwrap());
    }

    #[tokio::test]
    async fn test_write_to_creates_nested_paths() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = generate(&resolve(false, true, false)).unwrap();

        manifest.write_to(dir.path()).await.unwrap();

        for path in manifest.paths() {
            let written = std::fs::read_to_string(dir.path().join(path)).unwrap();
            assert_eq!(written, manifest.get(path).unwrap());
        }
        assert!(dir.path().join(".vscode").is_dir());
    }
}
