//! Template sourcing, parsing, and copying
//!
//! This module provides:
//! - The template descriptor (`template.yaml`)
//! - The embedded SvelteKit + Bun template and local directory overrides
//! - Template copying with the ignore file placeholder restored
//! - Version compatibility checking

pub mod copier;
pub mod embedded;
pub mod manifest;
pub mod source;
pub mod version;

pub use copier::copy_template;
pub use manifest::TemplateManifest;
pub use source::TemplateSource;
pub use version::check_compatibility;
