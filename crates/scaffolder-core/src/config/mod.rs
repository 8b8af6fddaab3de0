//! Generated project configuration
//!
//! Everything here is a pure function of [`ResolvedOptions`](crate::options::ResolvedOptions);
//! nothing touches the filesystem until [`Manifest::write_to`] is called.

pub mod dependencies;
pub mod generator;

pub use dependencies::DependencySet;
pub use generator::{generate, Manifest};
