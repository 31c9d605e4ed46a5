//! Project template generation
//!
//! This module provides:
//! - `FileTree`: the in-memory result of generation and its writer
//! - `PackageManifest`: predicate-gated `package.json` assembly
//! - `generate`: the pure `ProjectConfig -> FileTree` mapping

pub mod content;
pub mod generator;
pub mod manifest;
pub mod tree;

pub use generator::generate;
pub use manifest::PackageManifest;
pub use tree::{Entry, FileTree};
