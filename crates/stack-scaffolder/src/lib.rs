//! Stack Scaffolder - Shared library for the create-stack-app CLI
//!
//! This library turns a set of answers (frontend, UI library, backend and feature
//! toggles) into a complete Next.js project on disk.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name validation, package manager detection and the
//!   pure `ProjectConfig -> FileTree` generator
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the `Installer`
//!   state machine, generic over an [`installer::Interaction`] and a [`CommandRunner`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use stack_scaffolder::{generate, Backend, ProjectConfig, UiLibrary};
//!
//! let config = ProjectConfig::builder("demo")
//!     .ui(UiLibrary::Tailwind)
//!     .backend(Backend::None)
//!     .build();
//!
//! let tree = generate(&config)?;
//! tree.write_to(&std::env::current_dir()?.join(config.project_name())).await?;
//! ```

pub mod config;
pub mod error;
pub mod installer;
pub mod product;
pub mod runtime;
pub mod templates;
pub mod validation;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Answer, Answers, Backend, Frontend, ProjectConfig, UiLibrary};
pub use error::{Result, ScaffoldError};
pub use installer::{InstallOutcome, InstallReport, Installer};
pub use product::ProductConfig;
pub use runtime::{CommandRunner, Interrupt, PackageManager, SystemRunner};
pub use templates::{generate, Entry, FileTree};
pub use validation::{validate_project_name, NameValidation};

#[cfg(feature = "tui")]
pub use tui::run;
