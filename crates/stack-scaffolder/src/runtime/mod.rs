//! Runtime detection and external process execution
//!
//! This module provides:
//! - Package manager detection from the invoking tool's user agent
//! - Node.js / git availability checks
//! - The `CommandRunner` seam used for install and git steps
//! - Ctrl+C routing to the command in flight

pub mod check;
pub mod interrupt;
pub mod package_manager;
pub mod tool;

pub use interrupt::Interrupt;
pub use check::{check_git, check_node, check_package_manager, check_runtimes, RuntimeInfo};
pub use package_manager::PackageManager;
pub use tool::{CommandRunner, SystemRunner};
