//! Availability checks for Node.js, the package manager and git

use crate::runtime::PackageManager;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// One-line description for the TUI
    pub fn describe(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if the given package manager is available
pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    probe(package_manager.command(), package_manager.command())
}

/// Check if git is available
pub fn check_git() -> RuntimeInfo {
    probe("git", "git")
}

/// Check everything the post-generation steps rely on.
///
/// Purely advisory: install and git steps are best-effort, so a missing tool only
/// predicts a warning later on.
pub fn check_runtimes(package_manager: PackageManager) -> Vec<RuntimeInfo> {
    vec![
        check_node(),
        check_package_manager(package_manager),
        check_git(),
    ]
}
