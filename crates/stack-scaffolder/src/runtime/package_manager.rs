//! Package manager detection

use std::fmt;

/// Environment variable npm, yarn and pnpm set for the processes they spawn
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Detect the package manager that launched this process.
    pub fn detect() -> Self {
        Self::from_user_agent(std::env::var(USER_AGENT_ENV).ok().as_deref())
    }

    /// Classify a user agent string. yarn is checked before pnpm; anything else is npm.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(agent) if agent.contains("yarn") => PackageManager::Yarn,
            Some(agent) if agent.contains("pnpm") => PackageManager::Pnpm,
            _ => PackageManager::Npm,
        }
    }

    /// Binary name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Arguments for installing dependencies
    pub fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }

    /// Full install command line, for display
    pub fn install_command(&self) -> String {
        format!("{} {}", self.command(), self.install_args().join(" "))
    }

    /// Command line for running a package.json script
    pub fn run_script(&self, script: &str) -> String {
        format!("{} run {}", self.command(), script)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_npm_without_user_agent() {
        assert_eq!(PackageManager::from_user_agent(None), PackageManager::Npm);
    }

    #[test]
    fn test_detects_from_user_agent() {
        assert_eq!(
            PackageManager::from_user_agent(Some("yarn/1.22.19 npm/? node/v20.11.0 linux x64")),
            PackageManager::Yarn
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("pnpm/8.15.4 npm/? node/v20.11.0 darwin arm64")),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("npm/10.2.4 node/v20.11.0 linux x64")),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_yarn_wins_over_pnpm() {
        assert_eq!(
            PackageManager::from_user_agent(Some("pnpm/8 yarn/1")),
            PackageManager::Yarn
        );
    }

    #[test]
    fn test_command_lines() {
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
        assert_eq!(PackageManager::Yarn.run_script("dev"), "yarn run dev");
        assert_eq!(PackageManager::Npm.to_string(), "npm");
    }
}
