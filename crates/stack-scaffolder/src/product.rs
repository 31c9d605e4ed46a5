//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to give the shared installer its identity:
//! names, the initial commit message and the guidance printed once the project exists.

use crate::config::ProjectConfig;
use crate::runtime::PackageManager;

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Tagline shown under the banner
    fn tagline(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Message used for the first commit of a generated project
    fn commit_message(&self) -> String {
        format!("Initial commit from {}", self.name())
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, config: &ProjectConfig, package_manager: PackageManager) -> Vec<String>;
}
