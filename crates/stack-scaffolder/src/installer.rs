//! The end-to-end project creation flow
//!
//! ```text
//! NotStarted → NameValidated → ConfigCollected → ConfirmedByUser → DirectoryPrepared
//!   → TemplateGenerated → DependenciesInstalled → VersionControlInitialized → Done
//! ```
//!
//! Nothing touches the filesystem before the user confirms the summary. Dependency
//! installation and git initialization are best-effort: their failures end up as
//! warnings in the [`InstallReport`] instead of aborting the flow.

use crate::config::{project_questions, Answers, ProjectConfig, Question};
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use crate::runtime::tool::display_command;
use crate::runtime::{CommandRunner, PackageManager};
use crate::templates::generate;
use crate::validation::validate_project_name;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the installer currently is in the creation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InstallStage {
    NotStarted,
    NameValidated,
    ConfigCollected,
    ConfirmedByUser,
    DirectoryPrepared,
    TemplateGenerated,
    DependenciesInstalled,
    VersionControlInitialized,
    Done,
}

impl fmt::Display for InstallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstallStage::NotStarted => "not started",
            InstallStage::NameValidated => "name validated",
            InstallStage::ConfigCollected => "configuration collected",
            InstallStage::ConfirmedByUser => "confirmed",
            InstallStage::DirectoryPrepared => "directory prepared",
            InstallStage::TemplateGenerated => "project structure created",
            InstallStage::DependenciesInstalled => "dependencies installed",
            InstallStage::VersionControlInitialized => "git repository initialized",
            InstallStage::Done => "done",
        };
        f.write_str(label)
    }
}

/// Why the user stopped the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    OverwriteDeclined,
    ConfirmationDeclined,
}

/// Result of a run that did not fail
#[derive(Debug)]
pub enum InstallOutcome {
    Created(InstallReport),
    Cancelled(CancelReason),
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub project_dir: PathBuf,
    pub config: ProjectConfig,
    pub package_manager: PackageManager,
    pub files_written: usize,
    pub dependencies_installed: bool,
    pub git_initialized: bool,
    /// Best-effort steps that failed, in the order they ran
    pub warnings: Vec<String>,
    pub next_steps: Vec<String>,
}

/// The user-facing side of the flow: prompts and progress
pub trait Interaction {
    /// The target directory already exists; may it be replaced?
    fn confirm_overwrite(&mut self, target: &Path) -> Result<bool>;

    /// Ask the visible questions, in order
    fn answer(&mut self, questions: &[Question]) -> Result<Answers>;

    /// Show the summary and ask for a final go-ahead
    fn confirm_config(&mut self, config: &ProjectConfig) -> Result<bool>;

    /// A long-running stage is about to start
    fn stage_started(&mut self, stage: InstallStage, message: &str) -> Result<()>;

    fn stage_succeeded(&mut self, stage: InstallStage, message: &str) -> Result<()>;

    /// A best-effort stage failed; the flow continues
    fn stage_warned(&mut self, stage: InstallStage, message: &str) -> Result<()>;

    /// A required stage failed; the error is returned right after
    fn stage_failed(&mut self, stage: InstallStage, message: &str) -> Result<()>;
}

/// Drives one project creation from a name to a ready directory
pub struct Installer<P, I, R> {
    product: P,
    interaction: I,
    runner: R,
    base_dir: PathBuf,
    package_manager: PackageManager,
    stage: InstallStage,
}

impl<P, I, R> Installer<P, I, R>
where
    P: ProductConfig,
    I: Interaction,
    R: CommandRunner,
{
    /// Create projects under the current directory with the detected package manager
    pub fn new(product: P, interaction: I, runner: R) -> Self {
        Self {
            product,
            interaction,
            runner,
            base_dir: PathBuf::from("."),
            package_manager: PackageManager::detect(),
            stage: InstallStage::NotStarted,
        }
    }

    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    pub fn stage(&self) -> InstallStage {
        self.stage
    }

    pub fn interaction(&self) -> &I {
        &self.interaction
    }

    fn advance(&mut self, stage: InstallStage) {
        tracing::debug!(from = ?self.stage, to = ?stage, "install stage");
        self.stage = stage;
    }

    /// Run the whole flow for `name`.
    ///
    /// Returns an error for an invalid name or a failed generation step. Declined
    /// prompts come back as [`InstallOutcome::Cancelled`].
    pub async fn run(&mut self, name: &str) -> Result<InstallOutcome> {
        let validation = validate_project_name(name);
        if !validation.valid {
            return Err(ScaffoldError::InvalidName {
                name: name.to_string(),
                errors: validation.errors,
            });
        }
        self.advance(InstallStage::NameValidated);

        let target = self.base_dir.join(name);
        let exists = tokio::fs::try_exists(&target)
            .await
            .map_err(|source| ScaffoldError::Inspect {
                path: target.clone(),
                source,
            })?;
        if exists && !self.interaction.confirm_overwrite(&target)? {
            return Ok(InstallOutcome::Cancelled(CancelReason::OverwriteDeclined));
        }

        let answers = self.interaction.answer(&project_questions())?;
        let config = ProjectConfig::from_answers(name, &answers)?;
        self.advance(InstallStage::ConfigCollected);

        if !self.interaction.confirm_config(&config)? {
            return Ok(InstallOutcome::Cancelled(CancelReason::ConfirmationDeclined));
        }
        self.advance(InstallStage::ConfirmedByUser);

        if exists {
            tokio::fs::remove_dir_all(&target)
                .await
                .map_err(|source| ScaffoldError::Remove {
                    path: target.clone(),
                    source,
                })?;
        }
        self.advance(InstallStage::DirectoryPrepared);

        let stage = InstallStage::TemplateGenerated;
        self.interaction
            .stage_started(stage, "Creating project structure...")?;
        let written = match generate(&config) {
            Ok(tree) => tree.write_to(&target).await,
            Err(e) => Err(e),
        };
        let files_written = match written {
            Ok(count) => count,
            Err(e) => {
                self.interaction
                    .stage_failed(stage, "Failed to generate the project")?;
                return Err(e);
            }
        };
        self.interaction
            .stage_succeeded(stage, "Project structure created")?;
        self.advance(stage);

        let mut warnings = Vec::new();

        let dependencies_installed = self.install_dependencies(name, &target, &mut warnings).await?;
        self.advance(InstallStage::DependenciesInstalled);

        let git_initialized = self.init_git(&target, &mut warnings).await?;
        self.advance(InstallStage::VersionControlInitialized);

        let next_steps = self.product.next_steps(&config, self.package_manager);
        self.advance(InstallStage::Done);

        Ok(InstallOutcome::Created(InstallReport {
            project_dir: target,
            config,
            package_manager: self.package_manager,
            files_written,
            dependencies_installed,
            git_initialized,
            warnings,
            next_steps,
        }))
    }

    async fn install_dependencies(
        &mut self,
        name: &str,
        target: &Path,
        warnings: &mut Vec<String>,
    ) -> Result<bool> {
        let pm = self.package_manager;
        let stage = InstallStage::DependenciesInstalled;
        self.interaction
            .stage_started(stage, &format!("Installing dependencies with {}...", pm))?;

        match self.runner.run(pm.command(), pm.install_args(), target).await {
            Ok(()) => {
                self.interaction.stage_succeeded(stage, "Dependencies installed")?;
                Ok(true)
            }
            Err(e) => {
                tracing::debug!(error = %e, "dependency install failed");
                let warning = format!(
                    "Dependencies installation failed ({}). Run: cd {} && {}",
                    e,
                    name,
                    pm.install_command()
                );
                self.interaction.stage_warned(stage, &warning)?;
                warnings.push(warning);
                Ok(false)
            }
        }
    }

    async fn init_git(&mut self, target: &Path, warnings: &mut Vec<String>) -> Result<bool> {
        let stage = InstallStage::VersionControlInitialized;
        self.interaction
            .stage_started(stage, "Initializing git repository...")?;

        let message = self.product.commit_message();
        let steps: [&[&str]; 3] = [&["init"], &["add", "."], &["commit", "-m", message.as_str()]];

        for args in steps {
            if let Err(e) = self.runner.run("git", args, target).await {
                tracing::debug!(command = %display_command("git", args), error = %e, "git step failed");
                let warning = format!(
                    "Git initialization failed ({}). You can initialize it manually.",
                    e
                );
                self.interaction.stage_warned(stage, &warning)?;
                warnings.push(warning);
                return Ok(false);
            }
        }

        self.interaction
            .stage_succeeded(stage, "Git repository initialized")?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Answer, Backend};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone)]
    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "create-stack-app"
        }
        fn display_name(&self) -> &'static str {
            "Create Stack App"
        }
        fn tagline(&self) -> &'static str {
            "test"
        }
        fn cli_description(&self) -> &'static str {
            "test"
        }
        fn docs_url(&self) -> &'static str {
            "https://example.com"
        }
        fn next_steps(&self, config: &ProjectConfig, pm: PackageManager) -> Vec<String> {
            vec![
                format!("cd {}", config.project_name()),
                pm.run_script("dev"),
            ]
        }
    }

    /// Answers every prompt from a script and records what it was shown
    #[derive(Default)]
    struct Scripted {
        overwrite: bool,
        proceed: bool,
        answers: Answers,
        overwrite_asked: bool,
        questions_asked: bool,
        events: Vec<String>,
        /// Put a plain file here once the summary is confirmed
        occupy_on_confirm: Option<PathBuf>,
    }

    impl Scripted {
        fn accepting() -> Self {
            Self {
                overwrite: true,
                proceed: true,
                ..Default::default()
            }
        }
    }

    impl Interaction for Scripted {
        fn confirm_overwrite(&mut self, _target: &Path) -> Result<bool> {
            self.overwrite_asked = true;
            Ok(self.overwrite)
        }

        fn answer(&mut self, questions: &[Question]) -> Result<Answers> {
            self.questions_asked = true;
            let mut answers = self.answers.clone();
            for question in questions {
                if question.is_visible(&answers) && !answers.contains_key(question.key) {
                    answers.insert(question.key.to_string(), question.default_answer());
                }
            }
            Ok(answers)
        }

        fn confirm_config(&mut self, _config: &ProjectConfig) -> Result<bool> {
            if let Some(path) = &self.occupy_on_confirm {
                std::fs::write(path, "occupied")?;
            }
            Ok(self.proceed)
        }

        fn stage_started(&mut self, stage: InstallStage, _message: &str) -> Result<()> {
            self.events.push(format!("start {}", stage));
            Ok(())
        }

        fn stage_succeeded(&mut self, stage: InstallStage, _message: &str) -> Result<()> {
            self.events.push(format!("ok {}", stage));
            Ok(())
        }

        fn stage_warned(&mut self, stage: InstallStage, _message: &str) -> Result<()> {
            self.events.push(format!("warn {}", stage));
            Ok(())
        }

        fn stage_failed(&mut self, stage: InstallStage, _message: &str) -> Result<()> {
            self.events.push(format!("fail {}", stage));
            Ok(())
        }
    }

    /// Records every command; fails those whose program matches `fail_program`
    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<String>>>,
        fail_program: Option<&'static str>,
    }

    #[async_trait]
    impl CommandRunner for Recorder {
        async fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(display_command(program, args));
            if self.fail_program == Some(program) {
                return Err(ScaffoldError::Command {
                    command: display_command(program, args),
                    reason: "exited with code 1".to_string(),
                });
            }
            Ok(())
        }
    }

    fn installer(
        dir: &TempDir,
        interaction: Scripted,
        runner: Recorder,
    ) -> Installer<TestProduct, Scripted, Recorder> {
        Installer::new(TestProduct, interaction, runner)
            .base_dir(dir.path())
            .package_manager(PackageManager::Npm)
    }

    #[tokio::test]
    async fn test_invalid_name_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let runner = Recorder::default();
        let mut installer = installer(&dir, Scripted::accepting(), runner.clone());

        let err = installer.run("My App!").await.unwrap_err();
        match err {
            ScaffoldError::InvalidName { name, errors } => {
                assert_eq!(name, "My App!");
                assert!(!errors.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(installer.stage(), InstallStage::NotStarted);
        assert!(!installer.interaction().questions_asked);
        assert!(runner.calls.lock().unwrap().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_declined_overwrite_leaves_directory_alone() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("demo");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "mine").unwrap();

        let interaction = Scripted {
            overwrite: false,
            proceed: true,
            ..Default::default()
        };
        let runner = Recorder::default();
        let mut installer = installer(&dir, interaction, runner.clone());

        let outcome = installer.run("demo").await.unwrap();
        assert!(matches!(
            outcome,
            InstallOutcome::Cancelled(CancelReason::OverwriteDeclined)
        ));
        assert!(installer.interaction().overwrite_asked);
        assert!(!installer.interaction().questions_asked);
        assert_eq!(
            std::fs::read_to_string(existing.join("keep.txt")).unwrap(),
            "mine"
        );
        assert_eq!(std::fs::read_dir(&existing).unwrap().count(), 1);
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_declined_summary_leaves_directory_alone() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("demo");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "mine").unwrap();

        let interaction = Scripted {
            overwrite: true,
            proceed: false,
            ..Default::default()
        };
        let mut installer = installer(&dir, interaction, Recorder::default());

        let outcome = installer.run("demo").await.unwrap();
        assert!(matches!(
            outcome,
            InstallOutcome::Cancelled(CancelReason::ConfirmationDeclined)
        ));
        assert_eq!(installer.stage(), InstallStage::ConfigCollected);
        assert!(existing.join("keep.txt").exists());
    }

    #[tokio::test]
    async fn test_install_failure_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let runner = Recorder {
            fail_program: Some("npm"),
            ..Default::default()
        };
        let mut installer = installer(&dir, Scripted::accepting(), runner.clone());

        let outcome = installer.run("demo").await.unwrap();
        let InstallOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };

        assert!(!report.dependencies_installed);
        assert!(report.git_initialized);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("cd demo && npm install"));
        assert!(report.project_dir.join("package.json").is_file());
        assert!(report.project_dir.join("README.md").is_file());
        assert!(report.files_written > 0);
        assert_eq!(installer.stage(), InstallStage::Done);
        assert!(installer
            .interaction()
            .events
            .contains(&"warn dependencies installed".to_string()));
    }

    #[tokio::test]
    async fn test_successful_run_commits_with_product_message() {
        let dir = TempDir::new().unwrap();
        let runner = Recorder::default();
        let mut interaction = Scripted::accepting();
        interaction
            .answers
            .insert("backend".to_string(), Answer::Choice("none".to_string()));
        let mut installer = installer(&dir, interaction, runner.clone());

        let InstallOutcome::Created(report) = installer.run("demo").await.unwrap() else {
            panic!("expected a created project");
        };

        assert!(report.warnings.is_empty());
        assert_eq!(report.config.backend(), Backend::None);
        assert!(!report.config.auth());
        assert_eq!(report.next_steps, vec!["cd demo", "npm run dev"]);
        assert_eq!(
            *runner.calls.lock().unwrap(),
            vec![
                "npm install",
                "git init",
                "git add .",
                "git commit -m Initial commit from create-stack-app",
            ]
        );
    }

    #[tokio::test]
    async fn test_git_failure_stops_remaining_git_steps() {
        let dir = TempDir::new().unwrap();
        let runner = Recorder {
            fail_program: Some("git"),
            ..Default::default()
        };
        let mut installer = installer(&dir, Scripted::accepting(), runner.clone());

        let InstallOutcome::Created(report) = installer.run("demo").await.unwrap() else {
            panic!("expected a created project");
        };
        assert!(report.dependencies_installed);
        assert!(!report.git_initialized);
        assert_eq!(runner.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_uninspectable_target_stops_before_questions() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let runner = Recorder::default();
        let mut installer = Installer::new(TestProduct, Scripted::accepting(), runner.clone())
            .base_dir(&blocker)
            .package_manager(PackageManager::Npm);

        let err = installer.run("demo").await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Inspect { .. }), "{err}");
        assert!(err.to_string().starts_with("Failed to check whether"));
        assert_eq!(installer.stage(), InstallStage::NameValidated);
        assert!(!installer.interaction().questions_asked);
        assert!(runner.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_aborts_before_install() {
        let dir = TempDir::new().unwrap();
        let interaction = Scripted {
            occupy_on_confirm: Some(dir.path().join("demo")),
            ..Scripted::accepting()
        };
        let runner = Recorder::default();
        let mut installer = installer(&dir, interaction, runner.clone());

        let err = installer.run("demo").await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Write { .. }), "{err}");
        assert_eq!(installer.stage(), InstallStage::DirectoryPrepared);
        assert_eq!(
            installer.interaction().events,
            vec![
                "start project structure created".to_string(),
                "fail project structure created".to_string(),
            ]
        );
        assert!(runner.calls.lock().unwrap().is_empty());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("demo")).unwrap(),
            "occupied"
        );
    }

    #[tokio::test]
    async fn test_accepted_overwrite_replaces_directory() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("demo");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("stale.txt"), "old").unwrap();

        let mut installer = installer(&dir, Scripted::accepting(), Recorder::default());
        let outcome = installer.run("demo").await.unwrap();

        assert!(matches!(outcome, InstallOutcome::Created(_)));
        assert!(!existing.join("stale.txt").exists());
        assert!(existing.join("package.json").is_file());
    }
}
