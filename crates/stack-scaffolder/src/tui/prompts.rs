//! Charm-style CLI prompts using cliclack

use crate::config::{Answer, Answers, Backend, ProjectConfig, Question, QuestionKind};
use crate::error::ScaffoldError;
use crate::installer::{CancelReason, InstallOutcome, InstallReport, InstallStage, Installer, Interaction};
use crate::product::ProductConfig;
use crate::runtime::{check, Interrupt, PackageManager, SystemRunner};
use crate::validation::validate_project_name;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// [`Interaction`] backed by cliclack prompts and spinners
#[derive(Default)]
pub struct ClackInteraction {
    spinner: Option<cliclack::ProgressBar>,
}

impl Interaction for ClackInteraction {
    fn confirm_overwrite(&mut self, target: &Path) -> crate::Result<bool> {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.display().to_string());

        let overwrite = cliclack::confirm(format!(
            "Directory \"{}\" already exists. Do you want to overwrite it?",
            name
        ))
        .initial_value(false)
        .interact()?;
        Ok(overwrite)
    }

    fn answer(&mut self, questions: &[Question]) -> crate::Result<Answers> {
        let mut answers = Answers::new();

        for question in questions {
            if !question.is_visible(&answers) {
                continue;
            }

            let answer = match &question.kind {
                QuestionKind::Select { choices, default } => {
                    let mut select = cliclack::select(question.message);
                    for choice in choices {
                        select = select.item(choice.value, choice.label, "");
                    }
                    let value: &str = select.initial_value(*default).interact()?;
                    Answer::Choice(value.to_string())
                }
                QuestionKind::Confirm { default } => {
                    let value = cliclack::confirm(question.message)
                        .initial_value(*default)
                        .interact()?;
                    Answer::Confirm(value)
                }
            };
            answers.insert(question.key.to_string(), answer);
        }

        Ok(answers)
    }

    fn confirm_config(&mut self, config: &ProjectConfig) -> crate::Result<bool> {
        print_summary(config);
        let proceed = cliclack::confirm("Proceed with this configuration?")
            .initial_value(true)
            .interact()?;
        Ok(proceed)
    }

    fn stage_started(&mut self, _stage: InstallStage, message: &str) -> crate::Result<()> {
        let spinner = cliclack::spinner();
        spinner.start(message);
        self.spinner = Some(spinner);
        Ok(())
    }

    fn stage_succeeded(&mut self, _stage: InstallStage, message: &str) -> crate::Result<()> {
        match self.spinner.take() {
            Some(spinner) => spinner.stop(message),
            None => cliclack::log::success(message)?,
        }
        Ok(())
    }

    fn stage_warned(&mut self, stage: InstallStage, message: &str) -> crate::Result<()> {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(format!("Skipped: {}", stage));
        }
        cliclack::log::warning(message)?;
        Ok(())
    }

    fn stage_failed(&mut self, stage: InstallStage, message: &str) -> crate::Result<()> {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(format!("Failed: {}", stage));
        }
        cliclack::log::error(message)?;
        Ok(())
    }
}

fn check_mark(enabled: bool) -> String {
    if enabled {
        "✅".green().to_string()
    } else {
        "❌".red().to_string()
    }
}

fn print_summary(config: &ProjectConfig) {
    let rule = "─".repeat(50);
    let rows = [
        ("Project Name", config.project_name().cyan().to_string()),
        ("Frontend", config.frontend().id().cyan().to_string()),
        ("UI Framework", config.ui().id().cyan().to_string()),
        ("Backend", config.backend().id().cyan().to_string()),
        ("TypeScript", check_mark(config.typescript())),
        ("Authentication", check_mark(config.auth())),
        ("Animations", check_mark(config.animations())),
        ("3D Support", check_mark(config.three_d())),
        ("Testing", check_mark(config.testing())),
        ("Docker", check_mark(config.docker())),
    ];

    println!();
    println!("  {}", "📋 Configuration Summary".blue());
    println!("  {}", rule.dimmed());
    for (label, value) in rows {
        println!("  {} {}", format!("{}:", label).bold(), value);
    }
    println!("  {}", rule.dimmed());
    println!();
}

/// Run the CLI with interactive prompts.
///
/// `interrupt` is the handle the binary's Ctrl+C handler signals; install and git
/// commands register with it so an interrupt fails only the step in progress.
pub async fn run<C: ProductConfig>(
    config: &C,
    project_name: Option<String>,
    interrupt: Interrupt,
) -> Result<()> {
    cliclack::intro(config.display_name())?;
    cliclack::log::info(config.tagline())?;

    // Step 1: Project name (argument or prompt)
    let name = match project_name {
        Some(name) => name,
        None => prompt_project_name()?,
    };

    // Step 2: Advisory runtime check
    let package_manager = PackageManager::detect();
    check_runtimes(package_manager)?;

    // Step 3: Questions, confirmation, generation, install, git
    let runner = SystemRunner::new().with_interrupt(interrupt);
    let mut installer = Installer::new(config.clone(), ClackInteraction::default(), runner)
        .package_manager(package_manager);

    let outcome = match installer.run(&name).await {
        Ok(outcome) => outcome,
        Err(ScaffoldError::InvalidName { name, errors }) => {
            let details: Vec<String> = errors.iter().map(|e| format!("  • {}", e)).collect();
            cliclack::log::error(format!("Invalid project name:\n{}", details.join("\n")))?;
            anyhow::bail!("Invalid project name '{}'", name);
        }
        Err(e) => {
            let _ = console::Term::stderr().show_cursor();
            return Err(e).context("Failed to generate stack");
        }
    };

    // Step 4: Show next steps
    match outcome {
        InstallOutcome::Created(report) => print_next_steps(&report, config.docs_url()),
        InstallOutcome::Cancelled(reason) => {
            tracing::debug!(?reason, "creation cancelled");
            let message = match reason {
                CancelReason::OverwriteDeclined => "Operation cancelled. The existing directory was left untouched.",
                CancelReason::ConfirmationDeclined => "Operation cancelled.",
            };
            cliclack::outro_cancel(message)?;
            Ok(())
        }
    }
}

fn prompt_project_name() -> Result<String> {
    let name: String = cliclack::input("What is your project named?")
        .placeholder("my-app")
        .validate(|input: &String| {
            let validation = validate_project_name(input);
            if validation.valid {
                Ok(())
            } else {
                Err(validation.errors.join("; "))
            }
        })
        .interact()?;
    Ok(name)
}

fn check_runtimes(package_manager: PackageManager) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let runtimes = check::check_runtimes(package_manager);
    let described: Vec<String> = runtimes.iter().map(|r| r.describe()).collect();
    spinner.stop(format!("Detected runtimes: {}", described.join(", ")));

    for missing in runtimes.iter().filter(|r| !r.available) {
        cliclack::log::warning(format!(
            "{} is not installed; steps that need it will be skipped",
            missing.name
        ))?;
    }
    Ok(())
}

/// Scripts worth pointing out, with a short description each
fn available_scripts(config: &ProjectConfig) -> Vec<(&'static str, &'static str)> {
    let mut scripts = vec![
        ("dev", "Start development server"),
        ("build", "Build for production"),
        ("lint", "Run ESLint"),
    ];
    if config.testing() {
        scripts.push(("test", "Run tests"));
    }
    if config.has_backend() {
        scripts.push(("seed-db", "Seed database with sample data"));
    }
    scripts
}

/// What still has to go into `.env`
fn environment_notes(config: &ProjectConfig) -> Vec<&'static str> {
    let mut notes = match config.backend() {
        Backend::Firebase => vec!["Firebase configuration"],
        Backend::MongoDb => vec!["MongoDB connection string"],
        Backend::Postgres => vec!["PostgreSQL connection string"],
        Backend::None => return Vec::new(),
    };
    if config.auth() {
        notes.push("JWT secret for authentication");
    }
    notes
}

fn print_next_steps(report: &InstallReport, docs_url: &str) -> Result<()> {
    let pm = report.package_manager;

    println!();
    println!("  {}", "🎉 Your project is ready!".green().bold());
    println!();
    println!("  {}", "Next steps".blue());
    println!();
    for (i, step) in report.next_steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  {}", "Available scripts".blue());
    println!();
    for (script, description) in available_scripts(&report.config) {
        println!(
            "  {}  {}",
            format!("{:<24}", pm.run_script(script)).dimmed(),
            description
        );
    }

    let notes = environment_notes(&report.config);
    if !notes.is_empty() {
        println!();
        println!("  {}", "Environment setup".blue());
        println!(
            "  {}",
            "Don't forget to configure your environment variables in .env".yellow()
        );
        for note in notes {
            println!("  {}", format!("• {}", note).dimmed());
        }
    }

    println!();
    println!("  {}", "Check README.md for detailed setup instructions".dimmed());
    println!("  {} {}", "Docs:".dimmed(), docs_url.cyan());

    if report.warnings.is_empty() {
        cliclack::outro("Happy coding!")?;
    } else {
        cliclack::outro(format!(
            "Done with {} warning(s). Happy coding!",
            report.warnings.len()
        ))?;
    }

    Ok(())
}
