use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use stack_scaffolder::{Interrupt, PackageManager, ProductConfig, ProjectConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "create-stack-app")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    pub project_name: Option<String>,
}

/// Identity of the create-stack-app product
#[derive(Clone)]
struct StackAppConfig;

impl ProductConfig for StackAppConfig {
    fn name(&self) -> &'static str {
        "create-stack-app"
    }

    fn display_name(&self) -> &'static str {
        "Create Stack App"
    }

    fn tagline(&self) -> &'static str {
        "Generate modern full-stack web applications with ease!"
    }

    fn cli_description(&self) -> &'static str {
        "Generate modern full-stack web applications with ease"
    }

    fn docs_url(&self) -> &'static str {
        "https://nextjs.org/docs"
    }

    fn next_steps(&self, config: &ProjectConfig, package_manager: PackageManager) -> Vec<String> {
        let mut steps = vec![format!("cd {}", config.project_name())];
        if config.has_backend() {
            steps.push("cp .env.example .env".to_string());
        }
        steps.push(package_manager.run_script("dev"));
        steps
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C fails a running install or git command; anywhere else it exits
    let interrupt = Interrupt::new();
    let handler_interrupt = interrupt.clone();
    ctrlc::set_handler(move || {
        if handler_interrupt.interrupt() {
            return;
        }
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = parse_args(&StackAppConfig);

    let result = run(args, interrupt).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

/// Parse the command line, taking the help text from the product
fn parse_args<P: ProductConfig>(product: &P) -> Args {
    let matches = Args::command()
        .about(product.cli_description())
        .get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

async fn run(args: Args, interrupt: Interrupt) -> Result<()> {
    stack_scaffolder::run(&StackAppConfig, args.project_name, interrupt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use stack_scaffolder::Backend;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_project_name_is_optional() {
        let args = Args::parse_from(["create-stack-app"]);
        assert!(args.project_name.is_none());

        let args = Args::parse_from(["create-stack-app", "my-app"]);
        assert_eq!(args.project_name.as_deref(), Some("my-app"));
    }

    #[test]
    fn test_next_steps_copy_env_only_with_backend() {
        let product = StackAppConfig;

        let frontend_only = ProjectConfig::builder("site").backend(Backend::None).build();
        assert_eq!(
            product.next_steps(&frontend_only, PackageManager::Npm),
            vec!["cd site".to_string(), "npm run dev".to_string()]
        );

        let with_db = ProjectConfig::builder("shop").backend(Backend::MongoDb).build();
        assert_eq!(
            product.next_steps(&with_db, PackageManager::Pnpm),
            vec![
                "cd shop".to_string(),
                "cp .env.example .env".to_string(),
                "pnpm run dev".to_string()
            ]
        );
    }

    #[test]
    fn test_help_uses_product_description() {
        let mut command = Args::command().about(StackAppConfig.cli_description());
        let help = command.render_help().to_string();
        assert!(help.contains(StackAppConfig.cli_description()));
    }

    #[test]
    fn test_commit_message_names_the_tool() {
        assert_eq!(
            StackAppConfig.commit_message(),
            "Initial commit from create-stack-app"
        );
    }
}
