use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod collect;
mod ledger;
mod publish;

#[derive(Debug, Parser)]
#[command(name = "viewdeck")]
#[command(about = "Content metrics collection and publishing pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect data from upstream sources
    Collect {
        #[command(subcommand)]
        command: CollectCommands,
    },
    /// Rewrite placeholder assignments in the publish targets
    Publish {
        /// Documents whose placeholder spans get rewritten
        #[arg(default_values_t = [String::from("index.html"), String::from("dashboard.html")])]
        targets: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
enum CollectCommands {
    /// Rebuild per-project snapshot series from spreadsheet tabs
    Metrics {
        /// Only collect the named project
        #[arg(long)]
        project: Option<String>,
        /// Print what would be collected without fetching anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Fetch ledger transactions for all configured projects
    Ledger {
        /// Only collect the named project
        #[arg(long)]
        project: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = viewdeck_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Collect {
            command: CollectCommands::Metrics { project, dry_run },
        }) => collect::run_collect_metrics(&config, project.as_deref(), dry_run).await,
        Some(Commands::Collect {
            command: CollectCommands::Ledger { project },
        }) => ledger::run_collect_ledger(&config, project.as_deref()).await,
        Some(Commands::Publish { targets }) => publish::run_publish(&config, &targets),
        None => {
            println!("viewdeck: nothing to do (try `viewdeck collect metrics`)");
            Ok(())
        }
    }
}
