//! SimuCredito report exporter.
//!
//! # Commands
//!
//! - `simucredito export --id <ID>` - Fetch a simulation and write its PDF report
//! - `simucredito export --input <file>` - Write the report for a saved result
//! - `simucredito list` - List the user's simulations

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use simucredito_shared::AppConfig;
use simucredito_shared::config::ReportLocale;

mod commands;

/// SimuCredito simulation report CLI
#[derive(Parser)]
#[command(name = "simucredito")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bearer token for the simulations API (overrides configuration)
    #[arg(long, global = true, env = "SIMUCREDITO_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a simulation report as PDF
    Export {
        /// Simulation id to fetch from the API
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        id: Option<String>,

        /// JSON file holding a simulation result
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (overrides configuration)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Report language: es-PE or en (overrides configuration)
        #[arg(short, long)]
        locale: Option<ReportLocale>,

        /// Date printed on the report (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List stored simulations
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simucredito=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if cli.token.is_some() {
        config.gateway.bearer_token = cli.token;
    }

    match cli.command {
        Commands::Export {
            id,
            input,
            output_dir,
            locale,
            date,
        } => {
            let source = match (id, input) {
                (Some(id), _) => commands::export::Source::Api(id.parse()?),
                (None, Some(path)) => commands::export::Source::File(path),
                (None, None) => anyhow::bail!("either --id or --input is required"),
            };
            let options = commands::export::ExportOptions {
                output_dir: output_dir.unwrap_or_else(|| PathBuf::from(&config.output.dir)),
                locale: locale.unwrap_or(config.report.locale),
                date: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
            };
            let path = commands::export::run(&config, source, options).await?;
            println!("{}", path.display());
        }
        Commands::List => commands::list::run(&config).await?,
    }

    Ok(())
}
