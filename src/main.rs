use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::error;

use patch_timeline::config::Config;
use patch_timeline::logging;
use patch_timeline::pipeline::{Pipeline, PipelineResult};

#[derive(Parser)]
#[command(name = "patch_timeline")]
#[command(about = "StarCraft II patch timeline scraper")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the patch list from Liquipedia and write the CSV timeline
    Fetch {
        /// Wiki page to parse (defaults to the configured page)
        #[arg(long)]
        page: Option<String>,
        /// Output CSV path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Build the CSV timeline from a saved HTML page
    Parse {
        /// Rendered page HTML
        #[arg(long)]
        input: PathBuf,
        /// Output CSV path
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn report(result: &PipelineResult) {
    println!("Wrote {} rows to {}", result.total_rows, result.output_file);
    if result.dated_rows < result.total_rows {
        println!(
            "   {} rows have no release date",
            result.total_rows - result.dated_rows
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _guard = logging::init_logging();

    let cli = Cli::parse();
    let mut config = Config::load().context("loading configuration")?;

    let outcome = match cli.command {
        Commands::Fetch { page, output } => {
            if let Some(page) = page {
                config.page = page;
            }
            if let Some(output) = output {
                config.output = output;
            }
            Pipeline::run(&config)
                .await
                .with_context(|| format!("scraping page '{}'", config.page))
        }
        Commands::Parse { input, output } => {
            let html = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let output = output.unwrap_or_else(|| config.output.clone());
            Pipeline::run_from_html(&html, &output)
                .with_context(|| format!("extracting timeline from {}", input.display()))
        }
    };

    match outcome {
        Ok(result) => {
            report(&result);
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed: {:#}", e);
            Err(e)
        }
    }
}
