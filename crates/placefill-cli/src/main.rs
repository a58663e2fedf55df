mod enrich;
mod logging;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::enrich::EnrichOptions;

#[derive(Debug, Parser)]
#[command(name = "placefill")]
#[command(about = "Enrich an organization dataset with Google Places business data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Match each row of a CSV file to a place and write an enhanced copy
    Enrich {
        /// Input CSV with organization_name, city, state and
        /// organization_website_url columns
        #[arg(default_value = "dataset.csv")]
        input: PathBuf,

        /// Process every row instead of only the first five
        #[arg(long)]
        all: bool,

        /// Where to write the result (defaults to enhanced_<input file name>)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("no command given; try `placefill enrich <input.csv>`");
        return Ok(());
    };

    let config = match placefill_core::load_app_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init_logging(
                placefill_core::DEFAULT_LOG_LEVEL,
                Path::new(placefill_core::DEFAULT_LOG_FILE),
            );
            tracing::error!(error = %e, "configuration error");
            return Err(e.into());
        }
    };
    logging::init_logging(&config.log_level, &config.log_file);
    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Enrich { input, all, output } => {
            let options = EnrichOptions {
                input,
                output,
                test_mode: !all,
            };
            if let Err(e) = enrich::run_enrich(&config, &options).await {
                tracing::error!(error = %format!("{e:#}"), "enrichment run aborted");
                return Err(e);
            }
        }
    }

    Ok(())
}
