//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `brand_probe` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - JSON output and exit-code mapping
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use brand_probe::initialization::init_logger_with;
use brand_probe::{BrandAnalyzer, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let analyzer = BrandAnalyzer::new(&config).context("Failed to initialize HTTP clients")?;

    match analyzer.analyze(&config.url).await {
        Ok(result) => {
            let json = if config.pretty {
                serde_json::to_string_pretty(&result)
            } else {
                serde_json::to_string(&result)
            }
            .context("Failed to serialize analysis result")?;
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("brand_probe error [{}]: {e}", e.kind());
            process::exit(1);
        }
    }
}
