#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the wildfire map toolchain.
//!
//! `prepare` runs the one-time derivation from the raw upstream CSV
//! exports to the files the server loads; `serve` starts the dashboard
//! API server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use wildfire_map_dataset::{Dataset, prepare};
use wildfire_map_server::ServerConfig;

#[derive(Parser)]
#[command(name = "wildfire-map", about = "Wildfire map toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive main_data.csv and expenditure.csv from the raw exports
    Prepare {
        /// Directory holding fire_final.csv and fire_brigade.csv
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Start the dashboard API server
    Serve {
        /// Directory holding main_data.csv and expenditure.csv
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Directory holding the static dashboard frontend
        #[arg(long, default_value = "assets")]
        assets_dir: PathBuf,
        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        bind_addr: String,
        /// Port to bind to
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    match Cli::parse().command {
        Command::Prepare { data_dir } => run_prepare(&data_dir)?,
        Command::Serve {
            data_dir,
            assets_dir,
            bind_addr,
            port,
        } => {
            let dataset = Dataset::load(&data_dir)?;
            wildfire_map_server::run(
                ServerConfig {
                    bind_addr,
                    port,
                    assets_dir,
                },
                Arc::new(dataset),
            )
            .await?;
        }
    }

    Ok(())
}

/// Runs the preprocessing step: derive fire records from the raw
/// export, join the expenditure table against yearly burnt area, and
/// write both derived files next to the inputs.
fn run_prepare(data_dir: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let fires = prepare::load_raw_fires(&data_dir.join("fire_final.csv"))?;
    prepare::write_fire_records(&data_dir.join("main_data.csv"), &fires)?;

    let raw_expenditures = prepare::load_raw_expenditures(&data_dir.join("fire_brigade.csv"))?;
    let expenditures = wildfire_map_analytics::engine::compute_ratio(&fires, &raw_expenditures)?;
    prepare::write_expenditure_records(&data_dir.join("expenditure.csv"), &expenditures)?;

    log::info!("Preprocessing complete");
    Ok(())
}
