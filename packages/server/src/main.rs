#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server binary for the wildfire map dashboard.

use std::path::PathBuf;
use std::sync::Arc;

use wildfire_map_dataset::Dataset;
use wildfire_map_server::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
    let assets_dir =
        PathBuf::from(std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()));

    log::info!("Loading dataset from {}...", data_dir.display());
    let dataset = Dataset::load(&data_dir).expect("Failed to load dataset");

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    wildfire_map_server::run(
        ServerConfig {
            bind_addr,
            port,
            assets_dir,
        },
        Arc::new(dataset),
    )
    .await
}
