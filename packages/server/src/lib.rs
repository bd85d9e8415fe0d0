#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the wildfire map dashboard.
//!
//! Serves the JSON data behind each dashboard chart plus the static
//! frontend files. The dataset is loaded once at startup and shared
//! read-only across workers; every request runs one stateless
//! aggregation over it, so there is no locking and no per-request
//! state.

mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use wildfire_map_dataset::Dataset;

/// Shared application state.
pub struct AppState {
    /// The in-memory wildfire dataset.
    pub dataset: Arc<Dataset>,
}

/// Server configuration, read from the environment by the binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: String,
    /// Port to bind to.
    pub port: u16,
    /// Directory containing the static dashboard frontend.
    pub assets_dir: PathBuf,
}

/// Runs the HTTP server until shutdown.
///
/// # Errors
///
/// Returns an [`std::io::Error`] if binding or serving fails.
pub async fn run(config: ServerConfig, dataset: Arc<Dataset>) -> std::io::Result<()> {
    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    let state = web::Data::new(AppState { dataset });
    let assets_dir = config.assets_dir.clone();

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/regions", web::get().to(handlers::regions))
                    .route("/burnt-area", web::get().to(handlers::burnt_area))
                    .route("/county-counts", web::get().to(handlers::county_counts))
                    .route("/cause-flow", web::get().to(handlers::cause_flow))
                    .route("/expenditure", web::get().to(handlers::expenditure)),
            )
            // Serve the dashboard frontend
            .service(Files::new("/", assets_dir.clone()).index_file("index.html"))
    })
    .bind((config.bind_addr.clone(), config.port))?
    .run()
    .await
}
