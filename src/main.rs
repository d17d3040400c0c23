// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, content source client, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{RemoteClient, SeedStore};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting hobivia-lodgings service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the content source client once; handlers share it
    let remote = web::Data::new(RemoteClient::from_config(&config));
    let seed = web::Data::new(SeedStore::new(&config.seed_path));
    log::info!(
        "Content source: {} (fallback snapshot: {})",
        remote.source_name(),
        config.seed_path
    );
    if let Some(endpoint) = remote.endpoint() {
        log::info!("Content endpoint: {}", endpoint);
    }

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (config, content source, snapshot)
            .app_data(config.clone())
            .app_data(remote.clone())
            .app_data(seed.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::lodgings_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
