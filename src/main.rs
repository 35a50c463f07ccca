// src/main.rs
use std::net::SocketAddr;

use dotenvy::dotenv;
use product_api::{config::Config, database, routes, state::AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Create database pool and make sure the table exists
    let db_pool = match database::create_pool(&config.database_url, config.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, url = %config.database_url, "Failed to create database pool");
            std::process::exit(1);
        }
    };
    if let Err(e) = database::init_schema(&db_pool).await {
        tracing::error!(error = %e, "Failed to initialize schema");
        std::process::exit(1);
    }

    let app = routes::app(AppState::new(db_pool));

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) if offset == 0 => {
                    tracing::warn!(%addr, error = %e, "Port in use, trying next");
                }
                Err(_) => {}
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!(debug = config.debug, "Server running on {}", addr);
                l
            }
            None => {
                tracing::error!(
                    "Failed to bind to any port starting at {} on {}",
                    config.port,
                    config.host
                );
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}
