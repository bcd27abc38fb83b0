#![allow(dead_code)]

mod analyzer;
mod cache;
mod config;
mod db;
mod errors;
mod handlers;
mod jobs;
mod models;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cache::TtlCache;
use crate::config::AppConfig;
use crate::handlers::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "anomaly_insights=info,tower_http=info".into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded");

    // Connect to PostgreSQL
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!("Connected to PostgreSQL");

    // Run migrations
    sqlx::raw_sql(include_str!("../migrations/001_initial_schema.sql"))
        .execute(&pool)
        .await?;
    tracing::info!("Database migrations applied");

    // Response cache for the anomalies endpoint
    let insight_cache = Arc::new(TtlCache::new(Duration::from_secs(config.cache.ttl_seconds)));

    // Create shared state
    let state = AppState {
        pool: pool.clone(),
        cache: insight_cache.clone(),
        analyzer: config.analyzer,
        persist_insights: config.persist_insights,
    };

    // Spawn background jobs
    jobs::spawn_background_jobs(
        pool.clone(),
        config.jobs.clone(),
        config.analyzer,
        insight_cache,
        config.persist_insights,
    );

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/insights/anomalies", get(handlers::insights::list))
        .route("/insights", get(handlers::dashboard::insights_page))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting anomaly insights server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
