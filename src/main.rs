// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::fixture_repository::FixtureRepository;
use crate::infrastructure::view_mapper::ViewSettings;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_metric, get_dashboard, health_check, list_industries, select_industry, stream_dashboard,
    upload_file,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(FixtureRepository::embedded()?);

    // Create services (application layer); this also starts the simulator
    let dashboard_service = DashboardService::start(
        repository,
        config.simulator.settings(),
        &config.simulator.default_industry,
    )
    .await?;

    let state = Arc::new(AppState {
        dashboard_service,
        view_settings: ViewSettings {
            frame: config.chart.frame(),
            gauge_radius: config.chart.gauge_radius,
        },
    });

    // Build router (presentation layer)
    // Note: responses are compressed by hand, so no CompressionLayer here
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/industries", get(list_industries))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/industry/:id", put(select_industry))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/dashboard/metrics", post(add_metric))
        .route("/uploads/:file_name", post(upload_file))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting industrial-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
