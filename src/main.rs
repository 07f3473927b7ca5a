// Main entry point - Dependency injection and terminal setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::controller::DashboardController;
use crate::application::json_fetcher::JsonFetcher;
use crate::application::renderers;
use crate::application::user_service::UserDirectoryService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_fetcher::HttpJsonFetcher;
use crate::presentation::app::DashboardApp;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The terminal UI owns stdout; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Fetch seam (infrastructure layer)
    let fetcher: Arc<dyn JsonFetcher> = Arc::new(HttpJsonFetcher::new());

    // Active renderer, picked once from configuration (application layer)
    let renderer = renderers::from_config(
        config.chart.kind,
        Arc::clone(&fetcher),
        &config.api.chart_api_url,
    );
    let (controller, outcomes) = DashboardController::new(renderer);

    // The user list loads in the background; the selector reveals itself
    // once it lands.
    let directory = UserDirectoryService::new(fetcher);
    let (users_tx, users_rx) = mpsc::channel(1);
    let users_url = config.api.users_url.clone();
    tokio::spawn(async move {
        let _ = users_tx.send(directory.list_users(&users_url).await).await;
    });

    DashboardApp::new(controller, config.ui.tick_ms)
        .run(users_rx, outcomes)
        .await
}
