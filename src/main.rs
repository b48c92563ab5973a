// src/main.rs

use monad_mcp_server::{
    alerts::{AlertMonitor, AlertStore, TracingAlertSink},
    api::create_router,
    blockchain::{ChainClient, ExplorerHistoryProvider, HistoryProvider, MonadClient},
    config::Config,
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// --- HTTP Server Logic ---
async fn run_http_server(state: AppState) {
    let port = state.config.port;
    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("❌ Failed to bind {}: {}", addr, e);
            return;
        }
    };
    info!("🚀 HTTP Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("HTTP server error: {}", e);
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monad_mcp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Failed to load configuration: {:#}", e);
            return;
        }
    };

    let chain: Arc<dyn ChainClient> = Arc::new(MonadClient::new(&config.monad_rpc_url));
    let history: Arc<dyn HistoryProvider> = Arc::new(ExplorerHistoryProvider::new(
        &config.history_api_url,
        config.history_api_key.clone(),
    ));
    let alert_store = AlertStore::new();

    // Background balance checker
    let monitor = AlertMonitor::new(
        alert_store.clone(),
        chain.clone(),
        Arc::new(TracingAlertSink),
    );
    tokio::spawn(monitor.run());

    let app_state = AppState::new(config, chain, history, alert_store);
    run_http_server(app_state).await;
}
