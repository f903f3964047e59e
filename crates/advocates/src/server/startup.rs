//! REST server startup and shutdown

use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
  http::{header::CONTENT_TYPE, Method},
  serve, Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};
use tracing::info;

use crate::server::{config::ServerConfig, routing::create_router, state::AppState};

/// Router with the HTTP tracing and CORS layers applied
pub fn build_app(state: AppState) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::OPTIONS])
    .allow_headers([CONTENT_TYPE])
    .max_age(Duration::from_secs(60 * 60));

  create_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}

/// Open the configured store and serve until Ctrl+C or SIGTERM
pub async fn start_server(config: ServerConfig) -> Result<()> {
  info!("Initializing store...");
  let store = config.open_store()?;
  let app = build_app(AppState::new(store));

  let listener = TcpListener::bind(config.bind).await.with_context(|| format!("Failed to bind {}", config.bind))?;
  info!("Server listening on {}", config.bind);

  serve(listener, app).with_graceful_shutdown(shutdown_signal()).await.context("Server error")?;

  info!("Server shutdown gracefully");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {e}");
      std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
        info!("Received terminate signal, shutting down");
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {e}");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }
}
