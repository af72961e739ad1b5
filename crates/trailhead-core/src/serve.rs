use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use axum::http::{
  HeaderValue,
  Method,
  header
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServeSettings;

/// Static file router for the browser
/// front end. Every response carries the
/// CORS headers the front end needs when
/// it is opened from another origin.
pub fn router(
  settings: &ServeSettings
) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(HeaderValue::from_static(
      "*"
    ))
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::OPTIONS
    ])
    .allow_headers([header::CONTENT_TYPE]);

  Router::new()
    .fallback_service(ServeDir::new(
      &settings.root
    ))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
}

#[tracing::instrument(skip_all)]
pub async fn serve(
  settings: ServeSettings
) -> anyhow::Result<()> {
  let addr = SocketAddr::from((
    settings.host,
    settings.port
  ));
  let listener =
    tokio::net::TcpListener::bind(addr)
      .await
      .with_context(|| {
        format!("failed to bind {addr}")
      })?;

  info!(
    %addr,
    root = %settings.root.display(),
    "server running at http://localhost:{}",
    settings.port
  );

  axum::serve(listener, router(&settings))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(err) =
    tokio::signal::ctrl_c().await
  {
    tracing::error!(error = %err, "failed to listen for ctrl-c");
  }
}
