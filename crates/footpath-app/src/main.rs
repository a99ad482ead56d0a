//! Footpath route planner service.
//!
//! Hosts an interactive map constrained to a fixed area. The user drops a
//! Start and an End marker (shift-click, or long-press on touch devices) and
//! the service draws a walking route between them from OpenRouteService. All
//! interaction logic runs here; the browser is a dumb rendering surface.

mod app;
mod input;
mod markers;
mod route;
mod server;
mod surface;

use anyhow::{Context, Result};
use common::{init_tracing, Config};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("footpath-app");

    let config = Config::from_env()?;

    let state = Arc::new(server::AppState {
        directions: route::OrsClient::new(config.ors_base_url.clone(), config.ors_api_key.clone()),
    });
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("🚀 Route planner listening on {}", config.bind_addr);

    let shutdown = async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        tracing::warn!("Received shutdown signal");
    };

    tokio::select! {
        result = axum::serve(listener, app).into_future() => {
            result.context("Server error")?;
        }
        _ = shutdown => {
            tracing::info!("Shutting down gracefully...");
        }
    }

    Ok(())
}
