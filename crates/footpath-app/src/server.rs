//! HTTP/WebSocket wiring: serves the map page and runs one planner per
//! connected client.

use crate::app::{MapEvent, RoutePlanner};
use crate::route::OrsClient;
use crate::surface::{MapOptions, SurfaceCommand, WsSurface};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub struct AppState {
    pub directions: OrsClient,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/ws", get(ws_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    profile: &'static str,
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK".to_string(),
        profile: "foot-walking",
    })
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("🔌 New map client connected");
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<SurfaceCommand>();

    // Writer task: drains surface commands onto the socket.
    let writer = tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            let text = match serde_json::to_string(&command) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to serialize surface command: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(text)).await.is_err() {
                // Client disconnected
                break;
            }
        }
    });

    let surface = WsSurface::new(tx);
    surface.init(MapOptions::fixed_area());
    let mut planner = RoutePlanner::new(surface, state.directions.clone());

    // Events are handled one at a time: a pending route fetch completes
    // before the next gesture is read, so responses cannot race.
    while let Some(Ok(message)) = stream.next().await {
        let Message::Text(text) = message else {
            continue;
        };
        match serde_json::from_str::<MapEvent>(&text) {
            Ok(event) => planner.handle(event).await,
            Err(e) => warn!("Ignoring malformed map event: {}", e),
        }
    }

    writer.abort();
    info!("🔌 Map client disconnected");
}
