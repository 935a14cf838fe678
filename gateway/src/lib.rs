pub mod api;
pub mod config;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitplan_core::{PlanEnvelope, Planner, WorkoutPlanRequest};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::api::{ApiError, HealthResponse};

// Shared across requests; nothing in it is mutable.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<Planner>,
}

impl AppState {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/health", get(health_check))
        .route("/api/generate-workout-plan", post(generate_workout_plan))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve on an already-bound listener until Ctrl-C / SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

// --- HANDLERS ---

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

// Body is decoded leniently so a malformed payload reads as missing fields.
async fn generate_workout_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanEnvelope>, ApiError> {
    let request = WorkoutPlanRequest::from_body(&body);
    let plan = state.planner.generate(request).await?;
    Ok(Json(plan.into()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
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
    info!("Shutdown signal received");
}
