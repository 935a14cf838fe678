use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fitplan_core::PlanError;
use serde::Serialize;
use tracing::{error, warn};

pub const SERVICE_NAME: &str = "fitplan-gateway";

// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// A plan failure turned into a status code and a JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl From<PlanError> for ApiError {
    fn from(err: PlanError) -> Self {
        match &err {
            PlanError::MissingFields => warn!("Rejected plan request: missing required fields"),
            PlanError::MissingApiKey => {
                error!("Plan request refused: OPENAI_API_KEY is not configured")
            }
            // Already logged with the raw payload where it happened.
            PlanError::Upstream { .. } | PlanError::InvalidJson(_) | PlanError::MissingWeeks => {}
            other => error!("Unexpected error generating workout plan: {other}"),
        }

        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            body: ErrorBody {
                error: err.public_message(),
                details: err.details().map(str::to_string),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
