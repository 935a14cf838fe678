use thiserror::Error;

/// Everything that can go wrong between receiving a profile and handing back a plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Missing required fields. Expect goal, experience, style, daysPerWeek.")]
    MissingFields,

    #[error("OPENAI_API_KEY is not configured on the server.")]
    MissingApiKey,

    // Raw body is kept for the caller; the provider's message is usually in there.
    #[error("completion API returned {status}")]
    Upstream { status: u16, body: String },

    #[error("AI response was not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Workout plan missing 'weeks' array in AI response.")]
    MissingWeeks,

    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not build completion request: {0}")]
    RequestBuild(#[from] async_openai::error::OpenAIError),

    #[error("completion API returned a non-JSON envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),
}

impl PlanError {
    /// HTTP status the gateway answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            PlanError::MissingFields => 400,
            PlanError::Upstream { .. } => 502,
            PlanError::MissingApiKey
            | PlanError::InvalidJson(_)
            | PlanError::MissingWeeks
            | PlanError::Transport(_)
            | PlanError::RequestBuild(_)
            | PlanError::MalformedEnvelope(_) => 500,
        }
    }

    /// Message safe to show the caller. Internal failures collapse to a generic line.
    pub fn public_message(&self) -> &'static str {
        match self {
            PlanError::MissingFields => {
                "Missing required fields. Expect goal, experience, style, daysPerWeek."
            }
            PlanError::MissingApiKey => "OPENAI_API_KEY is not configured on the server.",
            PlanError::Upstream { .. } => "Failed to generate workout plan from AI.",
            PlanError::InvalidJson(_) => "AI response was not valid JSON.",
            PlanError::MissingWeeks => "Workout plan missing 'weeks' array in AI response.",
            PlanError::Transport(_)
            | PlanError::RequestBuild(_)
            | PlanError::MalformedEnvelope(_) => "Unexpected server error.",
        }
    }

    /// Extra detail forwarded verbatim, only for upstream failures.
    pub fn details(&self) -> Option<&str> {
        match self {
            PlanError::Upstream { body, .. } => Some(body),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
