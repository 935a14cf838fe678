use tracing::{info, warn};

use crate::error::{PlanError, Result};
use crate::llm::CompletionClient;
use crate::plan::{WorkoutPlan, WorkoutPlanRequest};
use crate::prompt;

/// Runs one request end to end: validate, prompt, call upstream, check the plan.
///
/// Holds no per-request state; the client is `None` when no API key was configured,
/// in which case every valid request fails instead of the process refusing to start.
pub struct Planner {
    client: Option<CompletionClient>,
}

impl Planner {
    pub fn new(client: Option<CompletionClient>) -> Self {
        if client.is_none() {
            warn!("OPENAI_API_KEY is not set; plan generation requests will fail");
        }
        Self { client }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub async fn generate(&self, request: WorkoutPlanRequest) -> Result<WorkoutPlan> {
        let profile = request.validate()?;
        let client = self.client.as_ref().ok_or(PlanError::MissingApiKey)?;

        info!(
            goal = %profile.goal,
            experience = %profile.experience,
            style = %profile.style,
            days_per_week = %profile.days_per_week,
            "Generating workout plan"
        );

        let prompt = prompt::render(&profile);
        let content = client.complete(&prompt).await?;
        let plan = WorkoutPlan::from_completion(&content)?;

        info!(weeks = plan.weeks().len(), "Workout plan generated");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> WorkoutPlanRequest {
        WorkoutPlanRequest::from_body(value.to_string().as_bytes())
    }

    #[tokio::test]
    async fn test_missing_fields_checked_before_credentials() {
        let planner = Planner::new(None);
        let err = planner.generate(body(json!({ "goal": "x" }))).await.unwrap_err();
        assert!(matches!(err, PlanError::MissingFields));
    }

    #[tokio::test]
    async fn test_unconfigured_planner_rejects_valid_request() {
        let planner = Planner::new(None);
        assert!(!planner.is_configured());

        let err = planner
            .generate(body(json!({
                "goal": "fat-loss",
                "experience": "beginner",
                "style": "HIIT",
                "daysPerWeek": 3
            })))
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::MissingApiKey));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_internal_error() {
        let client = CompletionClient::new("sk-test").with_api_base("http://127.0.0.1:1");
        let planner = Planner::new(Some(client));

        let err = planner
            .generate(body(json!({
                "goal": "strength",
                "experience": "advanced",
                "style": "powerlifting",
                "daysPerWeek": 4
            })))
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Transport(_)));
        assert_eq!(err.public_message(), "Unexpected server error.");
    }
}
