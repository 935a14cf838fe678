use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlanError, Result};

// Input: the profile the front-end posts.
// Fields stay loose JSON so a wrong type is still embedded rather than rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanRequest {
    #[serde(default)]
    pub goal: Value,
    #[serde(default)]
    pub experience: Value,
    #[serde(default)]
    pub style: Value,
    #[serde(default)]
    pub days_per_week: Value,
}

impl WorkoutPlanRequest {
    /// Decode a raw body. Anything that isn't a JSON object becomes an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// All four fields must be present and truthy; nothing else is checked.
    pub fn validate(self) -> Result<TrainingProfile> {
        let fields = [&self.goal, &self.experience, &self.style, &self.days_per_week];
        if !fields.iter().all(|v| is_truthy(v)) {
            return Err(PlanError::MissingFields);
        }

        Ok(TrainingProfile {
            goal: plain_text(&self.goal),
            experience: plain_text(&self.experience),
            style: plain_text(&self.style),
            days_per_week: plain_text(&self.days_per_week),
        })
    }
}

/// A validated profile, each field already in the text form the prompt embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingProfile {
    pub goal: String,
    pub experience: String,
    pub style: String,
    pub days_per_week: String,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Strings go in without quotes; everything else as its JSON text.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The model's plan, relayed untouched once it has a `weeks` sequence.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct WorkoutPlan(Value);

impl WorkoutPlan {
    /// Parse completion content and check the one shape rule we enforce.
    pub fn from_completion(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| {
            tracing::error!(error = %e, raw = %content, "Failed to parse AI response as JSON");
            PlanError::InvalidJson(e)
        })?;

        if !value.get("weeks").is_some_and(Value::is_array) {
            tracing::error!(raw = %content, "AI response has no 'weeks' array");
            return Err(PlanError::MissingWeeks);
        }

        Ok(Self(value))
    }

    pub fn weeks(&self) -> &[Value] {
        self.0["weeks"].as_array().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

// Output: what the caller gets on success.
#[derive(Debug, Serialize)]
pub struct PlanEnvelope {
    pub ok: bool,
    pub plan: WorkoutPlan,
}

impl From<WorkoutPlan> for PlanEnvelope {
    fn from(plan: WorkoutPlan) -> Self {
        Self { ok: true, plan }
    }
}
