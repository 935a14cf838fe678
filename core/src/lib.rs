//! Workout plan generation: profile validation, prompt rendering and the
//! chat-completion round trip. The HTTP surface lives in the gateway crate.

pub mod error;
pub mod llm;
pub mod plan;
pub mod planner;
pub mod prompt;

pub use error::PlanError;
pub use llm::CompletionClient;
pub use plan::{PlanEnvelope, TrainingProfile, WorkoutPlan, WorkoutPlanRequest};
pub use planner::Planner;
