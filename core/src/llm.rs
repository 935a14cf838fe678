use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs,
};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{PlanError, Result};
use crate::prompt::SYSTEM_INSTRUCTION;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const TEMPERATURE: f32 = 0.8;

// Stand-in when the envelope has no message content.
const EMPTY_CONTENT: &str = "{}";

/// Talks to an OpenAI-compatible chat completion endpoint.
///
/// Requests are built with the `async-openai` types but sent with plain `reqwest`
/// so a failed call hands back the provider's raw body. No retries.
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl CompletionClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn build_request(&self, prompt: &str) -> Result<CreateChatCompletionRequest> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_INSTRUCTION)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(TEMPERATURE)
            .messages(messages)
            .build()?;
        Ok(request)
    }

    /// Send one prompt and return the first choice's message content.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt)?;
        let url = format!("{}/chat/completions", self.api_base);
        debug!(model = %self.model, %url, "Sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Completion API returned an error");
            return Err(PlanError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Value = serde_json::from_str(&body).map_err(PlanError::MalformedEnvelope)?;
        Ok(first_choice_content(&envelope))
    }
}

fn first_choice_content(envelope: &Value) -> String {
    envelope["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or(EMPTY_CONTENT)
        .to_string()
}
