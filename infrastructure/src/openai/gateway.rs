//! OpenAI adapter for the rationale gateway port.
//!
//! Sends the system/user message pair to the chat-completions endpoint
//! and returns the first choice's content. Credentials come from the
//! `OPENAI_API_KEY` environment variable.

use async_trait::async_trait;
use quizkey_application::{GatewayError, GeneratorParams, RationaleGateway};
use quizkey_domain::ConsolidationPrompt;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key.
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// [`RationaleGateway`] adapter backed by the OpenAI chat-completions API.
pub struct OpenAiRationaleGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f64,
    base_url: String,
}

impl OpenAiRationaleGateway {
    /// Build a gateway from the environment and generator parameters.
    pub fn from_env(params: &GeneratorParams) -> Result<Self, GatewayError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            GatewayError::MissingCredentials(format!("{} is not set", API_KEY_VAR))
        })?;
        Ok(Self::new(api_key, params))
    }

    pub fn new(api_key: impl Into<String>, params: &GeneratorParams) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: params.model.clone(),
            temperature: params.temperature,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the gateway at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl RationaleGateway for OpenAiRationaleGateway {
    async fn consolidate(&self, prompt: &ConsolidationPrompt) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt.system(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.user(),
                },
            ],
            temperature: self.temperature,
        };

        debug!("Requesting consolidated rationale from model {}", self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::InvalidResponse("No choices in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: "gpt-4-turbo",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "persona",
                },
                ChatMessage {
                    role: "user",
                    content: "question",
                },
            ],
            temperature: 0.5,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4-turbo");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "question");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "A rationale."}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("A rationale.")
        );
    }

    #[test]
    fn test_response_without_choices() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
