//! OpenRouter completion client
//!
//! Talks to any API implementing the OpenAI chat completions format; the site
//! uses OpenRouter with a Gemini model. One request, one reply: no streaming,
//! no retry, and no application-level timeout (the transport default applies).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::conversation::{Message, Role};

use super::{CompletionBackend, ProviderError};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl From<&Message> for ChatMessage {
    fn from(msg: &Message) -> Self {
        Self {
            role: match msg.role {
                Role::System => "system".to_string(),
                Role::User => "user".to_string(),
                Role::Assistant => "assistant".to_string(),
            },
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// Base URL for the API (e.g. https://openrouter.ai/api/v1)
    pub base_url: String,
    /// Bearer token from build-time configuration
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: String::new(),
            model: "google/gemini-2.0-flash-lite-001".to_string(),
        }
    }
}

pub struct OpenRouterBackend {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterBackend {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterBackend {
    async fn complete(&self, messages: &[Message]) -> Result<Message, ProviderError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: messages.iter().map(ChatMessage::from).collect(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(ProviderError::InvalidResponse(format!(
                    "API error: {}",
                    error_resp.error.message
                )));
            }
            return Err(ProviderError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse response: {e}"))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::InvalidResponse("no choices in response".to_string()))?;

        Ok(Message {
            role: Role::Assistant,
            content: choice.message.content.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_conversion_lowercases_roles() {
        let msg = Message {
            role: Role::User,
            content: "Hello".to_string(),
        };
        let chat_msg = ChatMessage::from(&msg);
        assert_eq!(chat_msg.role, "user");
        assert_eq!(chat_msg.content, "Hello");
    }

    #[test]
    fn request_body_carries_model_and_messages() {
        let request = ChatCompletionRequest {
            model: "google/gemini-2.0-flash-lite-001".to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "persona".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "hi".to_string(),
                },
            ],
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "google/gemini-2.0-flash-lite-001");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hi");
    }

    #[test]
    fn parses_first_choice_message() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Bonjour!"}}]}"#;
        let completion: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            completion.choices[0].message.content.as_deref(),
            Some("Bonjour!")
        );
    }

    #[test]
    fn empty_choices_is_a_malformed_body() {
        let body = r#"{"choices":[]}"#;
        let completion: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert!(completion.choices.is_empty());
    }
}
