use crate::core::error::{HelperError, Result};
use crate::providers::base_client::HttpClient;
use crate::providers::{AiProvider, Message, Role};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

#[derive(Clone)]
pub struct AnthropicProvider {
    client: HttpClient,
    model: String,
}

impl AnthropicProvider {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        let mut extra_headers = HashMap::new();
        extra_headers.insert("anthropic-version".to_string(), ANTHROPIC_VERSION.to_string());
        Self {
            client: HttpClient::new(
                base_url,
                Some(("x-api-key".to_string(), api_key)),
                Some(extra_headers),
            ),
            model,
        }
    }

    fn build_request<'a>(&'a self, messages: &'a [Message]) -> AnthropicRequest<'a> {
        // The messages API takes the system prompt out of band.
        let system: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect();

        AnthropicRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: messages
                .iter()
                .filter(|m| m.role != Role::System)
                .map(|m| AnthropicMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            system: if system.is_empty() {
                None
            } else {
                Some(system.join("\n\n"))
            },
        }
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    async fn ask(&self, messages: &[Message]) -> Result<String> {
        let payload = self.build_request(messages);
        let response = self.client.post("messages", &payload).await?;
        let body = response.text().await?;
        let parsed: AnthropicResponse = serde_json::from_str(&body)?;

        let text: String = parsed
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .collect();

        if text.is_empty() {
            Err(HelperError::Api("Empty response from Anthropic".to_string()))
        } else {
            Ok(text)
        }
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Serialize)]
struct AnthropicMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_is_lifted_out_of_messages() {
        let provider = AnthropicProvider::new(
            "https://api.anthropic.com/v1".to_string(),
            "key".to_string(),
            "claude-3-5-haiku-latest".to_string(),
        );
        let messages = vec![Message::system("You sell apples."), Message::user("hi")];

        let json = serde_json::to_value(provider.build_request(&messages)).unwrap();
        assert_eq!(json["system"], "You sell apples.");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn no_system_field_without_system_messages() {
        let provider = AnthropicProvider::new(
            "https://api.anthropic.com/v1".to_string(),
            "key".to_string(),
            "claude-3-5-haiku-latest".to_string(),
        );
        let messages = vec![Message::user("hi")];

        let json = serde_json::to_value(provider.build_request(&messages)).unwrap();
        assert!(json.get("system").is_none());
    }
}
