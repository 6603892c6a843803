use crate::core::error::{HelperError, Result};
use crate::providers::base_client::HttpClient;
use crate::providers::{AiProvider, Message};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatCompletionMessage<'a>>,
}

#[derive(Serialize)]
struct ChatCompletionMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

/// Any backend speaking the OpenAI `chat/completions` dialect
/// (OpenAI itself, OpenRouter, DeepSeek, local gateways).
#[derive(Clone)]
pub struct OpenAICompatibleProvider {
    client: HttpClient,
    model: String,
}

impl OpenAICompatibleProvider {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Self {
        let auth_header = Some(("Authorization".to_string(), format!("Bearer {}", api_key)));

        Self {
            client: HttpClient::new(base_url, auth_header, extra_headers),
            model,
        }
    }

    fn build_request<'a>(&'a self, messages: &'a [Message]) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| ChatCompletionMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
        }
    }
}

fn parse_completion(body: &str) -> Result<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| HelperError::Api("No choices in API response".to_string()))?;

    Ok(choice.message.content.unwrap_or_default())
}

#[async_trait]
impl AiProvider for OpenAICompatibleProvider {
    async fn ask(&self, messages: &[Message]) -> Result<String> {
        let payload = self.build_request(messages);
        let response = self.client.post("chat/completions", &payload).await?;
        let body = response.text().await?;
        parse_completion(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
