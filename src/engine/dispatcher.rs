use crate::core::error::Result;
use crate::datasources::{DataSources, render_value};
use crate::engine::history::{ChatId, ConversationHistory};
use crate::engine::intent::{Intent, SALES_WINDOW_DAYS};
use crate::prompt::SystemPrompt;
use crate::providers::{AiProvider, Message};
use serde_json::Value;

/// Routes each chat message to a direct data answer or to the AI provider,
/// keeping the conversation history of every chat it has seen.
pub struct Dispatcher {
    history: ConversationHistory,
    sources: DataSources,
    ai: Box<dyn AiProvider>,
    prompt: SystemPrompt,
}

impl Dispatcher {
    pub fn new(sources: DataSources, ai: Box<dyn AiProvider>, prompt: SystemPrompt) -> Self {
        Self {
            history: ConversationHistory::new(),
            sources,
            ai,
            prompt,
        }
    }

    /// Handles one user turn and returns the reply.
    ///
    /// On success the chat history grows by exactly two messages (the user
    /// text, then the reply). On failure the history is left as it was and
    /// the collaborator's error is returned unchanged.
    pub async fn handle_message(&mut self, chat_id: ChatId, text: &str) -> Result<String> {
        self.history.append(chat_id, Message::user(text));

        match self.respond(chat_id, text).await {
            Ok(response) => {
                self.history
                    .append(chat_id, Message::assistant(response.clone()));
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(chat_id, error = %e, "turn failed, discarding user message");
                self.history.rollback_last(chat_id);
                Err(e)
            }
        }
    }

    pub fn history(&self, chat_id: ChatId) -> &[Message] {
        self.history.messages(chat_id)
    }

    pub fn chat_ids(&self) -> impl Iterator<Item = ChatId> + '_ {
        self.history.chat_ids()
    }

    pub fn model(&self) -> &str {
        self.ai.model()
    }

    async fn respond(&self, chat_id: ChatId, text: &str) -> Result<String> {
        let intent = Intent::detect(text);
        tracing::debug!(chat_id, intent = intent.as_str(), "classified message");

        if let Some(data) = self.fetch(intent).await? {
            tracing::info!(
                chat_id,
                intent = intent.as_str(),
                source = self.source_name(intent),
                "answering from data source"
            );
            return Ok(format_direct(intent, &data));
        }

        let payload = self.build_payload(chat_id)?;
        tracing::info!(
            chat_id,
            intent = intent.as_str(),
            messages = payload.len(),
            model = self.ai.model(),
            "falling back to AI provider"
        );
        self.ai.ask(&payload).await
    }

    fn source_name(&self, intent: Intent) -> &str {
        match intent {
            Intent::Sales => self.sources.sales.name(),
            Intent::Stock => self.sources.stock.name(),
            Intent::Default => "none",
        }
    }

    /// Data backing a direct answer, if the intent has one. A null value from
    /// the backend counts as no data.
    async fn fetch(&self, intent: Intent) -> Result<Option<Value>> {
        let value = match intent {
            Intent::Sales => self.sources.sales.get_sales(SALES_WINDOW_DAYS).await?,
            Intent::Stock => self.sources.stock.get_stock().await?,
            Intent::Default => return Ok(None),
        };

        Ok(match value {
            Value::Null => None,
            data => Some(data),
        })
    }

    fn build_payload(&self, chat_id: ChatId) -> Result<Vec<Message>> {
        let system_prompt = self.prompt.load()?;
        let history = self.history.messages(chat_id);

        let mut payload = Vec::with_capacity(history.len() + 1);
        payload.push(Message::system(system_prompt));
        payload.extend_from_slice(history);
        Ok(payload)
    }
}

fn format_direct(intent: Intent, data: &Value) -> String {
    let data = render_value(data);
    match intent {
        Intent::Sales => format!("You had {} sales in the last {} days.", data, SALES_WINDOW_DAYS),
        Intent::Stock => format!("Current stock:\n{}", data),
        Intent::Default => data,
    }
}
