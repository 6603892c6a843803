use crate::providers::Message;
use std::collections::HashMap;

/// Conversation key, as handed out by the chat frontend.
pub type ChatId = i64;

/// Per-chat message log. Append-only from the outside and kept in memory
/// for the life of the process.
#[derive(Debug, Default)]
pub struct ConversationHistory {
    chats: HashMap<ChatId, Vec<Message>>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, chat_id: ChatId, message: Message) {
        self.chats.entry(chat_id).or_default().push(message);
    }

    /// Messages of `chat_id` in append order; empty for unknown chats.
    pub fn messages(&self, chat_id: ChatId) -> &[Message] {
        self.chats.get(&chat_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn chat_ids(&self) -> impl Iterator<Item = ChatId> + '_ {
        self.chats.keys().copied()
    }

    /// Undoes the latest append to `chat_id`, dropping the chat entry if it
    /// becomes empty.
    pub(crate) fn rollback_last(&mut self, chat_id: ChatId) -> Option<Message> {
        let messages = self.chats.get_mut(&chat_id)?;
        let removed = messages.pop();
        if messages.is_empty() {
            self.chats.remove(&chat_id);
        }
        removed
    }
}
