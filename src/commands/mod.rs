pub mod handler;
pub mod registry;

use ecommerce_helper::{ChatId, Dispatcher};
use handler::{ChatCommand, HelpCommand, HistoryCommand, QuitCommand};
use registry::CommandRegistry;
use std::sync::Arc;

/// Mutable state of an interactive session.
pub struct ChatState {
    pub dispatcher: Dispatcher,
    pub chat_id: ChatId,
    pub should_continue: bool,
}

impl ChatState {
    pub fn new(dispatcher: Dispatcher, chat_id: ChatId) -> Self {
        Self {
            dispatcher,
            chat_id,
            should_continue: true,
        }
    }
}

pub fn create_command_registry() -> Arc<CommandRegistry> {
    let mut registry = CommandRegistry::new();

    registry.register("quit", QuitCommand);
    registry.register("help", HelpCommand);
    registry.register("history", HistoryCommand);
    registry.register("chat", ChatCommand);

    Arc::new(registry)
}
