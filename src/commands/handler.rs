use super::ChatState;
use crate::display;
use ecommerce_helper::HelperError;

use console::style;

pub trait CommandHandler {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, HelperError>;
    fn help(&self) -> &'static str;
}

pub struct QuitCommand;
pub struct HelpCommand;
pub struct HistoryCommand;
pub struct ChatCommand;

impl CommandHandler for QuitCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, HelperError> {
        state.should_continue = false;
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/quit - Exit the chat session"
    }
}

impl CommandHandler for HelpCommand {
    fn execute(
        &self,
        _state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, HelperError> {
        let title = style("Available Commands").bold().underlined();
        let help_text = [
            title.to_string(),
            QuitCommand.help().to_string(),
            HelpCommand.help().to_string(),
            HistoryCommand.help().to_string(),
            ChatCommand.help().to_string(),
        ]
        .join("\n");

        Ok(Some(help_text))
    }

    fn help(&self) -> &'static str {
        "/help - Show available commands"
    }
}

impl CommandHandler for HistoryCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, HelperError> {
        let messages = state.dispatcher.history(state.chat_id);
        if messages.is_empty() {
            return Ok(Some(format!("Chat {} has no messages yet.", state.chat_id)));
        }
        Ok(Some(display::format_history(messages)))
    }

    fn help(&self) -> &'static str {
        "/history - Show the messages of the current chat"
    }
}

impl CommandHandler for ChatCommand {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, HelperError> {
        let Some(raw) = args.first() else {
            let mut known: Vec<i64> = state.dispatcher.chat_ids().collect();
            known.sort_unstable();
            let known = known
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Ok(Some(format!(
                "Current chat: {} (known: {})",
                state.chat_id,
                if known.is_empty() { "none" } else { known.as_str() }
            )));
        };

        let chat_id = raw
            .parse()
            .map_err(|_| HelperError::Input(format!("Invalid chat id: {}", raw)))?;
        state.chat_id = chat_id;
        Ok(Some(format!("Switched to chat {}", chat_id)))
    }

    fn help(&self) -> &'static str {
        "/chat [id] - Show or switch the current chat"
    }
}
