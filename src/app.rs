use crate::cli::Args;
use crate::commands::{ChatState, create_command_registry};
use crate::display;
use crate::input;
use ecommerce_helper::HelperError;
use is_terminal::IsTerminal;
use std::io::{self, BufRead};

pub struct Application {
    args: Args,
    state: ChatState,
}

impl Application {
    pub fn new(args: Args, state: ChatState) -> Self {
        Self { args, state }
    }

    pub async fn run(&mut self) -> Result<(), HelperError> {
        if let Some(query) = self.args.query.clone() {
            let response = self
                .state
                .dispatcher
                .handle_message(self.state.chat_id, &query)
                .await?;
            display::print_plain(&response);
        } else if !io::stdin().is_terminal() {
            self.handle_piped_input().await?;
        } else {
            self.handle_continuous_chat_mode().await?;
        }

        Ok(())
    }

    /// Every non-empty stdin line is one turn of the same chat.
    async fn handle_piped_input(&mut self) -> Result<(), HelperError> {
        let lines: Vec<String> = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .map_err(|e| HelperError::Input(format!("Failed to read from stdin: {}", e)))?;

        for line in lines.iter().filter(|l| !l.trim().is_empty()) {
            let response = self
                .state
                .dispatcher
                .handle_message(self.state.chat_id, line)
                .await?;
            display::print_plain(&response);
        }

        Ok(())
    }

    async fn handle_continuous_chat_mode(&mut self) -> Result<(), HelperError> {
        let commands = create_command_registry();
        let mut editor = input::create_editor(commands.clone())?;

        display::display_info(&format!(
            "Chatting as chat {} with model {}. Type '/help' for commands, Ctrl+D or /quit to exit.",
            self.state.chat_id,
            self.state.dispatcher.model()
        ));

        while self.state.should_continue {
            let line = match input::read_input(&mut editor)? {
                Some(line) => line.trim().to_string(),
                None => break,
            };

            if line.is_empty() {
                continue;
            }

            if let Some(result) = commands.execute_line(&line, &mut self.state) {
                match result {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) => display::display_error(&e),
                }
                continue;
            }

            // A failed turn is reported and the session keeps going.
            match self
                .state
                .dispatcher
                .handle_message(self.state.chat_id, &line)
                .await
            {
                Ok(response) => display::display_response(&response),
                Err(e) => display::display_error(&e),
            }
        }

        input::save_history(&mut editor)?;
        Ok(())
    }
}
