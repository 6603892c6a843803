use super::ChatState;
use super::handler::CommandHandler;
use ecommerce_helper::HelperError;
use std::collections::HashMap;
use std::sync::Arc;

pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<C: CommandHandler + 'static>(&mut self, name: &str, command: C) {
        self.handlers.insert(name.to_string(), Arc::new(command));
    }

    pub fn execute(
        &self,
        name: &str,
        args: &[&str],
        state: &mut ChatState,
    ) -> Result<Option<String>, HelperError> {
        self.handlers
            .get(name)
            .ok_or_else(|| HelperError::Input(format!("Unknown command: {}", name)))
            .and_then(|handler| handler.execute(state, args))
    }

    /// Splits `/name arg...` and runs it. `None` if `line` is not a command.
    pub fn execute_line(
        &self,
        line: &str,
        state: &mut ChatState,
    ) -> Option<Result<Option<String>, HelperError>> {
        let rest = line.strip_prefix('/')?;
        let mut parts = rest.split_whitespace();
        let name = parts.next()?;
        let args: Vec<&str> = parts.collect();
        Some(self.execute(name, &args, state))
    }

    pub fn get_command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }
}
