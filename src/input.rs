use crate::commands::registry::CommandRegistry;
use ecommerce_helper::HelperError;

use console::style;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, EditMode, Editor, Helper};
use std::path::PathBuf;
use std::sync::Arc;

/// Completes `/command` names; plain messages get no completion.
pub struct ChatHelper {
    commands: Arc<CommandRegistry>,
    history_hinter: HistoryHinter,
}

impl ChatHelper {
    pub fn new(commands: Arc<CommandRegistry>) -> Self {
        Self {
            commands,
            history_hinter: HistoryHinter {},
        }
    }

    fn command_candidates(&self, typed: &str) -> Vec<Pair> {
        self.commands
            .get_command_names()
            .into_iter()
            .filter(|cmd| cmd.starts_with(typed))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd,
            })
            .collect()
    }
}

impl Helper for ChatHelper {}
impl Highlighter for ChatHelper {}
impl Validator for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match line.get(..pos).and_then(|typed| typed.strip_prefix('/')) {
            Some(typed) if !typed.contains(' ') => Ok((1, self.command_candidates(typed))),
            _ => Ok((pos, Vec::new())),
        }
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.history_hinter.hint(line, pos, ctx)
    }
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ecommerce_helper")
        .join("input_history.txt")
}

/// Creates a configured rustyline editor
pub fn create_editor(
    commands: Arc<CommandRegistry>,
) -> Result<Editor<ChatHelper, FileHistory>, HelperError> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut editor = Editor::with_config(config)
        .map_err(|e| HelperError::Input(format!("Failed to create line editor: {}", e)))?;
    editor.set_helper(Some(ChatHelper::new(commands)));

    // First run has no history file yet.
    let _ = editor.load_history(&history_path());

    Ok(editor)
}

/// Reads a line of input; `None` on Ctrl-C or Ctrl-D.
pub fn read_input(
    editor: &mut Editor<ChatHelper, FileHistory>,
) -> Result<Option<String>, HelperError> {
    let prompt = style("> ").bold().cyan().to_string();
    match editor.readline(&prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                editor
                    .add_history_entry(line.as_str())
                    .map_err(|e| HelperError::Input(format!("Failed to add history entry: {}", e)))?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(HelperError::Input(format!("Input error: {}", err))),
    }
}

pub fn save_history(editor: &mut Editor<ChatHelper, FileHistory>) -> Result<(), HelperError> {
    let path = history_path();
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    editor
        .save_history(&path)
        .map_err(|e| HelperError::Input(format!("Failed to save history: {}", e)))
}
