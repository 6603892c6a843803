use crate::core::error::{HelperError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROMPT_PATH: &str = "prompts/system_prompt.txt";

/// System prompt stored as a plain-text file.
///
/// The file is read on every [`load`](SystemPrompt::load) so edits take effect
/// without restarting the process.
#[derive(Debug, Clone)]
pub struct SystemPrompt {
    path: PathBuf,
}

impl Default for SystemPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_PATH)
    }
}

impl SystemPrompt {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim().to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(HelperError::PromptNotFound(self.path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
