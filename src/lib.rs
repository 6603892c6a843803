//! Chat helper for small online stores.
//!
//! A [`Dispatcher`] answers sales and stock questions straight from the
//! store's data sources and hands every other message, together with the
//! chat's history and a system prompt, to an AI provider.

pub mod config;
pub mod core;
pub mod datasources;
pub mod engine;
pub mod prompt;
pub mod providers;
pub mod utils;

pub use crate::core::error::{HelperError, Result};
pub use crate::datasources::{DataSource, DataSources};
pub use crate::engine::{ChatId, Dispatcher, Intent};
pub use crate::prompt::SystemPrompt;
pub use crate::providers::{AiProvider, Message, Role};
