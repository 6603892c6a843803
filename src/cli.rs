use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Message to send; omit to read lines from stdin or start a chat session
    pub query: Option<String>,

    /// Conversation to attach the messages to
    #[arg(short, long, default_value_t = 0)]
    pub chat_id: i64,

    /// AI provider to use [possible values: openai, openrouter, deepseek, anthropic]
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Model to use (provider-specific)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the system prompt file
    #[arg(long)]
    pub prompt: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
