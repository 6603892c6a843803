use clap::Parser;
use std::sync::Arc;

mod app;
mod cli;
mod commands;
mod display;
mod input;

use crate::app::Application;
use crate::cli::Args;
use crate::commands::ChatState;
use ecommerce_helper::config::{Config, Provider};
use ecommerce_helper::datasources::HttpDataSource;
use ecommerce_helper::providers::factory::ProviderFactory;
use ecommerce_helper::utils::telemetry::init_tracing;
use ecommerce_helper::{DataSources, Dispatcher, HelperError, SystemPrompt};

fn build_dispatcher(args: &Args, config: &Config) -> Result<Dispatcher, HelperError> {
    let provider = match &args.provider {
        Some(name) => Provider::parse(name)
            .ok_or_else(|| HelperError::Config(format!("Unsupported provider: {}", name)))?,
        None => config.active_provider.unwrap_or_default(),
    };

    let mut provider_config = config.provider_config(provider);
    if let Some(model) = &args.model {
        provider_config.model = Some(model.clone());
    }
    let ai = ProviderFactory::new().create(&provider, &provider_config)?;

    let sources = DataSources::new(
        Arc::new(HttpDataSource::new("sales", config.sales_source()?)),
        Arc::new(HttpDataSource::new("stock", config.stock_source()?)),
    );

    let prompt_path = args.prompt.clone().unwrap_or_else(|| config.prompt_path());
    tracing::debug!(
        provider = ?provider,
        model = ai.model(),
        prompt = %prompt_path.display(),
        "dispatcher configured"
    );

    Ok(Dispatcher::new(sources, ai, SystemPrompt::new(prompt_path)))
}

async fn run(args: Args) -> Result<(), HelperError> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let dispatcher = build_dispatcher(&args, &config)?;
    let state = ChatState::new(dispatcher, args.chat_id);
    Application::new(args, state).run().await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = init_tracing(args.verbose) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    if let Err(e) = run(args).await {
        display::display_error(&e);
        std::process::exit(1);
    }
}
