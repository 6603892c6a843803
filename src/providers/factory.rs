use crate::config::{Provider, ProviderConfig};
use crate::core::error::{HelperError, Result};
use crate::providers::{
    AiProvider, anthropic::AnthropicProvider, openai_compatible::OpenAICompatibleProvider,
};
use std::collections::HashMap;
use std::env;

type ProviderCreator = Box<dyn Fn(&ProviderConfig) -> Result<Box<dyn AiProvider>> + Send + Sync>;

pub struct ProviderFactory {
    creators: HashMap<Provider, ProviderCreator>,
}

impl Default for ProviderFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_api_key(provider: Provider, config: &ProviderConfig) -> Result<String> {
    if let Some(key) = &config.api_key {
        return Ok(key.clone());
    }
    env::var(provider.api_key_env()).map_err(|_| {
        HelperError::Config(format!(
            "{} must be set from config or environment variable",
            provider.api_key_env()
        ))
    })
}

fn resolve(provider: Provider, config: &ProviderConfig) -> (String, String) {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| provider.default_base_url().to_string());
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| provider.default_model().to_string());
    (base_url, model)
}

impl ProviderFactory {
    pub fn new() -> Self {
        let mut creators: HashMap<Provider, ProviderCreator> = HashMap::new();

        for provider in [Provider::OpenAI, Provider::OpenRouter, Provider::DeepSeek] {
            creators.insert(
                provider,
                Box::new(move |config: &ProviderConfig| {
                    let api_key = resolve_api_key(provider, config)?;
                    let (base_url, model) = resolve(provider, config);
                    Ok(Box::new(OpenAICompatibleProvider::new(
                        base_url, api_key, model, None,
                    )) as Box<dyn AiProvider>)
                }),
            );
        }

        creators.insert(
            Provider::Anthropic,
            Box::new(|config: &ProviderConfig| {
                let api_key = resolve_api_key(Provider::Anthropic, config)?;
                let (base_url, model) = resolve(Provider::Anthropic, config);
                Ok(Box::new(AnthropicProvider::new(base_url, api_key, model)) as Box<dyn AiProvider>)
            }),
        );

        Self { creators }
    }

    pub fn create(
        &self,
        provider: &Provider,
        config: &ProviderConfig,
    ) -> Result<Box<dyn AiProvider>> {
        self.creators
            .get(provider)
            .ok_or_else(|| HelperError::Config(format!("Provider not found: {:?}", provider)))
            .and_then(|creator| creator(config))
    }
}
