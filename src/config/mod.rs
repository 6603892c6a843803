use crate::core::error::{HelperError, Result};
use crate::prompt::DEFAULT_PROMPT_PATH;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAI,
    OpenRouter,
    DeepSeek,
    Anthropic,
}

impl Provider {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Some(Provider::OpenAI),
            "openrouter" => Some(Provider::OpenRouter),
            "deepseek" => Some(Provider::DeepSeek),
            "anthropic" => Some(Provider::Anthropic),
            _ => None,
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::OpenAI => "https://api.openai.com/v1",
            Provider::OpenRouter => "https://openrouter.ai/api/v1",
            Provider::DeepSeek => "https://api.deepseek.com/v1",
            Provider::Anthropic => "https://api.anthropic.com/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAI => "gpt-4.1-mini",
            Provider::OpenRouter => "google/gemini-2.0-flash-001",
            Provider::DeepSeek => "deepseek-chat",
            Provider::Anthropic => "claude-3-5-haiku-latest",
        }
    }

    /// Environment variable consulted when the config file carries no key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OPENAI_API_KEY",
            Provider::OpenRouter => "OPENROUTER_API_KEY",
            Provider::DeepSeek => "DEEPSEEK_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Endpoint of one HTTP data backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DataSourcesConfig {
    pub sales: Option<DataSourceConfig>,
    pub stock: Option<DataSourceConfig>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    pub active_provider: Option<Provider>,
    #[serde(default)]
    pub providers: HashMap<Provider, ProviderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_path: Option<PathBuf>,
    #[serde(default)]
    pub datasources: DataSourcesConfig,
}

impl Config {
    fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ecommerce_helper")
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Loads the config at `path`, writing a default file first if none exists.
    pub fn load_from(path: &Path) -> Result<Config> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config = serde_yml::from_str::<Config>(&contents)
                .map_err(|e| HelperError::Config(format!("Parse {}: {}", path.display(), e)))?;
            return Ok(config);
        }

        let config = Config::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Could not write default config to {}: {}", path.display(), e);
        }
        Ok(config)
    }

    pub fn load() -> Result<Config> {
        Self::load_from(&Self::default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yml::to_string(self)?;
        fs::write(path, yaml_content)?;
        Ok(())
    }

    pub fn prompt_path(&self) -> PathBuf {
        self.prompt_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPT_PATH))
    }

    pub fn provider_config(&self, provider: Provider) -> ProviderConfig {
        self.providers.get(&provider).cloned().unwrap_or_default()
    }

    pub fn sales_source(&self) -> Result<&DataSourceConfig> {
        self.datasources
            .sales
            .as_ref()
            .ok_or_else(|| HelperError::Config("No sales data source configured".to_string()))
    }

    pub fn stock_source(&self) -> Result<&DataSourceConfig> {
        self.datasources
            .stock
            .as_ref()
            .ok_or_else(|| HelperError::Config("No stock data source configured".to_string()))
    }
}
