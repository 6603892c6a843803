use crate::config::DataSourceConfig;
use crate::core::error::{HelperError, Result};
use crate::datasources::DataSource;
use crate::providers::base_client::HttpClient;
use async_trait::async_trait;
use serde_json::Value;

/// Data source backed by a JSON HTTP API exposing `GET /sales` and `GET /stock`.
#[derive(Clone)]
pub struct HttpDataSource {
    name: String,
    client: HttpClient,
}

impl HttpDataSource {
    pub fn new(name: impl Into<String>, config: &DataSourceConfig) -> Self {
        let auth_header = config
            .api_key
            .as_ref()
            .map(|key| ("Authorization".to_string(), format!("Bearer {}", key)));

        Self {
            name: name.into(),
            client: HttpClient::new(config.base_url.clone(), auth_header, None),
        }
    }

    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self.client.get(path, query).await.map_err(|e| {
            HelperError::DataSource(format!("{} {} failed: {}", self.name, path, e))
        })?;
        let body = response.text().await.map_err(|e| {
            HelperError::DataSource(format!("{} {} body unreadable: {}", self.name, path, e))
        })?;
        serde_json::from_str(&body).map_err(|e| {
            HelperError::DataSource(format!("{} returned invalid JSON: {}", self.name, e))
        })
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_sales(&self, since_days: u32) -> Result<Value> {
        self.fetch("sales", &[("since_days", since_days.to_string())])
            .await
    }

    async fn get_stock(&self) -> Result<Value> {
        self.fetch("stock", &[]).await
    }
}
