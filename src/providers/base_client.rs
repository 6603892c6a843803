use crate::core::error::{HelperError, Result};
use reqwest::{Client, Response};
use serde::Serialize;
use std::collections::HashMap;

/// Thin reqwest wrapper shared by the AI providers and the HTTP data sources.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth_header: Option<(String, String)>,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    pub fn new(
        base_url: String,
        auth_header: Option<(String, String)>,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
            extra_headers: extra_headers.unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn decorate(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some((name, value)) = &self.auth_header {
            request = request.header(name, value);
        }
        for (key, value) in &self.extra_headers {
            request = request.header(key, value);
        }
        request
    }

    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");
        let response = self.decorate(request).json(payload).send().await?;
        Self::check_status(response).await
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let request = self.client.get(&url).query(query);
        let response = self.decorate(request).send().await?;
        Self::check_status(response).await
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(HelperError::Api(format!(
            "Request failed with status {}: {}",
            status, body
        )))
    }
}
