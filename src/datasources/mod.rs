//! Store backends that answer sales and stock questions directly.

use crate::core::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub mod http;

pub use http::HttpDataSource;

#[async_trait]
pub trait DataSource: Send + Sync {
    fn name(&self) -> &str;

    /// Number of sales (or a summary of them) over the last `since_days` days.
    async fn get_sales(&self, since_days: u32) -> Result<Value>;

    /// Current inventory, typically an object keyed by product.
    async fn get_stock(&self) -> Result<Value>;
}

/// The backend used for each direct intent.
///
/// Sales and stock usually live on different platforms (a marketplace for
/// orders, the storefront for inventory), so each intent has its own source.
#[derive(Clone)]
pub struct DataSources {
    pub sales: Arc<dyn DataSource>,
    pub stock: Arc<dyn DataSource>,
}

impl DataSources {
    pub fn new(sales: Arc<dyn DataSource>, stock: Arc<dyn DataSource>) -> Self {
        Self { sales, stock }
    }
}

/// Text form of a fetched value as it appears in a reply.
///
/// JSON strings are shown without quotes; everything else uses compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_values_for_interpolation() {
        assert_eq!(render_value(&json!(7)), "7");
        assert_eq!(render_value(&json!("12 orders")), "12 orders");
        assert_eq!(render_value(&json!({"apple": 10})), r#"{"apple":10}"#);
        assert_eq!(render_value(&Value::Null), "null");
    }
}
