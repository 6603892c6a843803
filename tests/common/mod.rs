#![allow(dead_code)]

use async_trait::async_trait;
use ecommerce_helper::{
    AiProvider, DataSource, DataSources, Dispatcher, HelperError, Message, Result, SystemPrompt,
};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const PROMPT_TEXT: &str = "System: You are a test assistant.";

/// Data source returning a fixed value (or error) and recording each call.
pub struct StubDataSource {
    value: Value,
    fail: bool,
    sales_calls: Mutex<Vec<u32>>,
    stock_calls: Mutex<usize>,
}

impl StubDataSource {
    pub fn new(value: Value) -> Arc<Self> {
        Arc::new(Self {
            value,
            fail: false,
            sales_calls: Mutex::new(Vec::new()),
            stock_calls: Mutex::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            value: Value::Null,
            fail: true,
            sales_calls: Mutex::new(Vec::new()),
            stock_calls: Mutex::new(0),
        })
    }

    pub fn sales_calls(&self) -> Vec<u32> {
        self.sales_calls.lock().unwrap().clone()
    }

    pub fn stock_calls(&self) -> usize {
        *self.stock_calls.lock().unwrap()
    }

    fn answer(&self) -> Result<Value> {
        if self.fail {
            Err(HelperError::DataSource("backend unavailable".to_string()))
        } else {
            Ok(self.value.clone())
        }
    }
}

#[async_trait]
impl DataSource for StubDataSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn get_sales(&self, since_days: u32) -> Result<Value> {
        self.sales_calls.lock().unwrap().push(since_days);
        self.answer()
    }

    async fn get_stock(&self) -> Result<Value> {
        *self.stock_calls.lock().unwrap() += 1;
        self.answer()
    }
}

/// AI provider that answers with a fixed reply and keeps every payload.
#[derive(Clone)]
pub struct RecordingAi {
    answer: Option<String>,
    calls: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl RecordingAi {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for RecordingAi {
    async fn ask(&self, messages: &[Message]) -> Result<String> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.answer
            .clone()
            .ok_or_else(|| HelperError::Api("model overloaded".to_string()))
    }

    fn model(&self) -> &str {
        "recording"
    }
}

pub fn write_prompt(dir: &Path) -> SystemPrompt {
    let path = dir.join("system_prompt.txt");
    std::fs::write(&path, format!("  {}\n", PROMPT_TEXT)).unwrap();
    SystemPrompt::new(path)
}

pub fn dispatcher(
    sales: Arc<StubDataSource>,
    stock: Arc<StubDataSource>,
    ai: RecordingAi,
    prompt: SystemPrompt,
) -> Dispatcher {
    Dispatcher::new(DataSources::new(sales, stock), Box::new(ai), prompt)
}
