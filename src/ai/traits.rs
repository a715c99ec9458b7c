use super::types::SmartSearchOutput;
use crate::error::Result as RentifyResult;
use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A single structured-output request to a generative model
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub prompt: String,
    /// JSON schema the response must follow
    pub response_schema: Value,
}

/// Common trait for generative model backends.
/// Lets the prompt adapters run against Gemini or an in-process fake.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send the prompt and return the model's JSON answer
    async fn generate(&self, request: ModelRequest) -> Result<Value>;

    /// Model identifier, for logging
    fn model_name(&self) -> &str;
}

/// Picks which listings answer a free-text query
#[async_trait]
pub trait SmartMatcher: Send + Sync {
    async fn find_matches(&self, query: &str, properties: &[Property]) -> RentifyResult<SmartSearchOutput>;

    fn matcher_name(&self) -> &'static str;
}
