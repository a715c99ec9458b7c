use super::traits::{ModelClient, ModelRequest};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Generative Language API backend
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

impl GeminiClient {
    /// Build a client from configuration. Fails when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .context("GEMINI_API_KEY is not set")?;

        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("rentify/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        info!("Using model {} at {}", config.model, config.api_base);

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, self.model)
    }

    fn body(request: ModelRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(request.prompt),
                }],
            }],
            generation_config: json!({
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema,
            }),
        }
    }
}

/// Pull the JSON answer out of a generateContent response
fn extract_json(response: GenerateContentResponse) -> Result<Value> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .context("Model returned no candidates")?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        anyhow::bail!(
            "Model returned an empty answer (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        );
    }

    serde_json::from_str(text.trim()).context("Model answer is not valid JSON")
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: ModelRequest) -> Result<Value> {
        let url = self.endpoint();
        debug!("Posting {} prompt bytes to {}", request.prompt.len(), url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::body(request))
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to reach the model API")?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            warn!("Model API returned status: {}", status);
            anyhow::bail!("Model API returned {}: {}", status, detail);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read model response body")?;

        extract_json(parsed)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_an_error() {
        let config = Config::default();
        assert!(GeminiClient::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn unreachable_api_error_does_not_carry_the_key() {
        let config = Config {
            api_key: Some("SECRET-KEY-123".into()),
            api_base: "http://127.0.0.1:1".into(),
            ..Config::default()
        };
        let client = GeminiClient::from_config(&config).unwrap();

        let err = client
            .generate(ModelRequest {
                prompt: "hello".into(),
                response_schema: json!({"type": "OBJECT"}),
            })
            .await
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to reach the model API"));
        assert!(!message.contains("SECRET-KEY-123"));
    }

    #[test]
    fn request_body_asks_for_json() {
        let body = GeminiClient::body(ModelRequest {
            prompt: "hello".into(),
            response_schema: json!({"type": "OBJECT"}),
        });
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn extracts_json_from_first_candidate() {
        let raw = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"titles\": [\"A\"]}" }] },
                "finishReason": "STOP"
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(extract_json(response).unwrap(), json!({"titles": ["A"]}));
    }

    #[test]
    fn empty_or_garbled_answers_fail() {
        let empty: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        let err = extract_json(empty).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));

        let garbled: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Sure! Here are titles" }] } }]
        }))
        .unwrap();
        assert!(extract_json(garbled).is_err());

        let none: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(extract_json(none).is_err());
    }
}
