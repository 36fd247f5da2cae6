//! Ollama adapter
//!
//! Calls a local Ollama server's `POST /api/generate` with `stream: false`
//! and the output schema as `format`, which constrains the reply to JSON.

use super::http::{build_client, join_url, map_status_error, map_transport_error};
use async_trait::async_trait;
use campus_application::ports::text_generator::{GenerationError, TextGenerator};
use campus_domain::{Model, OutputSchema, extract_json_payload};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    format: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: String,
}

/// [`TextGenerator`] backed by a local Ollama server
pub struct OllamaTextGenerator {
    client: reqwest::Client,
    base_url: String,
    model: Model,
    temperature: Option<f32>,
}

impl OllamaTextGenerator {
    pub fn new(base_url: &str, model: Model, timeout: Duration) -> Result<Self, GenerationError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.to_string(),
            model,
            temperature: None,
        })
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl TextGenerator for OllamaTextGenerator {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<Option<Value>, GenerationError> {
        let url = join_url(&self.base_url, "api/generate");
        let request = OllamaRequest {
            model: self.model.as_str(),
            prompt,
            stream: false,
            format: schema.as_json(),
            options: self.temperature.map(|temperature| OllamaOptions { temperature }),
        };
        debug!(url = %url, model = %self.model, "Sending Ollama request");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::RequestFailed(format!("Invalid Ollama response: {}", e)))?;

        let payload = extract_json_payload(&body.response);
        if payload.is_none() {
            warn!(model = %self.model, "Ollama response was not valid JSON");
        }
        Ok(payload)
    }
}
