//! Google Gemini adapter
//!
//! Calls `POST {base}/v1beta/models/{model}:generateContent` with a
//! response schema so the model answers with JSON only.

mod types;

pub use types::to_gemini_schema;

use super::http::{build_client, join_url, map_status_error, map_transport_error};
use async_trait::async_trait;
use campus_application::ports::text_generator::{GenerationError, TextGenerator};
use campus_domain::{Model, OutputSchema, extract_json_payload};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// [`TextGenerator`] backed by the Gemini API
pub struct GeminiTextGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: Model,
    temperature: Option<f32>,
}

impl GeminiTextGenerator {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: Model,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::Unauthorized(
                "Gemini API key is empty".to_string(),
            ));
        }

        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.to_string(),
            api_key,
            model,
            temperature: None,
        })
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    fn endpoint(&self) -> String {
        join_url(
            &self.base_url,
            &format!("v1beta/models/{}:generateContent", self.model),
        )
    }

    fn request_body(&self, prompt: &str, schema: &OutputSchema) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: to_gemini_schema(schema.as_json()),
                temperature: self.temperature,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<Option<Value>, GenerationError> {
        let url = self.endpoint();
        debug!(url = %url, schema = schema.name(), "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.request_body(prompt, schema))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::RequestFailed(format!("Invalid Gemini response: {}", e)))?;

        let Some(text) = body.text() else {
            let reason = body
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            warn!(reason = %reason, "Gemini returned no text");
            return Ok(None);
        };

        let payload = extract_json_payload(&text);
        if payload.is_none() {
            warn!("Gemini text was not valid JSON");
        }
        Ok(payload)
    }
}
