use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{GenerationRequest, ModelGateway, ModelGatewayError};
use crate::infrastructure::observability::sanitize_prompt;

pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";

/// [`ModelGateway`] backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model,
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 2],
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ModelGatewayError> {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: &request.audio.mime_type,
                            data: general_purpose::STANDARD.encode(&request.audio.data),
                        },
                    },
                    Part::Text {
                        text: &request.prompt,
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: request.response_schema.to_json(),
            },
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            audio_bytes = request.audio.len(),
            prompt = %sanitize_prompt(&request.prompt),
            "Sending audio to Gemini"
        );

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            builder = builder.header(GEMINI_API_KEY_HEADER, api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ModelGatewayError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ModelGatewayError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelGatewayError::ApiRequestFailed(format!("parse response: {}", e)))?;

        let text = result.into_text().ok_or(ModelGatewayError::EmptyResponse)?;

        tracing::info!(chars = text.len(), "Gemini generation completed");

        Ok(text)
    }
}
