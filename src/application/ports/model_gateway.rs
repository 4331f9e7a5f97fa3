use async_trait::async_trait;
use crate::domain::{AudioClip, ResponseSchema};

/// One multimodal generation call: audio, instructions and the JSON schema
/// the reply must follow.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub audio: AudioClip,
    pub prompt: String,
    pub response_schema: ResponseSchema,
}

#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Returns the model's raw reply text, never empty.
    async fn generate(&self, request: GenerationRequest) -> Result<String, ModelGatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelGatewayError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("Empty response from AI engine")]
    EmptyResponse,
}
