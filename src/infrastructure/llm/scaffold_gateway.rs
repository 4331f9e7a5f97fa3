use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{GenerationRequest, ModelGateway, ModelGatewayError};
use crate::domain::ResponseSchema;

/// Offline gateway that answers every request with a fixed, schema-valid
/// verdict. Used when the service runs in scaffold mode.
pub struct ScaffoldModelGateway {
    delay: Duration,
}

impl ScaffoldModelGateway {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl ModelGateway for ScaffoldModelGateway {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ModelGatewayError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        tracing::debug!(
            audio_bytes = request.audio.len(),
            schema = ?request.response_schema,
            "Scaffold gateway answering"
        );

        let reply = match request.response_schema {
            ResponseSchema::VoiceDetection => json!({
                "language": "English",
                "classification": "HUMAN",
                "confidenceScore": 0.5,
                "explanation": "Scaffold mode: no model was consulted.",
            }),
            ResponseSchema::UploadAnalysis => json!({
                "detectedLanguage": "English",
                "classification": "Uncertain",
                "confidence": 50.0,
                "explanation": "Scaffold mode: no model was consulted.",
                "artifacts": [],
            }),
        };

        Ok(reply.to_string())
    }
}
