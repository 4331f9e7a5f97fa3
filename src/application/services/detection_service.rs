use std::sync::Arc;

use crate::application::ports::{GenerationRequest, ModelGateway, ModelGatewayError};
use crate::domain::{AudioClip, Language, ResponseSchema, UploadVerdict, VoiceVerdict};

use super::prompt_builder::{upload_analysis_prompt, voice_detection_prompt};
use super::response_mapper::{MappedVerdict, ResponseMappingError, map_verdict};

/// Runs one clip through prompt building, the model gateway and response
/// mapping. Holds no per-request state.
pub struct DetectionService<G>
where
    G: ModelGateway,
{
    gateway: Arc<G>,
}

impl<G> DetectionService<G>
where
    G: ModelGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    #[tracing::instrument(skip(self, clip), fields(bytes = clip.len(), mime = %clip.mime_type))]
    pub async fn detect_voice(
        &self,
        clip: AudioClip,
        language: Language,
    ) -> Result<VoiceVerdict, DetectionError> {
        let prompt = voice_detection_prompt(language);
        self.run(clip, prompt, ResponseSchema::VoiceDetection).await
    }

    #[tracing::instrument(skip(self, clip), fields(bytes = clip.len(), mime = %clip.mime_type))]
    pub async fn analyze_upload(
        &self,
        clip: AudioClip,
        language: Option<&str>,
    ) -> Result<UploadVerdict, DetectionError> {
        let prompt = upload_analysis_prompt(language);
        self.run(clip, prompt, ResponseSchema::UploadAnalysis).await
    }

    async fn run<T: MappedVerdict>(
        &self,
        audio: AudioClip,
        prompt: String,
        schema: ResponseSchema,
    ) -> Result<T, DetectionError> {
        let raw = self
            .gateway
            .generate(GenerationRequest {
                audio,
                prompt,
                response_schema: schema,
            })
            .await?;

        if raw.trim().is_empty() {
            return Err(DetectionError::Gateway(ModelGatewayError::EmptyResponse));
        }

        let verdict = map_verdict::<T>(&raw).inspect_err(|e| {
            tracing::warn!(error = %e, chars = raw.len(), "Model reply did not match schema");
        })?;

        tracing::info!(schema = ?schema, "Verdict mapped");
        Ok(verdict)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error(transparent)]
    Gateway(#[from] ModelGatewayError),
    #[error("Invalid JSON from Gemini API: {0}")]
    MalformedResponse(#[from] ResponseMappingError),
}
