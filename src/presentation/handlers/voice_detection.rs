use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::ports::ModelGateway;
use crate::domain::{AudioClip, AudioFormat, Language, VoiceVerdict};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub language: Language,
    pub audio_format: AudioFormat,
    pub audio_base64: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    #[serde(flatten)]
    pub verdict: VoiceVerdict,
}

impl AnalysisResponse {
    pub fn success(verdict: VoiceVerdict) -> Self {
        Self {
            status: "success".to_string(),
            verdict,
        }
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn voice_detection_handler<G>(
    State(state): State<AppState<G>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError>
where
    G: ModelGateway + 'static,
{
    let Json(request) = payload?;

    let clip = AudioClip::from_base64(&request.audio_base64, request.audio_format).map_err(|e| {
        tracing::warn!(error = %e, "Rejected audio payload");
        ApiError::InvalidBase64
    })?;

    tracing::debug!(
        language = %request.language,
        bytes = clip.len(),
        "Processing voice detection"
    );

    let verdict = state
        .detection_service
        .detect_voice(clip, request.language)
        .await?;

    tracing::info!(
        classification = verdict.classification.as_str(),
        confidence = verdict.confidence_score,
        "Voice detection successful"
    );

    Ok(Json(AnalysisResponse::success(verdict)))
}
