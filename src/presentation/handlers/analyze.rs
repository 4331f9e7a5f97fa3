use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};

use crate::application::ports::ModelGateway;
use crate::domain::{AudioClip, UploadVerdict};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

pub const FILE_FIELD: &str = "file";
pub const LANGUAGE_FIELD: &str = "language";

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<G>(
    State(state): State<AppState<G>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadVerdict>, ApiError>
where
    G: ModelGateway + 'static,
{
    let (clip, language) = read_upload(multipart?).await?;

    tracing::debug!(
        bytes = clip.len(),
        mime = %clip.mime_type,
        language = ?language,
        "Processing upload analysis"
    );

    let verdict = state
        .detection_service
        .analyze_upload(clip, language.as_deref())
        .await?;

    tracing::info!(
        classification = verdict.classification.as_str(),
        confidence = verdict.confidence,
        artifacts = verdict.artifacts.len(),
        "Upload analysis successful"
    );

    Ok(Json(verdict))
}

async fn read_upload(mut multipart: Multipart) -> Result<(AudioClip, Option<String>), ApiError> {
    let mut clip = None;
    let mut language = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let mime = field.content_type().map(str::to_owned);
                let data = field.bytes().await?;
                clip = Some(AudioClip::from_upload(data.to_vec(), mime.as_deref()));
            }
            Some(LANGUAGE_FIELD) => {
                let value = field.text().await?;
                let value = value.trim();
                if !value.is_empty() {
                    language = Some(value.to_string());
                }
            }
            _ => {}
        }
    }

    let clip = clip.ok_or_else(|| ApiError::InvalidRequest("No file uploaded".to_string()))?;
    Ok((clip, language))
}
