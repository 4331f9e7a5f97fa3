use serde::de::DeserializeOwned;

use crate::domain::{UploadVerdict, VerdictError, VoiceVerdict};

#[derive(Debug, thiserror::Error)]
pub enum ResponseMappingError {
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0}")]
    OutOfContract(#[from] VerdictError),
}

/// Parses model output into a typed verdict. Field values are kept as
/// returned; only enum membership and confidence range are enforced.
pub trait MappedVerdict: DeserializeOwned {
    fn check(&self) -> Result<(), VerdictError>;
}

impl MappedVerdict for VoiceVerdict {
    fn check(&self) -> Result<(), VerdictError> {
        self.validate()
    }
}

impl MappedVerdict for UploadVerdict {
    fn check(&self) -> Result<(), VerdictError> {
        self.validate()
    }
}

pub fn map_verdict<T: MappedVerdict>(raw: &str) -> Result<T, ResponseMappingError> {
    let verdict: T = serde_json::from_str(strip_code_fence(raw))?;
    verdict.check()?;
    Ok(verdict)
}

// Some models wrap JSON mode output in a markdown fence despite the mime type.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
