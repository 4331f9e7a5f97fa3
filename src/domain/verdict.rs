use serde::{Deserialize, Serialize};

use super::classification::{UploadClassification, VoiceClassification};

/// Model verdict in the `/api/voice-detection` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceVerdict {
    pub language: String,
    pub classification: VoiceClassification,
    pub confidence_score: f64,
    pub explanation: String,
}

/// Model verdict in the `/analyze` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadVerdict {
    pub detected_language: String,
    pub classification: UploadClassification,
    pub confidence: f64,
    pub explanation: String,
    pub artifacts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerdictError {
    #[error("{field} {value} outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl VoiceVerdict {
    pub const CONFIDENCE_RANGE: (f64, f64) = (0.0, 1.0);

    pub fn validate(&self) -> Result<(), VerdictError> {
        check_range("confidenceScore", self.confidence_score, Self::CONFIDENCE_RANGE)
    }
}

impl UploadVerdict {
    pub const CONFIDENCE_RANGE: (f64, f64) = (0.0, 100.0);

    pub fn validate(&self) -> Result<(), VerdictError> {
        check_range("confidence", self.confidence, Self::CONFIDENCE_RANGE)
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), VerdictError> {
    // NaN fails both comparisons, so it is rejected too.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(VerdictError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
