use serde::{Deserialize, Serialize};

/// Verdict labels of the `/api/voice-detection` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceClassification {
    AiGenerated,
    Human,
}

impl VoiceClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceClassification::AiGenerated => "AI_GENERATED",
            VoiceClassification::Human => "HUMAN",
        }
    }
}

/// Verdict labels of the `/analyze` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadClassification {
    #[serde(rename = "AI-Generated")]
    AiGenerated,
    #[serde(rename = "Human-Generated")]
    HumanGenerated,
    Uncertain,
}

impl UploadClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadClassification::AiGenerated => "AI-Generated",
            UploadClassification::HumanGenerated => "Human-Generated",
            UploadClassification::Uncertain => "Uncertain",
        }
    }
}
