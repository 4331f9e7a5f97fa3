use serde_json::{Value, json};

use super::classification::{UploadClassification, VoiceClassification};

/// Output contract the model is asked to honour.
///
/// Rendered in the OpenAPI subset accepted by `generationConfig.responseSchema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSchema {
    VoiceDetection,
    UploadAnalysis,
}

impl ResponseSchema {
    pub fn to_json(&self) -> Value {
        match self {
            ResponseSchema::VoiceDetection => json!({
                "type": "OBJECT",
                "properties": {
                    "language": { "type": "STRING" },
                    "classification": {
                        "type": "STRING",
                        "enum": [
                            VoiceClassification::AiGenerated.as_str(),
                            VoiceClassification::Human.as_str(),
                        ],
                    },
                    "confidenceScore": { "type": "NUMBER" },
                    "explanation": { "type": "STRING" },
                },
                "required": ["language", "classification", "confidenceScore", "explanation"],
                "propertyOrdering": ["language", "classification", "confidenceScore", "explanation"],
            }),
            ResponseSchema::UploadAnalysis => json!({
                "type": "OBJECT",
                "properties": {
                    "detectedLanguage": { "type": "STRING" },
                    "classification": {
                        "type": "STRING",
                        "enum": [
                            UploadClassification::AiGenerated.as_str(),
                            UploadClassification::HumanGenerated.as_str(),
                            UploadClassification::Uncertain.as_str(),
                        ],
                    },
                    "confidence": { "type": "NUMBER" },
                    "explanation": { "type": "STRING" },
                    "artifacts": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                    },
                },
                "required": ["detectedLanguage", "classification", "confidence", "explanation", "artifacts"],
                "propertyOrdering": ["detectedLanguage", "classification", "confidence", "explanation", "artifacts"],
            }),
        }
    }
}
