use deepvoice::application::services::{ResponseMappingError, map_verdict};
use deepvoice::domain::{UploadClassification, UploadVerdict, VoiceClassification, VoiceVerdict};

#[test]
fn given_valid_voice_json_when_mapping_then_fields_pass_through() {
    let raw = r#"{"language":"English","classification":"HUMAN","confidenceScore":0.92,"explanation":"natural pauses detected"}"#;

    let verdict: VoiceVerdict = map_verdict(raw).unwrap();

    assert_eq!(verdict.language, "English");
    assert_eq!(verdict.classification, VoiceClassification::Human);
    assert_eq!(verdict.confidence_score, 0.92);
    assert_eq!(verdict.explanation, "natural pauses detected");
}

#[test]
fn given_non_json_text_when_mapping_then_returns_invalid_json() {
    let result = map_verdict::<VoiceVerdict>("I think this is a human voice.");

    assert!(matches!(result, Err(ResponseMappingError::InvalidJson(_))));
}

#[test]
fn given_unknown_classification_when_mapping_then_rejects() {
    let raw = r#"{"language":"English","classification":"ROBOT","confidenceScore":0.5,"explanation":"x"}"#;

    assert!(matches!(
        map_verdict::<VoiceVerdict>(raw),
        Err(ResponseMappingError::InvalidJson(_))
    ));
}

#[test]
fn given_confidence_out_of_range_when_mapping_then_rejects_without_clamping() {
    let raw = r#"{"language":"English","classification":"HUMAN","confidenceScore":92,"explanation":"x"}"#;

    assert!(matches!(
        map_verdict::<VoiceVerdict>(raw),
        Err(ResponseMappingError::OutOfContract(_))
    ));
}

#[test]
fn given_fenced_json_when_mapping_then_strips_fence() {
    let raw = "```json\n{\"detectedLanguage\":\"Telugu\",\"classification\":\"AI-Generated\",\"confidence\":81.5,\"explanation\":\"flat prosody\",\"artifacts\":[\"no breaths\",\"spectral cutoff\"]}\n```";

    let verdict: UploadVerdict = map_verdict(raw).unwrap();

    assert_eq!(verdict.classification, UploadClassification::AiGenerated);
    assert_eq!(verdict.confidence, 81.5);
    assert_eq!(verdict.artifacts, vec!["no breaths", "spectral cutoff"]);
}

#[test]
fn given_upload_json_without_artifacts_when_mapping_then_rejects_as_invalid_json() {
    let raw = r#"{"detectedLanguage":"Hindi","classification":"Uncertain","confidence":40,"explanation":"short clip"}"#;

    assert!(matches!(
        map_verdict::<UploadVerdict>(raw),
        Err(ResponseMappingError::InvalidJson(_))
    ));
}

#[test]
fn given_upload_json_with_empty_artifacts_when_mapping_then_accepts() {
    let raw = r#"{"detectedLanguage":"Hindi","classification":"Uncertain","confidence":40,"explanation":"short clip","artifacts":[]}"#;

    let verdict: UploadVerdict = map_verdict(raw).unwrap();

    assert!(verdict.artifacts.is_empty());
}
