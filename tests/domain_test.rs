use base64::Engine as _;
use base64::engine::general_purpose;

use deepvoice::domain::{
    AudioClip, AudioFormat, DEFAULT_AUDIO_MIME, Language, UploadClassification, UploadVerdict,
    VerdictError, VoiceClassification, VoiceVerdict,
};

#[test]
fn given_arbitrary_bytes_when_encoded_and_decoded_then_round_trips() {
    let samples: [&[u8]; 4] = [b"", b"I", b"ID3\x03\x00\x00", &[0u8, 255, 128, 7, 42]];

    for bytes in samples {
        let encoded = general_purpose::STANDARD.encode(bytes);
        let clip = AudioClip::from_base64(&encoded, AudioFormat::Mp3).unwrap();
        assert_eq!(clip.data, bytes);
    }
}

#[test]
fn given_invalid_base64_when_decoding_then_returns_error() {
    assert!(AudioClip::from_base64("not-base64!!", AudioFormat::Mp3).is_err());
}

#[test]
fn given_padded_base64_with_trailing_newline_when_decoding_then_accepts_it() {
    let clip = AudioClip::from_base64("aGVsbG8=\n", AudioFormat::Mp3).unwrap();
    assert_eq!(clip.data, b"hello");
    assert_eq!(clip.mime_type, "audio/mp3");
}

#[test]
fn given_line_wrapped_base64_when_decoding_then_accepts_it() {
    let bytes: Vec<u8> = (0u8..60).collect();
    let encoded = general_purpose::STANDARD.encode(&bytes);
    let wrapped = format!("{}\n{}", &encoded[..76], &encoded[76..]);
    let crlf_wrapped = format!("{}\r\n{}\r\n", &encoded[..40], &encoded[40..]);

    let clip = AudioClip::from_base64(&wrapped, AudioFormat::Mp3).unwrap();
    assert_eq!(clip.data, bytes);

    let clip = AudioClip::from_base64(&crlf_wrapped, AudioFormat::Mp3).unwrap();
    assert_eq!(clip.data, bytes);
}

#[test]
fn given_whitespace_and_other_non_alphabet_bytes_when_decoding_then_still_rejects() {
    assert!(AudioClip::from_base64("aGVs bG8=!", AudioFormat::Mp3).is_err());
}

#[test]
fn given_upload_without_mime_when_building_clip_then_defaults_to_mp3() {
    let clip = AudioClip::from_upload(vec![1, 2, 3], None);
    assert_eq!(clip.mime_type, DEFAULT_AUDIO_MIME);

    let blank = AudioClip::from_upload(vec![1], Some("  "));
    assert_eq!(blank.mime_type, DEFAULT_AUDIO_MIME);
}

#[test]
fn given_upload_with_mime_when_building_clip_then_keeps_declared_type() {
    let clip = AudioClip::from_upload(vec![1, 2, 3], Some("audio/wav"));
    assert_eq!(clip.mime_type, "audio/wav");
    assert_eq!(clip.len(), 3);
}

#[test]
fn given_supported_language_name_when_deserializing_then_parses() {
    for language in Language::ALL {
        let json = format!("\"{}\"", language.as_str());
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, language);
    }
}

#[test]
fn given_unsupported_language_when_deserializing_then_fails() {
    assert!(serde_json::from_str::<Language>("\"French\"").is_err());
    assert!(serde_json::from_str::<Language>("\"english\"").is_err());
}

#[test]
fn given_classification_labels_when_serializing_then_uses_wire_names() {
    assert_eq!(
        serde_json::to_string(&VoiceClassification::AiGenerated).unwrap(),
        "\"AI_GENERATED\""
    );
    assert_eq!(
        serde_json::to_string(&UploadClassification::HumanGenerated).unwrap(),
        "\"Human-Generated\""
    );
}

#[test]
fn given_voice_confidence_above_one_when_validating_then_reports_range() {
    let verdict = VoiceVerdict {
        language: "Tamil".to_string(),
        classification: VoiceClassification::Human,
        confidence_score: 87.0,
        explanation: "x".to_string(),
    };

    assert!(matches!(
        verdict.validate(),
        Err(VerdictError::OutOfRange { field: "confidenceScore", .. })
    ));
}

#[test]
fn given_upload_confidence_at_bounds_when_validating_then_accepts() {
    let mut verdict = UploadVerdict {
        detected_language: "Hindi".to_string(),
        classification: UploadClassification::Uncertain,
        confidence: 0.0,
        explanation: "x".to_string(),
        artifacts: Vec::new(),
    };
    assert!(verdict.validate().is_ok());

    verdict.confidence = 100.0;
    assert!(verdict.validate().is_ok());

    verdict.confidence = f64::NAN;
    assert!(verdict.validate().is_err());
}
