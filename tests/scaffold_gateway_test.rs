use std::sync::Arc;

use deepvoice::application::services::DetectionService;
use deepvoice::domain::{AudioClip, Language, UploadClassification, VoiceClassification};
use deepvoice::infrastructure::llm::ScaffoldModelGateway;

#[tokio::test]
async fn given_scaffold_gateway_when_detecting_voice_then_returns_valid_verdict() {
    let service = DetectionService::new(Arc::new(ScaffoldModelGateway::new(0)));

    let verdict = service
        .detect_voice(AudioClip::new(vec![0; 16], "audio/mp3"), Language::English)
        .await
        .unwrap();

    assert_eq!(verdict.classification, VoiceClassification::Human);
    assert!(verdict.validate().is_ok());
}

#[tokio::test(start_paused = true)]
async fn given_scaffold_delay_when_analyzing_upload_then_waits_before_answering() {
    let service = DetectionService::new(Arc::new(ScaffoldModelGateway::new(500)));
    let started = tokio::time::Instant::now();

    let verdict = service
        .analyze_upload(AudioClip::from_upload(vec![1, 2], None), None)
        .await
        .unwrap();

    assert!(started.elapsed() >= std::time::Duration::from_millis(500));
    assert_eq!(verdict.classification, UploadClassification::Uncertain);
    assert!(verdict.artifacts.is_empty());
}
