mod detection_service;
mod prompt_builder;
mod response_mapper;

pub use detection_service::{DetectionError, DetectionService};
pub use prompt_builder::{MAX_EXPLANATION_WORDS, upload_analysis_prompt, voice_detection_prompt};
pub use response_mapper::{MappedVerdict, ResponseMappingError, map_verdict};
