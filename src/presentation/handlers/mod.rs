mod analyze;
mod health;
mod voice_detection;

pub use analyze::{FILE_FIELD, LANGUAGE_FIELD, analyze_handler};
pub use health::health_handler;
pub use voice_detection::{AnalysisRequest, AnalysisResponse, voice_detection_handler};
