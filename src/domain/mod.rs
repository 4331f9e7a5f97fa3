mod audio_clip;
mod classification;
mod language;
mod response_schema;
mod verdict;

pub use audio_clip::{AudioClip, AudioFormat, DEFAULT_AUDIO_MIME};
pub use classification::{UploadClassification, VoiceClassification};
pub use language::Language;
pub use response_schema::ResponseSchema;
pub use verdict::{UploadVerdict, VerdictError, VoiceVerdict};
