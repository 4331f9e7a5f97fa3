use base64::Engine as _;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};

/// Mime type assumed when an upload does not declare one.
pub const DEFAULT_AUDIO_MIME: &str = "audio/mp3";

/// Audio encodings accepted in a JSON voice-detection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
}

impl AudioFormat {
    pub fn as_mime(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mp3",
        }
    }
}

/// Raw audio bytes plus the mime type they are forwarded under.
///
/// The payload is opaque: nothing here checks that the bytes are playable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl AudioClip {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Builds a clip from an upload, falling back to [`DEFAULT_AUDIO_MIME`]
    /// when the declared type is missing or blank.
    pub fn from_upload(data: Vec<u8>, declared_mime: Option<&str>) -> Self {
        let mime_type = declared_mime
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_AUDIO_MIME);
        Self::new(data, mime_type)
    }

    /// Decodes a standard-alphabet Base64 payload. ASCII whitespace anywhere
    /// is ignored, so line-wrapped (RFC 2045) input is accepted; any other
    /// byte outside the alphabet is an error.
    pub fn from_base64(encoded: &str, format: AudioFormat) -> Result<Self, base64::DecodeError> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let data = general_purpose::STANDARD.decode(compact)?;
        Ok(Self::new(data, format.as_mime()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
