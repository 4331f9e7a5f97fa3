use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages a caller may declare for a voice-detection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Tamil,
    English,
    Hindi,
    Malayalam,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Tamil,
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Telugu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tamil => "Tamil",
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Malayalam => "Malayalam",
            Language::Telugu => "Telugu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
