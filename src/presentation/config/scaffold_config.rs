use serde::Deserialize;

/// Scaffold mode swaps the Gemini gateway for a canned one so the HTTP
/// surface can run without a credential.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldConfig {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
}
