use std::collections::HashMap;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::{Environment, ScaffoldConfig};

pub const DEFAULT_SECRET_KEY: &str = "sk_test_123456789";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub auth: AuthSettings,
    pub logging: LoggingSettings,
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Clone, Deserialize)]
pub struct AuthSettings {
    pub secret_key: String,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    pub filter: Option<String>,
}

impl Settings {
    /// Loads settings from defaults, `appsettings.{environment}`, `APP__*`
    /// variables and the bare `GOOGLE_API_KEY` / `APP_SECRET_KEY` variables,
    /// later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(environment, None)
    }

    /// Same as [`Settings::load`], reading variables from `vars` instead of
    /// the process environment when given.
    pub fn load_from(
        environment: Environment,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let lookup = |key: &str| match &vars {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        };

        let google_api_key = lookup("GOOGLE_API_KEY").filter(|k| !k.trim().is_empty());
        let secret_key = lookup("APP_SECRET_KEY");
        let scaffold_enabled =
            lookup("SCAFFOLD_MODE").map(|v| v.eq_ignore_ascii_case("true") || v == "1");
        let mock_delay = lookup("MOCK_RESPONSE_DELAY").and_then(|v| v.parse::<i64>().ok());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("gemini.model", DEFAULT_GEMINI_MODEL)?
            .set_default("gemini.base_url", DEFAULT_GEMINI_BASE_URL)?
            .set_default("auth.secret_key", DEFAULT_SECRET_KEY)?
            .set_default("logging.json", false)?
            .set_default("scaffold.enabled", false)?
            .set_default("scaffold.mock_response_delay_ms", 0_i64)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars.clone()),
            )
            .set_override_option("gemini.api_key", google_api_key)?
            .set_override_option("auth.secret_key", secret_key)?
            .set_override_option("scaffold.enabled", scaffold_enabled)?
            .set_override_option("scaffold.mock_response_delay_ms", mock_delay)?
            .build()?
            .try_deserialize()
    }
}
