mod environment;
mod scaffold_config;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    AuthSettings, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_SECRET_KEY,
    GeminiSettings, LoggingSettings, ServerSettings, Settings,
};
