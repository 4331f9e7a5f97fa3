const DEFAULT_FILTER: &str = "info,deepvoice=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool, filter: Option<String>) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            default_filter: filter.unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new("local", false, None)
    }
}
