pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use auth::{API_KEY_HEADER, ApiKey};
pub use config::{Environment, ScaffoldConfig, Settings};
pub use error::{ApiError, ErrorEnvelope};
pub use router::create_router;
pub use state::AppState;
