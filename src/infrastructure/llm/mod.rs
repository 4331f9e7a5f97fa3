mod gemini_client;
mod scaffold_gateway;

pub use gemini_client::{GEMINI_API_KEY_HEADER, GeminiClient};
pub use scaffold_gateway::ScaffoldModelGateway;
