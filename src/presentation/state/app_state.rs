use std::sync::Arc;

use crate::application::ports::ModelGateway;
use crate::application::services::DetectionService;
use crate::presentation::auth::ApiKey;
use crate::presentation::config::AuthSettings;

pub struct AppState<G>
where
    G: ModelGateway,
{
    pub detection_service: Arc<DetectionService<G>>,
    pub api_key: ApiKey,
}

impl<G> AppState<G>
where
    G: ModelGateway,
{
    pub fn new(gateway: Arc<G>, auth: &AuthSettings) -> Self {
        Self {
            detection_service: Arc::new(DetectionService::new(gateway)),
            api_key: ApiKey::new(auth.secret_key.as_str()),
        }
    }
}

impl<G> Clone for AppState<G>
where
    G: ModelGateway,
{
    fn clone(&self) -> Self {
        Self {
            detection_service: Arc::clone(&self.detection_service),
            api_key: self.api_key.clone(),
        }
    }
}
