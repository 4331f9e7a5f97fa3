use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::ModelGateway;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::auth::require_api_key;
use crate::presentation::error::panic_response;
use crate::presentation::handlers::{analyze_handler, health_handler, voice_detection_handler};
use crate::presentation::state::AppState;

pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: ModelGateway + 'static,
{
    // Credentials forbid `*`, so every origin, method and header is mirrored.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let protected = Router::new()
        .route("/api/voice-detection", post(voice_detection_handler::<G>))
        .route_layer(middleware::from_fn_with_state(
            state.api_key.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze", post(analyze_handler::<G>))
        .merge(protected)
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
