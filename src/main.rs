use std::sync::Arc;

use tokio::net::TcpListener;

use deepvoice::infrastructure::llm::{GeminiClient, ScaffoldModelGateway};
use deepvoice::infrastructure::observability::{TracingConfig, init_tracing};
use deepvoice::presentation::config::DEFAULT_SECRET_KEY;
use deepvoice::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
        settings.logging.filter.clone(),
    ));

    if settings.gemini.api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not set; Gemini will reject every analysis request");
    }
    if settings.auth.secret_key == DEFAULT_SECRET_KEY {
        tracing::warn!("APP_SECRET_KEY is not set; using the built-in placeholder key");
    }

    let router = if settings.scaffold.enabled {
        tracing::info!(
            delay_ms = settings.scaffold.mock_response_delay_ms,
            "Scaffold mode enabled, Gemini will not be called"
        );
        let gateway = Arc::new(ScaffoldModelGateway::new(
            settings.scaffold.mock_response_delay_ms,
        ));
        create_router(AppState::new(gateway, &settings.auth))
    } else {
        let gateway = Arc::new(GeminiClient::new(
            &settings.gemini.base_url,
            &settings.gemini.model,
            settings.gemini.api_key.clone(),
        ));
        tracing::info!(
            model = %settings.gemini.model,
            endpoint = %gateway.endpoint(),
            "Gemini gateway configured"
        );
        create_router(AppState::new(gateway, &settings.auth))
    };

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
