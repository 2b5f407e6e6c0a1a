use std::sync::Arc;

use ecosave_core::audit_book::AuditBook;
use ecosave_gemini::client::GeminiClient;
use ecosave_server::config::ServerConfig;
use ecosave_server::create_router;
use ecosave_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        advice_model = %config.models.advice,
        analysis_model = %config.models.analysis,
        chat_model = %config.models.chat,
        seed_demo = config.seed_demo,
        "starting ecosave server"
    );

    let client = GeminiClient::new(config.gemini.clone())?;

    let audits = if config.seed_demo {
        AuditBook::with_demo_record()
    } else {
        AuditBook::new()
    };

    let state = AppState::new(Arc::new(client), config.models.clone(), audits);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
