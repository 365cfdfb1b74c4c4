use chat_service::config::ChatConfig;
use chat_service::services::providers::ChatProvider;
use chat_service::services::providers::gemini::{GeminiChatProvider, GeminiConfig};
use chat_service::startup::Application;
use service_core::observability::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("chat-service", "info");

    let config = ChatConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let provider: Arc<dyn ChatProvider> = Arc::new(GeminiChatProvider::new(GeminiConfig {
        api_key: config.google.api_key.clone(),
        model: config.model.clone(),
    }));

    tracing::info!(model = %config.model, "Initialized Gemini chat provider");

    let app = Application::build(config, provider).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!(port = app.port(), "Chat relay listening");

    app.run_until_stopped().await
}
