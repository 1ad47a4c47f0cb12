//! HTTP server implementation

use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::rag::ChatBot;
use crate::Result;

/// Start the chat server and run until the process is stopped
pub async fn serve_chat(config: &AppConfig) -> Result<()> {
    info!("🚀 Starting RAG chat server...");

    let chatbot = ChatBot::new(config)?;
    let state = AppState::new(chatbot);

    if config.server.enable_cors {
        info!("✅ CORS enabled");
    }
    let app = routes::build_router(state, config.server.enable_cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Chat page available at http://{}/", addr);
    info!("🔎 Search endpoint: {}", config.vectara_endpoint());
    info!("🤖 Model: {} via {}", config.llm_model(), config.anthropic_endpoint());
    info!("");
    info!("Available endpoints:");
    info!("  GET  /                - Chat page");
    info!("  GET  /api/health      - Health check");
    info!("  POST /api/chat        - Run one chat turn");
    info!("  GET  /api/history     - Conversation so far");

    axum::serve(listener, app).await?;

    Ok(())
}
