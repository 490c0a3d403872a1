#![recursion_limit = "256"]

mod chat;
mod cms;
mod config;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::chat::{ChatBackend, HttpChatBackend};
use crate::cms::{CmsClient, ContentSource};
use crate::config::SiteConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let content: Arc<dyn ContentSource> = match CmsClient::new(&config.cms) {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "CMS client initialized");
            Arc::new(client)
        }
        Err(e) => {
            tracing::error!(error = %e, "CMS client init failed");
            std::process::exit(1);
        }
    };

    // Chat is optional: the widget reports itself unavailable without it.
    let chat: Option<Arc<dyn ChatBackend>> = match config.chat.as_ref().map(HttpChatBackend::new) {
        Some(Ok(backend)) => {
            tracing::info!("chat backend initialized");
            Some(Arc::new(backend))
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "chat backend init failed; chat disabled");
            None
        }
        None => {
            tracing::warn!("CHAT_BACKEND_URL not set; chat disabled");
            None
        }
    };

    let state = state::AppState::new(content, chat);

    let app = match routes::site(state, &config.assets_dir) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            std::process::exit(1);
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "edulend listening");
    if let Err(e) = axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
