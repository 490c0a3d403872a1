//! Chat widget endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Status codes are the whole contract with the widget: it shows the answer
//! on 200 and a fixed apology for anything else, so bodies on failure are
//! empty.

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;

use crate::chat::{ChatReply, ChatRequest, normalize_query};
use crate::state::AppState;

/// `POST /api/chat`: forward one query to the answer service.
pub async fn ask(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, StatusCode> {
    let Some(query) = normalize_query(&body.query) else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let Some(backend) = state.chat.as_ref() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let client = peer.ip().to_string();
    if let Err(e) = state.rate_limiter.check_and_record(&client) {
        tracing::info!(%client, error = %e, "chat request rate limited");
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    match backend.ask(&query).await {
        Ok(answer) => {
            tracing::debug!(%client, chars = query.chars().count(), "chat answered");
            Ok(Json(ChatReply { answer }))
        }
        Err(e) => {
            tracing::warn!(%client, error = %e, "chat backend failed");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
