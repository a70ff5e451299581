//! Chat relay endpoint

use std::sync::Arc;

use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};
use serde::{Deserialize, Serialize};

use super::ApiState;
use crate::relay::FAILURE_REPLY;

/// Chat request from the browser
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// Transcribed speech; absent and `null` are treated as empty
    #[serde(default)]
    pub message: Option<String>,
}

/// Chat reply to display and speak
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Relay a transcribed message
///
/// Always answers 200; failures only change the reply text.
async fn chat(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable chat request, sending fallback reply");
            return Json(ChatResponse {
                response: FAILURE_REPLY.to_string(),
            });
        }
    };

    let message = request.message.unwrap_or_default();
    let exchange = state.relay.exchange(&message).await;

    Json(ChatResponse {
        response: exchange.ai_reply,
    })
}

/// Build chat router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new().route("/chat", post(chat)).with_state(state)
}
