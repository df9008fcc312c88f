//! Axum routes for chat endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_records, send_message, ChatAppState};

/// Creates routes for chat endpoints.
///
/// REST Endpoints:
/// - POST /api/chat/message - Process one chat message
/// - GET /api/chat/conversations/{conversation_id}/records - Stored records
///
/// WebSocket Endpoint (separate router):
/// - WS /ws/chat/{conversation_id} - Real-time chat channel
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/chat/message", post(send_message))
        .route(
            "/chat/conversations/{conversation_id}/records",
            get(get_records),
        )
}
