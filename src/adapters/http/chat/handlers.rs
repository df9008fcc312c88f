//! HTTP handlers for chat endpoints.
//!
//! The POST handler drives the same orchestrator as the WebSocket
//! handler; processing failures surface as a normal 200 outcome with the
//! apology payload, never as a 5xx.

use std::sync::Arc;

use axum::extract::{ConnectInfo, Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::net::SocketAddr;

use crate::application::ChatService;
use crate::domain::foundation::{ConversationId, ParticipantId};
use crate::ports::{ConversationStore, RateLimiter, TransportMetadata};

use super::super::error::ApiError;
use super::dto::{RecordView, SendMessageRequest};

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    pub chat: ChatService,
    /// Optional rate limiter for throttling message processing.
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

impl ChatAppState {
    /// Creates a new ChatAppState.
    pub fn new(chat: ChatService) -> Self {
        Self {
            chat,
            rate_limiter: None,
        }
    }

    /// Attaches a rate limiter.
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }
}

/// POST /api/chat/message - Process one chat message.
///
/// # Errors
/// - 400 Bad Request: empty message, conversation id, or participant id
/// - 429 Too Many Requests: rate limit exceeded
pub async fn send_message(
    State(state): State<ChatAppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }
    let conversation_id = ConversationId::new(request.conversation_id)
        .map_err(|_| ApiError::BadRequest("Conversation id cannot be empty".to_string()))?;
    let participant_id = ParticipantId::new(request.participant_id)
        .map_err(|_| ApiError::BadRequest("Participant id cannot be empty".to_string()))?;

    if let Some(ref rate_limiter) = state.rate_limiter {
        let key = format!("chat:{}", conversation_id);
        if !rate_limiter.check_rate_limit(&key).await {
            return Err(ApiError::RateLimited(
                "Too many messages. Please slow down.".to_string(),
            ));
        }
    }

    let outcome = state
        .chat
        .process_message(
            &request.message,
            &conversation_id,
            &participant_id,
            TransportMetadata::http(Some(addr.ip().to_string())),
        )
        .await;

    Ok((StatusCode::OK, Json(outcome)))
}

/// GET /api/chat/conversations/{id}/records - Stored records, oldest first.
///
/// # Errors
/// - 400 Bad Request: empty conversation id
pub async fn get_records(
    State(state): State<ChatAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let conversation_id = ConversationId::new(conversation_id)
        .map_err(|_| ApiError::BadRequest("Conversation id cannot be empty".to_string()))?;

    let records = state
        .chat
        .store()
        .records_for(&conversation_id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let views: Vec<RecordView> = records.iter().map(RecordView::from_record).collect();
    Ok((StatusCode::OK, Json(views)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryConversationStore;
    use crate::adapters::rate_limiter::InMemoryRateLimiter;
    use crate::ports::NoopCompletionNotifier;
    use std::time::Duration;

    fn state() -> (ChatAppState, Arc<InMemoryConversationStore>) {
        let store = Arc::new(InMemoryConversationStore::new());
        let chat = ChatService::new(store.clone(), Arc::new(NoopCompletionNotifier));
        (ChatAppState::new(chat), store)
    }

    fn addr() -> ConnectInfo<SocketAddr> {
        ConnectInfo("127.0.0.1:55555".parse().unwrap())
    }

    fn request(message: &str) -> SendMessageRequest {
        SendMessageRequest {
            message: message.to_string(),
            conversation_id: "conv-1".to_string(),
            participant_id: "visitor-1".to_string(),
        }
    }

    #[tokio::test]
    async fn send_message_returns_outcome() {
        let (state, _store) = state();

        let result = send_message(State(state), addr(), Json(request("hi"))).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let (state, _store) = state();

        let result = send_message(State(state), addr(), Json(request("   "))).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn empty_conversation_id_is_rejected() {
        let (state, _store) = state();
        let mut req = request("hi");
        req.conversation_id = String::new();

        let result = send_message(State(state), addr(), Json(req)).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn rate_limit_produces_429() {
        let (state, _store) = state();
        let limiter = Arc::new(InMemoryRateLimiter::new(1, Duration::from_secs(60)));
        let state = state.with_rate_limiter(limiter);

        let first = send_message(State(state.clone()), addr(), Json(request("hi"))).await;
        assert!(first.is_ok());

        let second = send_message(State(state), addr(), Json(request("hi again"))).await;
        assert!(matches!(second, Err(ApiError::RateLimited(_))));
    }

    #[tokio::test]
    async fn records_endpoint_returns_stored_exchange() {
        let (state, _store) = state();

        send_message(State(state.clone()), addr(), Json(request("hi")))
            .await
            .ok();

        let result = get_records(State(state), Path("conv-1".to_string())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn records_for_empty_id_is_rejected() {
        let (state, _store) = state();

        let result = get_records(State(state), Path(String::new())).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
