//! WebSocket upgrade handler for real-time chat connections.
//!
//! Handles the HTTP → WebSocket upgrade and manages the connection
//! lifecycle:
//! 1. Validate the conversation id
//! 2. Upgrade to WebSocket
//! 3. Join the conversation room
//! 4. Process chat messages until disconnect
//! 5. Clean up room membership
//!
//! Chat messages received here drive the same orchestrator as the HTTP
//! endpoint; outcomes are broadcast to the whole room so every client
//! following the conversation stays in sync.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::application::ChatService;
use crate::domain::foundation::{ConversationId, ParticipantId, Timestamp};
use crate::ports::{RateLimiter, TransportMetadata};

use super::messages::{
    ChatEvent, ClientMessage, ConnectedMessage, ErrorMessage, PongMessage, ServerMessage,
};
use super::rooms::{ClientId, RoomManager};

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    /// The conversation orchestrator.
    pub chat: ChatService,
    /// Room manager for conversation-based routing.
    pub room_manager: Arc<RoomManager>,
    /// Optional rate limiter for inbound chat messages.
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

impl WebSocketState {
    /// Create a new WebSocket state.
    pub fn new(chat: ChatService, room_manager: Arc<RoomManager>) -> Self {
        Self {
            chat,
            room_manager,
            rate_limiter: None,
        }
    }

    /// Attach a rate limiter for inbound chat messages.
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }
}

/// Handle WebSocket upgrade requests for a conversation.
///
/// Route: `GET /ws/chat/{conversation_id}`
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(conversation_id): Path<String>,
    State(state): State<WebSocketState>,
) -> Response {
    let conversation_id = match ConversationId::new(conversation_id) {
        Ok(id) => id,
        Err(_) => {
            return Response::builder()
                .status(400)
                .body("Invalid conversation ID".into())
                .unwrap();
        }
    };

    ws.on_upgrade(move |socket| handle_socket(socket, conversation_id, state))
}

/// Handle an established WebSocket connection.
///
/// Runs for the lifetime of the connection: joins the conversation room,
/// forwards room broadcasts to the client, and feeds inbound chat
/// messages through the orchestrator.
async fn handle_socket(socket: WebSocket, conversation_id: ConversationId, state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();

    let client_id = ClientId::new();

    let mut room_rx = state
        .room_manager
        .join(&conversation_id, client_id.clone())
        .await;

    // Direct channel for per-client frames (pong, errors).
    let (direct_tx, mut direct_rx) = mpsc::unbounded_channel::<ServerMessage>();

    let connected = ServerMessage::Connected(ConnectedMessage {
        conversation_id: conversation_id.to_string(),
        client_id: client_id.to_string(),
        timestamp: Timestamp::now().to_rfc3339(),
    });

    if let Err(e) = send_message(&mut sender, &connected).await {
        tracing::debug!("Failed to send connected message: {}", e);
        state.room_manager.leave(&client_id).await;
        return; // Client disconnected immediately
    }

    // Forward room broadcasts and direct frames to the client.
    let mut send_task = {
        let client_id = client_id.clone();
        tokio::spawn(async move {
            loop {
                let message = tokio::select! {
                    event = room_rx.recv() => match event {
                        Ok(event) => event.to_server_message(),
                        Err(_) => break,
                    },
                    direct = direct_rx.recv() => match direct {
                        Some(message) => message,
                        None => break,
                    },
                };
                if let Err(e) = send_message(&mut sender, &message).await {
                    tracing::debug!(client_id = %client_id, "Send error, closing connection: {}", e);
                    break;
                }
            }
        })
    };

    // Process incoming frames from the client.
    let mut recv_task = {
        let conversation_id = conversation_id.clone();
        let client_id = client_id.clone();
        let chat = state.chat.clone();
        let room_manager = state.room_manager.clone();
        let rate_limiter = state.rate_limiter.clone();
        tokio::spawn(async move {
            while let Some(result) = receiver.next().await {
                match result {
                    Ok(Message::Text(text)) => {
                        handle_client_frame(
                            &text,
                            &conversation_id,
                            &chat,
                            &room_manager,
                            rate_limiter.as_deref(),
                            &direct_tx,
                        )
                        .await;
                    }
                    Ok(Message::Binary(_)) => {
                        tracing::warn!(
                            client_id = %client_id,
                            "Received unsupported binary message"
                        );
                    }
                    Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                        // WebSocket protocol frames - handled by axum
                    }
                    Ok(Message::Close(_)) => {
                        tracing::debug!(client_id = %client_id, "Client sent close frame");
                        break;
                    }
                    Err(e) => {
                        tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                        break;
                    }
                }
            }
        })
    };

    // Wait for either direction to finish, then tear both down.
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    state.room_manager.leave(&client_id).await;
}

/// Dispatch one parsed client frame.
async fn handle_client_frame(
    text: &str,
    conversation_id: &ConversationId,
    chat: &ChatService,
    room_manager: &RoomManager,
    rate_limiter: Option<&dyn RateLimiter>,
    direct_tx: &mpsc::UnboundedSender<ServerMessage>,
) {
    let frame = match serde_json::from_str::<ClientMessage>(text) {
        Ok(frame) => frame,
        Err(_) => {
            let _ = direct_tx.send(error_message("BAD_MESSAGE", "Unrecognized message format"));
            return;
        }
    };

    match frame {
        ClientMessage::Ping => {
            let _ = direct_tx.send(ServerMessage::Pong(PongMessage {
                timestamp: Timestamp::now().to_rfc3339(),
            }));
        }
        ClientMessage::ChatMessage {
            message,
            participant_id,
        } => {
            if message.trim().is_empty() {
                let _ = direct_tx.send(error_message("EMPTY_MESSAGE", "Message cannot be empty"));
                return;
            }
            let participant_id = match ParticipantId::new(participant_id) {
                Ok(id) => id,
                Err(_) => {
                    let _ = direct_tx.send(error_message(
                        "EMPTY_PARTICIPANT",
                        "Participant id cannot be empty",
                    ));
                    return;
                }
            };

            if let Some(limiter) = rate_limiter {
                let key = format!("chat:{}", conversation_id);
                if !limiter.check_rate_limit(&key).await {
                    let _ = direct_tx.send(error_message(
                        "RATE_LIMITED",
                        "Too many messages. Please slow down.",
                    ));
                    return;
                }
            }

            let outcome = chat
                .process_message(
                    &message,
                    conversation_id,
                    &participant_id,
                    TransportMetadata::websocket(None),
                )
                .await;

            // Everyone following the conversation sees the exchange,
            // including the sender.
            room_manager
                .broadcast(conversation_id, ChatEvent::Response(outcome))
                .await;
        }
    }
}

fn error_message(code: &str, message: &str) -> ServerMessage {
    ServerMessage::Error(ErrorMessage {
        code: code.to_string(),
        message: message.to_string(),
        timestamp: Timestamp::now().to_rfc3339(),
    })
}

/// Send a JSON message over the WebSocket.
async fn send_message(
    sender: &mut futures::stream::SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).expect("ServerMessage serialization should not fail");
    sender.send(Message::Text(json)).await
}

/// Create axum router for the WebSocket endpoint.
pub fn websocket_router() -> axum::Router<WebSocketState> {
    use axum::routing::get;

    axum::Router::new().route("/chat/{conversation_id}", get(ws_handler))
}
