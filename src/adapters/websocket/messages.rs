//! WebSocket message types for the real-time chat channel.
//!
//! Defines the protocol between server and connected clients:
//! - Server → Client: connection status, chat responses, completion
//!   notifications, errors, pings
//! - Client → Server: chat messages, pings

use serde::{Deserialize, Serialize};

use crate::application::ChatOutcome;
use crate::domain::foundation::Timestamp;
use crate::ports::ConsultationComplete;

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established successfully.
    Connected(ConnectedMessage),

    /// Outcome of one processed chat message.
    #[serde(rename = "chat.response")]
    ChatResponse(ChatResponseMessage),

    /// The consultation questionnaire finished.
    #[serde(rename = "conversation.complete")]
    ConversationComplete(ConversationCompleteMessage),

    /// Error occurred.
    Error(ErrorMessage),

    /// Heartbeat response.
    Pong(PongMessage),
}

/// Sent when a client successfully connects and joins a conversation room.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub conversation_id: String,
    pub client_id: String,
    pub timestamp: String,
}

/// One chat outcome, broadcast to everyone in the conversation room.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseMessage {
    #[serde(flatten)]
    pub outcome: ChatOutcome,
    pub timestamp: String,
}

/// Completion notification fanned out to the conversation room.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationCompleteMessage {
    #[serde(flatten)]
    pub notification: ConsultationComplete,
    pub timestamp: String,
}

/// Error message sent to client.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
    pub timestamp: String,
}

/// Heartbeat response.
#[derive(Debug, Clone, Serialize)]
pub struct PongMessage {
    pub timestamp: String,
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be received from client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// One inbound chat message for this conversation.
    #[serde(rename = "chat.message")]
    ChatMessage {
        message: String,
        #[serde(rename = "participantId")]
        participant_id: String,
    },

    /// Heartbeat request.
    Ping,
}

// ============================================
// Internal Types
// ============================================

/// Internal representation of an event broadcast to a conversation room.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A processed message's outcome.
    Response(ChatOutcome),
    /// The conversation finished.
    Complete(ConsultationComplete),
}

impl ChatEvent {
    /// Convert to a server message for sending to clients.
    pub fn to_server_message(self) -> ServerMessage {
        let timestamp = Timestamp::now().to_rfc3339();
        match self {
            ChatEvent::Response(outcome) => ServerMessage::ChatResponse(ChatResponseMessage {
                outcome,
                timestamp,
            }),
            ChatEvent::Complete(notification) => {
                ServerMessage::ConversationComplete(ConversationCompleteMessage {
                    notification,
                    timestamp,
                })
            }
        }
    }
}
