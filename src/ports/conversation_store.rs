//! Conversation store port.
//!
//! Defines the contract for persisting chat records and retrieving the
//! latest context per conversation. The orchestrator re-fetches on every
//! call; implementations only need latest-by-id and append semantics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::chatbot::ConversationContext;
use crate::domain::foundation::{ConversationId, DomainError, ParticipantId, RecordId, Timestamp};

/// Whether a record captures the visitor's message or the bot's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    User,
    Bot,
}

/// Transport-level metadata supplied by the caller, stored alongside
/// each record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportMetadata {
    /// Which channel produced the message ("http", "websocket", ...).
    pub origin: Option<String>,
    /// Remote peer address, when the transport knows it.
    pub remote_address: Option<String>,
}

impl TransportMetadata {
    /// Metadata for a plain HTTP request.
    pub fn http(remote_address: Option<String>) -> Self {
        Self {
            origin: Some("http".to_string()),
            remote_address,
        }
    }

    /// Metadata for a WebSocket message.
    pub fn websocket(remote_address: Option<String>) -> Self {
        Self {
            origin: Some("websocket".to_string()),
            remote_address,
        }
    }
}

/// One persisted exchange entry.
///
/// Two records are appended per processed message (kind user, kind bot),
/// both carrying the same resulting context snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: RecordId,
    pub conversation_id: ConversationId,
    pub participant_id: ParticipantId,
    pub message: String,
    pub response: String,
    pub kind: RecordKind,
    pub intent_kind: String,
    pub confidence: f64,
    pub context: ConversationContext,
    pub metadata: TransportMetadata,
    pub created_at: Timestamp,
}

/// Port for chat record persistence.
///
/// Implementations must ensure:
/// - `latest_context` reflects the most recently appended record
/// - Records are returned in append order
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// The context carried by the newest record for this conversation.
    ///
    /// Returns `None` for a conversation with no history.
    async fn latest_context(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<ConversationContext>, DomainError>;

    /// Append one record.
    async fn append(&self, record: ChatRecord) -> Result<(), DomainError>;

    /// All records for a conversation, oldest first.
    async fn records_for(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<ChatRecord>, DomainError>;

    /// Number of conversations whose latest context is complete.
    ///
    /// Feeds the aggregate-counts endpoint.
    async fn completed_count(&self) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety check
    #[test]
    fn conversation_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ConversationStore) {}
    }

    #[test]
    fn record_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RecordKind::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&RecordKind::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn transport_metadata_constructors_set_origin() {
        assert_eq!(TransportMetadata::http(None).origin.as_deref(), Some("http"));
        assert_eq!(
            TransportMetadata::websocket(Some("10.0.0.1".to_string()))
                .origin
                .as_deref(),
            Some("websocket")
        );
    }
}
