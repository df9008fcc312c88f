//! DTOs for the chat endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::{ChatRecord, RecordKind};

/// Request body for POST /api/chat/message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub message: String,
    pub conversation_id: String,
    pub participant_id: String,
}

/// One stored record, as returned by the history endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    pub id: String,
    pub conversation_id: String,
    pub participant_id: String,
    pub message: String,
    pub response: String,
    pub kind: RecordKind,
    pub intent_kind: String,
    pub confidence: f64,
    pub created_at: String,
}

impl RecordView {
    /// Builds a view from a stored record.
    pub fn from_record(record: &ChatRecord) -> Self {
        Self {
            id: record.id.to_string(),
            conversation_id: record.conversation_id.to_string(),
            participant_id: record.participant_id.to_string(),
            message: record.message.clone(),
            response: record.response.clone(),
            kind: record.kind,
            intent_kind: record.intent_kind.clone(),
            confidence: record.confidence,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_request_deserializes_camel_case() {
        let json = r#"{"message":"hi","conversationId":"c1","participantId":"v1"}"#;
        let request: SendMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.message, "hi");
        assert_eq!(request.conversation_id, "c1");
        assert_eq!(request.participant_id, "v1");
    }
}
