//! PostgreSQL implementation of ConversationStore.
//!
//! Chat records are append-only rows; the context snapshot is stored as
//! JSONB so the latest context is whatever the newest row carries.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chatbot::ConversationContext;
use crate::domain::foundation::{
    ConversationId, DomainError, ParticipantId, RecordId, Timestamp,
};
use crate::ports::{ChatRecord, ConversationStore, RecordKind, TransportMetadata};

/// PostgreSQL implementation of ConversationStore.
#[derive(Clone)]
pub struct PostgresConversationStore {
    pool: PgPool,
}

impl PostgresConversationStore {
    /// Creates a new PostgresConversationStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationStore for PostgresConversationStore {
    async fn latest_context(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<ConversationContext>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT context
            FROM chat_records
            WHERE conversation_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(conversation_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch latest context: {}", e)))?;

        match row {
            Some(row) => {
                let value: serde_json::Value = row.get("context");
                let context = serde_json::from_value(value).map_err(|e| {
                    DomainError::database(format!("Malformed context snapshot: {}", e))
                })?;
                Ok(Some(context))
            }
            None => Ok(None),
        }
    }

    async fn append(&self, record: ChatRecord) -> Result<(), DomainError> {
        let context = serde_json::to_value(&record.context).map_err(|e| {
            DomainError::database(format!("Failed to serialize context: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO chat_records (
                id, conversation_id, participant_id, message, response,
                kind, intent_kind, confidence, context, origin,
                remote_address, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.conversation_id.as_str())
        .bind(record.participant_id.as_str())
        .bind(&record.message)
        .bind(&record.response)
        .bind(kind_to_str(record.kind))
        .bind(&record.intent_kind)
        .bind(record.confidence)
        .bind(context)
        .bind(&record.metadata.origin)
        .bind(&record.metadata.remote_address)
        .bind(record.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert chat record: {}", e)))?;

        Ok(())
    }

    async fn records_for(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<ChatRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, conversation_id, participant_id, message, response,
                   kind, intent_kind, confidence, context, origin,
                   remote_address, created_at
            FROM chat_records
            WHERE conversation_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(conversation_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch chat records: {}", e)))?;

        rows.iter().map(row_to_record).collect()
    }

    async fn completed_count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS completed
            FROM (
                SELECT DISTINCT ON (conversation_id) context
                FROM chat_records
                ORDER BY conversation_id, created_at DESC
            ) latest
            WHERE latest.context->>'currentStep' = 'complete'
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to count completions: {}", e)))?;

        let count: i64 = row.get("completed");
        Ok(count as u64)
    }
}

fn kind_to_str(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::User => "user",
        RecordKind::Bot => "bot",
    }
}

fn kind_from_str(s: &str) -> Result<RecordKind, DomainError> {
    match s {
        "user" => Ok(RecordKind::User),
        "bot" => Ok(RecordKind::Bot),
        other => Err(DomainError::database(format!(
            "Unknown record kind '{}'",
            other
        ))),
    }
}

fn row_to_record(row: &sqlx::postgres::PgRow) -> Result<ChatRecord, DomainError> {
    let id: uuid::Uuid = row.get("id");
    let conversation_id: String = row.get("conversation_id");
    let participant_id: String = row.get("participant_id");
    let kind: String = row.get("kind");
    let context: serde_json::Value = row.get("context");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    Ok(ChatRecord {
        id: RecordId::from_uuid(id),
        conversation_id: ConversationId::new(conversation_id)
            .map_err(|e| DomainError::database(format!("Bad conversation id in row: {}", e)))?,
        participant_id: ParticipantId::new(participant_id)
            .map_err(|e| DomainError::database(format!("Bad participant id in row: {}", e)))?,
        message: row.get("message"),
        response: row.get("response"),
        kind: kind_from_str(&kind)?,
        intent_kind: row.get("intent_kind"),
        confidence: row.get("confidence"),
        context: serde_json::from_value(context)
            .map_err(|e| DomainError::database(format!("Malformed context snapshot: {}", e)))?,
        metadata: TransportMetadata {
            origin: row.get("origin"),
            remote_address: row.get("remote_address"),
        },
        created_at: Timestamp::from_datetime(created_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrips_through_strings() {
        for kind in [RecordKind::User, RecordKind::Bot] {
            assert_eq!(kind_from_str(kind_to_str(kind)).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_string_is_rejected() {
        assert!(kind_from_str("system").is_err());
    }
}
