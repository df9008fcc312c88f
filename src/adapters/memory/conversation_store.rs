//! In-memory implementation of ConversationStore.
//!
//! Backs unit and integration tests, and local development without a
//! database. Keeps the latest context per conversation alongside the
//! full append-only record log.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::chatbot::ConversationContext;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::{ChatRecord, ConversationStore};

/// In-memory conversation store.
#[derive(Default)]
pub struct InMemoryConversationStore {
    records: RwLock<Vec<ChatRecord>>,
    latest: RwLock<HashMap<ConversationId, ConversationContext>>,
}

impl InMemoryConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the latest context for a conversation without appending a
    /// record. Used to seed test scenarios mid-flow.
    pub async fn seed_context(&self, conversation_id: &ConversationId, context: ConversationContext) {
        self.latest
            .write()
            .await
            .insert(conversation_id.clone(), context);
    }

    /// Total number of stored records across all conversations.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn latest_context(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Option<ConversationContext>, DomainError> {
        Ok(self.latest.read().await.get(conversation_id).cloned())
    }

    async fn append(&self, record: ChatRecord) -> Result<(), DomainError> {
        self.latest
            .write()
            .await
            .insert(record.conversation_id.clone(), record.context.clone());
        self.records.write().await.push(record);
        Ok(())
    }

    async fn records_for(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<ChatRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|record| &record.conversation_id == conversation_id)
            .cloned()
            .collect())
    }

    async fn completed_count(&self) -> Result<u64, DomainError> {
        Ok(self
            .latest
            .read()
            .await
            .values()
            .filter(|context| context.is_complete())
            .count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chatbot::ConversationStep;
    use crate::domain::foundation::{ParticipantId, RecordId, Timestamp};
    use crate::ports::{RecordKind, TransportMetadata};

    fn record(conversation: &str, step: ConversationStep) -> ChatRecord {
        ChatRecord {
            id: RecordId::new(),
            conversation_id: ConversationId::new(conversation).unwrap(),
            participant_id: ParticipantId::new("visitor-1").unwrap(),
            message: "hi".to_string(),
            response: "hello".to_string(),
            kind: RecordKind::User,
            intent_kind: "greeting".to_string(),
            confidence: 0.9,
            context: ConversationContext {
                current_step: step,
                ..Default::default()
            },
            metadata: TransportMetadata::default(),
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn latest_context_is_none_for_unknown_conversation() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new("missing").unwrap();
        assert!(store.latest_context(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn append_updates_latest_context() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new("c1").unwrap();

        store.append(record("c1", ConversationStep::ProjectType)).await.unwrap();
        store.append(record("c1", ConversationStep::RoomType)).await.unwrap();

        let context = store.latest_context(&id).await.unwrap().unwrap();
        assert_eq!(context.current_step, ConversationStep::RoomType);
        assert_eq!(store.record_count().await, 2);
    }

    #[tokio::test]
    async fn records_for_filters_by_conversation() {
        let store = InMemoryConversationStore::new();

        store.append(record("c1", ConversationStep::ProjectType)).await.unwrap();
        store.append(record("c2", ConversationStep::ProjectType)).await.unwrap();

        let id = ConversationId::new("c1").unwrap();
        let records = store.records_for(&id).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].conversation_id, id);
    }

    #[tokio::test]
    async fn completed_count_tracks_terminal_conversations() {
        let store = InMemoryConversationStore::new();

        store.append(record("c1", ConversationStep::Complete)).await.unwrap();
        store.append(record("c2", ConversationStep::Budget)).await.unwrap();

        assert_eq!(store.completed_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seeding_sets_context_without_records() {
        let store = InMemoryConversationStore::new();
        let id = ConversationId::new("c1").unwrap();

        store
            .seed_context(
                &id,
                ConversationContext {
                    current_step: ConversationStep::Budget,
                    ..Default::default()
                },
            )
            .await;

        let context = store.latest_context(&id).await.unwrap().unwrap();
        assert_eq!(context.current_step, ConversationStep::Budget);
        assert_eq!(store.record_count().await, 0);
    }
}
