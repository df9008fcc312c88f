//! Bridges the completion notifier port onto conversation rooms.
//!
//! The orchestrator emits completion notifications through the
//! `CompletionNotifier` port; this adapter fans them out to every client
//! subscribed to the conversation's room.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::{CompletionNotifier, ConsultationComplete};

use super::messages::ChatEvent;
use super::rooms::RoomManager;

/// Completion notifier that broadcasts into WebSocket rooms.
pub struct RoomCompletionNotifier {
    room_manager: Arc<RoomManager>,
}

impl RoomCompletionNotifier {
    /// Creates a notifier broadcasting through the given room manager.
    pub fn new(room_manager: Arc<RoomManager>) -> Self {
        Self { room_manager }
    }
}

#[async_trait]
impl CompletionNotifier for RoomCompletionNotifier {
    async fn notify(&self, notification: ConsultationComplete) -> Result<(), DomainError> {
        tracing::info!(
            conversation_id = %notification.conversation_id,
            "consultation complete, notifying room"
        );
        let conversation_id = notification.conversation_id.clone();
        self.room_manager
            .broadcast(&conversation_id, ChatEvent::Complete(notification))
            .await;
        Ok(())
    }
}
