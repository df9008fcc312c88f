//! Completion notifier port.
//!
//! When a consultation finishes, the orchestrator emits a notification
//! through this port; the transport layer decides how to fan it out to
//! subscribers of the conversation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::chatbot::CollectedData;
use crate::domain::foundation::{ConversationId, DomainError};

/// Payload broadcast when a consultation questionnaire completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationComplete {
    pub conversation_id: ConversationId,
    pub collected_data: CollectedData,
    pub next_steps: Vec<String>,
}

/// Port for publishing consultation completion notifications.
///
/// Implementations deliver best-effort; a lost notification must not
/// fail the message that produced it.
#[async_trait]
pub trait CompletionNotifier: Send + Sync {
    /// Publish a completion notification.
    async fn notify(&self, notification: ConsultationComplete) -> Result<(), DomainError>;
}

/// Notifier that discards everything, for transports without listeners.
pub struct NoopCompletionNotifier;

#[async_trait]
impl CompletionNotifier for NoopCompletionNotifier {
    async fn notify(&self, _notification: ConsultationComplete) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn CompletionNotifier) {}
    }

    #[tokio::test]
    async fn noop_notifier_accepts_everything() {
        let notifier = NoopCompletionNotifier;
        let notification = ConsultationComplete {
            conversation_id: ConversationId::new("conv-1").unwrap(),
            collected_data: CollectedData::default(),
            next_steps: vec![],
        };
        assert!(notifier.notify(notification).await.is_ok());
    }

    #[test]
    fn notification_serializes_to_camel_case() {
        let notification = ConsultationComplete {
            conversation_id: ConversationId::new("conv-1").unwrap(),
            collected_data: CollectedData::default(),
            next_steps: vec!["step".to_string()],
        };
        let json = serde_json::to_string(&notification).unwrap();
        assert!(json.contains(r#""conversationId":"conv-1""#));
        assert!(json.contains(r#""nextSteps""#));
    }
}
