//! Conversation orchestrator.
//!
//! The single entry point for processing one chatbot message, invoked
//! identically from the HTTP handler and the WebSocket handler. Loads the
//! latest context, matches the intent, generates the response, commits
//! gated field writes, persists the exchange, and emits a completion
//! notification when the questionnaire finishes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::chatbot::{generate, match_intent, ConversationContext};
use crate::domain::foundation::{ConversationId, DomainError, ParticipantId, RecordId, Timestamp};
use crate::ports::{
    ChatRecord, CompletionNotifier, ConsultationComplete, ConversationStore, RecordKind,
    TransportMetadata,
};

/// Reply sent when message processing fails internally. Callers still
/// receive a normal outcome; failures are absorbed, never propagated.
const APOLOGY_MESSAGE: &str =
    "I'm sorry, something went wrong on our end. Could you try sending that again?";

/// The result of processing one message, serialized as-is to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatOutcome {
    pub response: String,
    pub intent_kind: String,
    pub confidence: f64,
    pub context: ConversationContext,
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<Vec<String>>,
}

/// Orchestrates the consultation chatbot.
///
/// Stateless between calls: every message re-fetches the latest context
/// by conversation id, so concurrent handlers for the same conversation
/// never share in-process state. Two simultaneous messages for one
/// conversation id are a last-write-wins race by design.
#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn ConversationStore>,
    notifier: Arc<dyn CompletionNotifier>,
}

impl ChatService {
    /// Creates a new ChatService.
    pub fn new(store: Arc<dyn ConversationStore>, notifier: Arc<dyn CompletionNotifier>) -> Self {
        Self { store, notifier }
    }

    /// Processes one inbound message and returns the outcome.
    ///
    /// Never returns an error: internal failures produce the fixed
    /// apology outcome so transports can always deliver a reply.
    pub async fn process_message(
        &self,
        message: &str,
        conversation_id: &ConversationId,
        participant_id: &ParticipantId,
        metadata: TransportMetadata,
    ) -> ChatOutcome {
        match self
            .try_process(message, conversation_id, participant_id, metadata)
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(
                    conversation_id = %conversation_id,
                    error = %err,
                    "chat processing failed, returning apology outcome"
                );
                Self::apology_outcome()
            }
        }
    }

    async fn try_process(
        &self,
        message: &str,
        conversation_id: &ConversationId,
        participant_id: &ParticipantId,
        metadata: TransportMetadata,
    ) -> Result<ChatOutcome, DomainError> {
        // A store outage degrades to restarting the flow rather than
        // failing the request.
        let mut context = match self.store.latest_context(conversation_id).await {
            Ok(Some(context)) => context,
            Ok(None) => ConversationContext::initial(),
            Err(err) => {
                tracing::warn!(
                    conversation_id = %conversation_id,
                    error = %err,
                    "context fetch failed, starting conversation fresh"
                );
                ConversationContext::initial()
            }
        };

        let step = context.current_step;
        let intent = match_intent(message, step);
        let response = generate(&intent, message, &context);

        // The commit gate is authoritative here: proposed writes land only
        // above the confidence threshold, except the verbatim steps which
        // record unconditionally.
        if intent.clears_gate() || step.records_verbatim() {
            context.collected_data.merge_from(&response.proposed);
        }
        context.current_step = response.next_step;

        tracing::debug!(
            conversation_id = %conversation_id,
            step = step.label(),
            next_step = response.next_step.label(),
            intent = %intent.kind,
            confidence = intent.confidence,
            "processed chat message"
        );

        self.persist_exchange(
            message,
            conversation_id,
            participant_id,
            &intent.kind,
            intent.confidence,
            &response.message,
            &context,
            metadata,
        )
        .await;

        if response.is_complete {
            let notification = ConsultationComplete {
                conversation_id: conversation_id.clone(),
                collected_data: context.collected_data.clone(),
                next_steps: response
                    .next_steps
                    .clone()
                    .unwrap_or_default(),
            };
            if let Err(err) = self.notifier.notify(notification).await {
                tracing::error!(
                    conversation_id = %conversation_id,
                    error = %err,
                    "completion notification failed"
                );
            }
        }

        Ok(ChatOutcome {
            response: response.message,
            intent_kind: intent.kind,
            confidence: intent.confidence,
            context,
            is_complete: response.is_complete,
            next_steps: response.next_steps,
        })
    }

    /// Appends the user and bot records for one exchange, both carrying
    /// the same resulting context snapshot. Append failures are logged
    /// and absorbed.
    #[allow(clippy::too_many_arguments)]
    async fn persist_exchange(
        &self,
        message: &str,
        conversation_id: &ConversationId,
        participant_id: &ParticipantId,
        intent_kind: &str,
        confidence: f64,
        response: &str,
        context: &ConversationContext,
        metadata: TransportMetadata,
    ) {
        let created_at = Timestamp::now();
        for kind in [RecordKind::User, RecordKind::Bot] {
            let record = ChatRecord {
                id: RecordId::new(),
                conversation_id: conversation_id.clone(),
                participant_id: participant_id.clone(),
                message: message.to_string(),
                response: response.to_string(),
                kind,
                intent_kind: intent_kind.to_string(),
                confidence,
                context: context.clone(),
                metadata: metadata.clone(),
                created_at,
            };
            if let Err(err) = self.store.append(record).await {
                tracing::error!(
                    conversation_id = %conversation_id,
                    error = %err,
                    "failed to append chat record"
                );
            }
        }
    }

    fn apology_outcome() -> ChatOutcome {
        ChatOutcome {
            response: APOLOGY_MESSAGE.to_string(),
            intent_kind: "error".to_string(),
            confidence: 0.0,
            context: ConversationContext::default(),
            is_complete: false,
            next_steps: None,
        }
    }

    /// The store this service persists through.
    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }
}
