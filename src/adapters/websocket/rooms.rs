//! WebSocket room management for conversation-based message routing.
//!
//! Rooms are organized by conversation id, allowing targeted broadcast of
//! chat responses and completion notifications to every client following
//! a specific conversation.

use std::collections::HashMap;

use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::domain::foundation::ConversationId;

use super::messages::ChatEvent;

/// Unique identifier for a WebSocket client connection.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Create a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Manages WebSocket connection rooms organized by conversation.
///
/// Provides:
/// - Client join/leave operations
/// - Broadcast to all clients following a conversation
/// - Automatic cleanup of empty rooms
///
/// # Thread Safety
///
/// Uses `RwLock` for the room registry since broadcasts (reads) vastly
/// outnumber joins/leaves (writes).
pub struct RoomManager {
    /// Map of conversation_id → broadcast sender for that room.
    rooms: RwLock<HashMap<ConversationId, broadcast::Sender<ChatEvent>>>,

    /// Map of client_id → conversation_id for O(1) cleanup on disconnect.
    client_rooms: RwLock<HashMap<ClientId, ConversationId>>,

    /// Channel capacity for each room's broadcast channel.
    channel_capacity: usize,
}

impl RoomManager {
    /// Create a new room manager with specified channel capacity.
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            client_rooms: RwLock::new(HashMap::new()),
            channel_capacity,
        }
    }

    /// Create with default capacity (128 messages).
    pub fn with_default_capacity() -> Self {
        Self::new(128)
    }

    /// Join a client to a conversation room.
    ///
    /// If the room doesn't exist, it's created automatically.
    /// Returns a receiver for chat events in that room.
    pub async fn join(
        &self,
        conversation_id: &ConversationId,
        client_id: ClientId,
    ) -> broadcast::Receiver<ChatEvent> {
        let mut rooms = self.rooms.write().await;

        let sender = rooms.entry(conversation_id.clone()).or_insert_with(|| {
            let (tx, _) = broadcast::channel(self.channel_capacity);
            tx
        });

        self.client_rooms
            .write()
            .await
            .insert(client_id, conversation_id.clone());

        sender.subscribe()
    }

    /// Remove a client from their conversation room.
    ///
    /// If the room becomes empty, it's automatically cleaned up.
    pub async fn leave(&self, client_id: &ClientId) {
        let mut client_rooms = self.client_rooms.write().await;

        if let Some(conversation_id) = client_rooms.remove(client_id) {
            let rooms = self.rooms.read().await;
            if let Some(sender) = rooms.get(&conversation_id) {
                if sender.receiver_count() == 0 {
                    drop(rooms);
                    self.rooms.write().await.remove(&conversation_id);
                }
            }
        }
    }

    /// Broadcast an event to all clients following a conversation.
    ///
    /// If no clients are in the room, this is a no-op.
    pub async fn broadcast(&self, conversation_id: &ConversationId, event: ChatEvent) {
        let rooms = self.rooms.read().await;

        if let Some(sender) = rooms.get(conversation_id) {
            // Ignore send errors (no receivers is OK)
            let _ = sender.send(event);
        }
    }

    /// Get count of connected clients in a specific room.
    pub async fn client_count(&self, conversation_id: &ConversationId) -> usize {
        let rooms = self.rooms.read().await;
        rooms
            .get(conversation_id)
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }

    /// Get all active room IDs (for monitoring/debugging).
    pub async fn active_rooms(&self) -> Vec<ConversationId> {
        self.rooms.read().await.keys().cloned().collect()
    }

    /// Get total count of connected clients across all rooms.
    pub async fn total_client_count(&self) -> usize {
        self.client_rooms.read().await.len()
    }
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
