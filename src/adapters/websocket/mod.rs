//! WebSocket adapter - real-time mirror of the chat endpoint.
//!
//! Clients connect per conversation; chat messages sent over the socket
//! drive the same orchestrator as the HTTP route, and outcomes plus
//! completion notifications are broadcast to the conversation's room.

mod handler;
mod messages;
mod notifier;
mod rooms;

pub use handler::{websocket_router, ws_handler, WebSocketState};
pub use messages::{ChatEvent, ClientMessage, ServerMessage};
pub use notifier::RoomCompletionNotifier;
pub use rooms::{ClientId, RoomManager};
