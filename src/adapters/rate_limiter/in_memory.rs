//! In-memory rate limiter implementation.
//!
//! Uses a fixed-window counter algorithm with an in-memory HashMap.
//! Suitable for a single-server deployment; a shared backend would be
//! needed across multiple servers.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::ports::RateLimiter;

/// In-memory fixed-window rate limiter.
#[derive(Debug)]
pub struct InMemoryRateLimiter {
    /// Maximum requests allowed per window.
    limit: u32,
    /// Window duration.
    window: Duration,
    /// Per-key window state.
    windows: Mutex<HashMap<String, WindowState>>,
}

/// State for a single rate limit window.
#[derive(Debug, Clone, Copy)]
struct WindowState {
    count: u32,
    window_start: Instant,
}

impl InMemoryRateLimiter {
    /// Creates a rate limiter allowing `limit` requests per `window`.
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a limiter with defaults suited to chat traffic
    /// (30 requests per minute per key).
    pub fn with_defaults() -> Self {
        Self::new(30, Duration::from_secs(60))
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check_rate_limit(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        let state = windows.entry(key.to_string()).or_insert(WindowState {
            count: 0,
            window_start: now,
        });

        // Reset an expired window
        if now.duration_since(state.window_start) >= self.window {
            state.count = 0;
            state.window_start = now;
        }

        if state.count >= self.limit {
            return false;
        }

        state.count += 1;
        true
    }
}
