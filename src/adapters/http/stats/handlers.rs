//! HTTP handlers for the aggregate-counts endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::ports::{ConversationStore, PortfolioRepository, TeamRepository};

use super::super::error::ApiError;

/// Shared application state for stats handlers.
#[derive(Clone)]
pub struct StatsAppState {
    pub team: Arc<dyn TeamRepository>,
    pub portfolio: Arc<dyn PortfolioRepository>,
    pub conversations: Arc<dyn ConversationStore>,
}

impl StatsAppState {
    /// Creates a new StatsAppState.
    pub fn new(
        team: Arc<dyn TeamRepository>,
        portfolio: Arc<dyn PortfolioRepository>,
        conversations: Arc<dyn ConversationStore>,
    ) -> Self {
        Self {
            team,
            portfolio,
            conversations,
        }
    }
}

/// Simple aggregation counts for the studio dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub team_members: u64,
    pub portfolio_projects: u64,
    pub completed_consultations: u64,
}

/// GET /api/stats - Aggregate counts.
pub async fn get_stats(State(state): State<StatsAppState>) -> Result<impl IntoResponse, ApiError> {
    let team_members = state
        .team
        .count()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let portfolio_projects = state
        .portfolio
        .count()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let completed_consultations = state
        .conversations
        .completed_count()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(StatsView {
            team_members,
            portfolio_projects,
            completed_consultations,
        }),
    ))
}
