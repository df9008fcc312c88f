//! Atelier backend server binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the adapters
//! together, and serves the HTTP + WebSocket API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use atelier::adapters::http::{
    chat_routes, portfolio_routes, stats_routes, team_routes, upload_routes, ChatAppState,
    PortfolioAppState, StatsAppState, TeamAppState, UploadAppState,
};
use atelier::adapters::postgres::{
    PostgresConversationStore, PostgresPortfolioRepository, PostgresTeamRepository,
};
use atelier::adapters::rate_limiter::InMemoryRateLimiter;
use atelier::adapters::storage::LocalImageStorage;
use atelier::adapters::websocket::{websocket_router, RoomCompletionNotifier, RoomManager, WebSocketState};
use atelier::application::ChatService;
use atelier::config::AppConfig;
use atelier::ports::{ConversationStore, PortfolioRepository, TeamRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Repositories and stores
    let conversation_store: Arc<dyn ConversationStore> =
        Arc::new(PostgresConversationStore::new(pool.clone()));
    let team_repo: Arc<dyn TeamRepository> = Arc::new(PostgresTeamRepository::new(pool.clone()));
    let portfolio_repo: Arc<dyn PortfolioRepository> =
        Arc::new(PostgresPortfolioRepository::new(pool));

    // Real-time layer; completions are fanned out to conversation rooms.
    let room_manager = Arc::new(RoomManager::with_default_capacity());
    let notifier = Arc::new(RoomCompletionNotifier::new(room_manager.clone()));

    let chat = ChatService::new(conversation_store.clone(), notifier);
    let rate_limiter = Arc::new(InMemoryRateLimiter::with_defaults());
    let image_storage = Arc::new(LocalImageStorage::from_config(&config.uploads));

    let api = Router::new()
        .merge(chat_routes().with_state(
            ChatAppState::new(chat.clone()).with_rate_limiter(rate_limiter.clone()),
        ))
        .merge(team_routes().with_state(TeamAppState::new(team_repo.clone())))
        .merge(portfolio_routes().with_state(PortfolioAppState::new(portfolio_repo.clone())))
        .merge(upload_routes().with_state(
            UploadAppState::new(image_storage).with_rate_limiter(rate_limiter.clone()),
        ))
        .merge(stats_routes().with_state(StatsAppState::new(
            team_repo,
            portfolio_repo,
            conversation_store,
        )));

    let ws = websocket_router().with_state(
        WebSocketState::new(chat, room_manager).with_rate_limiter(rate_limiter),
    );

    let app = Router::new()
        .nest("/api", api)
        .nest("/ws", ws)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "atelier backend listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
