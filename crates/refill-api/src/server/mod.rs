//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use refill_common::{AppConfig, AppError};
use refill_db::{
    create_pool, run_migrations, PgBottleRepository, PgConsumerTestAnswerRepository,
    PgConsumerTestQuestionRepository, PgConsumerTestRepository, PgLikeRepository, PgPool,
    PgProblemRepository, PgReviewRepository, PgStationRepository, PgTransactionRepository,
    PgUserRepository, PoolConfig,
};
use refill_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Wire the PostgreSQL repositories into a service context
pub fn build_service_context(pool: &PgPool) -> Result<ServiceContext, AppError> {
    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .bottle_repo(Arc::new(PgBottleRepository::new(pool.clone())))
        .station_repo(Arc::new(PgStationRepository::new(pool.clone())))
        .review_repo(Arc::new(PgReviewRepository::new(pool.clone())))
        .problem_repo(Arc::new(PgProblemRepository::new(pool.clone())))
        .transaction_repo(Arc::new(PgTransactionRepository::new(pool.clone())))
        .like_repo(Arc::new(PgLikeRepository::new(pool.clone())))
        .consumer_test_repo(Arc::new(PgConsumerTestRepository::new(pool.clone())))
        .question_repo(Arc::new(PgConsumerTestQuestionRepository::new(pool.clone())))
        .answer_repo(Arc::new(PgConsumerTestAnswerRepository::new(pool.clone())))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        info!("Running database migrations...");
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database migrations applied");
    }

    let service_context = build_service_context(&pool)?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    if let Ok(local) = listener.local_addr() {
        info!("Server listening on http://{}", local);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}
