//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chrono::Duration;
use tokio::net::TcpListener;
use track_common::{AppConfig, AppError, GithubOAuth, JwtService};
use track_db::{
    create_pool, run_migrations, PgActivityRepository, PgCourseRepository, PgInviteRepository,
    PgProfileRepository, PgRatingRepository, PgShareRepository, PgStudentRepository,
};
use track_service::ServiceContextBuilder;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes bypass the rate limiter so probes are never throttled.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = track_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create GitHub OAuth client
    let github_oauth = Arc::new(GithubOAuth::new(config.github.clone()));

    // Create repositories
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let course_repo = Arc::new(PgCourseRepository::new(pool.clone()));
    let student_repo = Arc::new(PgStudentRepository::new(pool.clone()));
    let activity_repo = Arc::new(PgActivityRepository::new(pool.clone()));
    let rating_repo = Arc::new(PgRatingRepository::new(pool.clone()));
    let invite_repo = Arc::new(PgInviteRepository::new(pool.clone()));
    let share_repo = Arc::new(PgShareRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .profile_repo(profile_repo)
        .course_repo(course_repo)
        .student_repo(student_repo)
        .activity_repo(activity_repo)
        .rating_repo(rating_repo)
        .invite_repo(invite_repo)
        .share_repo(share_repo)
        .jwt_service(jwt_service)
        .github_oauth(github_oauth)
        .invite_ttl(Duration::days(config.invite.ttl_days))
        .invite_origin(config.invite.origin.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
