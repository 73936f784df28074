//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use auth::{AuthConfig, PgAccountRepository, TokenService, account_router, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use dogs::{PgDogRepository, dog_router};
use platform::storage::{HttpObjectStore, StorageConfig};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,dogs=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 = env::var("JWT_SECRET").expect("JWT_SECRET must be set in production");
        let token_secret = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;

        let password_pepper = env::var("PASSWORD_PEPPER")
            .ok()
            .map(|p| Engine::decode(&general_purpose::STANDARD, &p))
            .transpose()?;

        AuthConfig {
            token_secret,
            password_pepper,
            ..AuthConfig::default()
        }
    };

    // Optional token lifetime override (seconds)
    let auth_config = match env::var("TOKEN_TTL_SECS") {
        Ok(secs) => AuthConfig {
            token_ttl: Duration::from_secs(secs.parse()?),
            ..auth_config
        },
        Err(_) => auth_config,
    };

    let auth_config = Arc::new(auth_config);
    let tokens = Arc::new(TokenService::new(&auth_config));

    // Object storage for dog images
    let storage = HttpObjectStore::new(StorageConfig {
        endpoint: env::var("STORAGE_ENDPOINT").expect("STORAGE_ENDPOINT must be set"),
        bucket: env::var("STORAGE_BUCKET").unwrap_or_else(|_| "dogs".to_string()),
        api_key: env::var("STORAGE_API_KEY").expect("STORAGE_API_KEY must be set"),
        public_url: env::var("STORAGE_PUBLIC_URL").expect("STORAGE_PUBLIC_URL must be set"),
    });

    let account_repo = PgAccountRepository::new(pool.clone());
    let dog_repo = PgDogRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(account_repo.clone(), auth_config.clone(), tokens.clone()),
        )
        .nest(
            "/api/user",
            account_router(account_repo, auth_config.clone(), tokens.clone()),
        )
        .nest("/api/dog", dog_router(dog_repo, storage, tokens))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
