use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kyc_admin_api::config::Config;
use kyc_admin_api::db::Database;
use kyc_admin_api::services::{PgDeviceTokenStore, PushService};
use kyc_admin_api::{api, AppState};
use livra_fcm_shared::{FCMClient, ServiceAccountKey};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kyc_admin_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize database connections
    let db = Database::connect(&config).await?;
    tracing::info!("Database connections established");

    // Initialize the FCM client; bad key material aborts startup here.
    let credentials = ServiceAccountKey::new(
        config.firebase.project_id.clone(),
        config.firebase.client_email.clone(),
        config.firebase.private_key.clone(),
    );
    let fcm = Arc::new(FCMClient::new(credentials)?);
    let store = Arc::new(PgDeviceTokenStore::new(db.pg.clone()));
    let push = Arc::new(PushService::new(store, fcm));
    tracing::info!("Push delivery initialized");

    // Build application state
    let state = AppState {
        db,
        config: config.clone(),
        push,
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api::routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
