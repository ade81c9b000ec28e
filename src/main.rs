use std::sync::Arc;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courtside::{
    api::{self, state::AppState},
    config::Settings,
    payments::YocoClient,
    repository::{SqliteBookingRepository, SqliteRegistrationRepository},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courtside=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; the Yoco secret key is required, so a missing
    // config is fatal here rather than at the first checkout.
    let settings = Settings::new()?;

    tracing::info!("Starting Courtside server on {}:{}", settings.server.host, settings.server.port);

    // Initialize database
    let db_pool = SqlitePoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await?;

    // Initialize repositories
    let registration_repo = Arc::new(SqliteRegistrationRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(SqliteBookingRepository::new(db_pool.clone()));

    // Initialize the Yoco client
    let yoco_client = Arc::new(YocoClient::new(settings.yoco.clone()));

    let state = AppState::new(
        registration_repo,
        booking_repo,
        yoco_client,
        Arc::new(settings.clone()),
    );

    let app = api::create_app(state);

    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", settings.server.host, settings.server.port)
    ).await?;

    tracing::info!("Server listening on http://{}:{}", settings.server.host, settings.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}
