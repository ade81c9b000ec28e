pub mod handlers;
pub mod state;

use axum::{
    http::{header, HeaderName, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))

        // Checkout endpoints, called cross-origin from the club website
        .merge(checkout_routes())

        // Provider webhook; server-to-server, no CORS handling
        .route("/yoco-webhook", post(handlers::webhook::yoco_webhook))

        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn checkout_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route(
            "/create-membership-checkout",
            post(handlers::membership::create_membership_checkout).options(preflight),
        )
        .route(
            "/create-yoco-checkout",
            post(handlers::bookings::create_booking_checkout).options(preflight),
        )
        .layer(cors)
}

// Browsers that skip the CORS machinery still get a 200 on a bare OPTIONS.
async fn preflight() -> StatusCode {
    StatusCode::OK
}
