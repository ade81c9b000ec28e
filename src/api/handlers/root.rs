use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Courtside API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Checkout service for court bookings and club memberships",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "membership_checkout": "/create-membership-checkout",
            "booking_checkout": "/create-yoco-checkout",
            "webhook": "/yoco-webhook"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
