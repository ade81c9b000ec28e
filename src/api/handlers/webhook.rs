use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    api::state::AppState,
    error::{AppError, Result},
};

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

/// Handles Yoco payment callbacks. Only `payment.succeeded` triggers a
/// store write; every other event type is acknowledged untouched. The
/// payload's `externalId` is the booking id this service handed to the
/// provider at checkout time.
pub async fn yoco_webhook(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<WebhookAck>> {
    let Json(event) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let event_type = event.get("type").and_then(Value::as_str).unwrap_or_default();
    tracing::info!("Received Yoco webhook: {}", event_type);

    if event_type == "payment.succeeded" {
        let payment = event
            .get("payload")
            .ok_or_else(|| AppError::BadRequest("Missing payload in webhook event".to_string()))?;

        let external_id = payment
            .get("externalId")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::BadRequest("Missing externalId in payment payload".to_string()))?;

        let booking_id = Uuid::parse_str(external_id)
            .map_err(|_| AppError::BadRequest(format!("Invalid booking id: {}", external_id)))?;

        let payment_id = payment
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::BadRequest("Missing payment id in payment payload".to_string()))?;

        if state.bookings.mark_paid(booking_id, payment_id).await? {
            tracing::info!("Booking {} confirmed via webhook", booking_id);
        } else {
            tracing::warn!("Webhook referenced unknown booking {}", booking_id);
        }
    }

    Ok(Json(WebhookAck { received: true }))
}
