use axum::{
    extract::{rejection::JsonRejection, Host, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    api::state::AppState,
    domain::{NewBooking, BOOKING_FEE, CURRENCY},
    error::{AppError, Result},
    payments::CheckoutRequest,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCheckoutRequest {
    pub court: CourtRef,
    pub time: String,
    pub sport: String,
    pub user_id: String,
    pub user_email: String,
}

#[derive(Debug, Deserialize)]
pub struct CourtRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct BookingCheckoutResponse {
    #[serde(rename = "redirectUrl")]
    pub redirect_url: String,
}

pub async fn create_booking_checkout(
    State(state): State<AppState>,
    Host(host): Host,
    payload: std::result::Result<Json<BookingCheckoutRequest>, JsonRejection>,
) -> Result<Json<BookingCheckoutResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // 1. Record the booking as pending at the fixed court fee.
    let booking = state
        .bookings
        .create(NewBooking {
            court_id: request.court.id,
            court_name: request.court.name.clone(),
            booking_time: request.time.clone(),
            sport: request.sport,
            user_id: request.user_id,
            user_email: request.user_email,
            amount: BOOKING_FEE,
            currency: CURRENCY.to_string(),
        })
        .await?;

    // 2. Create the Yoco checkout session.
    let return_base = format!("https://{}{}", host, state.settings.server.return_path);
    let session = state
        .checkout
        .create_checkout(CheckoutRequest {
            amount: BOOKING_FEE,
            currency: CURRENCY.to_string(),
            external_id: booking.id.to_string(),
            success_url: format!("{}?status=success&bookingId={}", return_base, booking.id),
            cancel_url: format!("{}?status=cancel", return_base),
            failure_url: format!("{}?status=failure", return_base),
            metadata: json!({
                "bookingId": booking.id,
                "court": request.court.name,
                "time": request.time,
            }),
        })
        .await?;

    // 3. Store the session id on the booking record.
    state.bookings.set_checkout_id(booking.id, &session.id).await?;

    Ok(Json(BookingCheckoutResponse {
        redirect_url: session.redirect_url,
    }))
}
