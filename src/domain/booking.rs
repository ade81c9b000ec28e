use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::PaymentStatus;

/// A court booking. Created `pending` by the booking checkout handler with
/// the Yoco checkout id attached after the provider call; the webhook marks
/// it `paid` and stores the provider payment id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub court_id: String,
    pub court_name: String,
    /// The requested slot, kept verbatim as supplied by the booking frontend.
    pub booking_time: String,
    pub sport: String,
    pub user_id: String,
    pub user_email: String,
    pub payment_status: PaymentStatus,
    pub amount: i64,
    pub currency: String,
    pub yoco_checkout_id: Option<String>,
    pub yoco_payment_id: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub court_id: String,
    pub court_name: String,
    pub booking_time: String,
    pub sport: String,
    pub user_id: String,
    pub user_email: String,
    pub amount: i64,
    pub currency: String,
}
