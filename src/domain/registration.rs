use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::PaymentStatus;

/// A membership registration. Created `pending` by the membership checkout
/// handler; the Yoco checkout id is attached once the provider call succeeds,
/// and free-plan registrations are confirmed immediately instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
    pub plan: String,
    pub description: String,
    pub monthly_rate: i64,
    pub first_payment: i64,
    pub utr_dupr: Option<String>,
    pub payment_status: PaymentStatus,
    pub currency: String,
    pub yoco_checkout_id: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
    pub plan: String,
    pub description: String,
    pub monthly_rate: i64,
    pub first_payment: i64,
    pub utr_dupr: Option<String>,
    pub currency: String,
}
