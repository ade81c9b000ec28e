use serde::{Deserialize, Serialize};

/// Payment lifecycle of a checkout record. Status only moves forward:
/// `Pending` -> `Confirmed` (free registrations) or `Pending` -> `Paid`
/// (provider-confirmed payments). There is no backward transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Confirmed => "confirmed",
            PaymentStatus::Paid => "paid",
        }
    }
}
