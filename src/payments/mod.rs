use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod yoco_client;

pub use yoco_client::YocoClient;

/// Request for a hosted checkout session. Field names follow the Yoco wire
/// format; `external_id` carries the local record id so the provider's
/// webhook can be matched back to a row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub amount: i64,
    pub currency: String,
    pub external_id: String,
    pub success_url: String,
    pub cancel_url: String,
    pub failure_url: String,
    pub metadata: serde_json::Value,
}

/// A created checkout session: the provider's session id and the hosted
/// payment page the caller is redirected to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub id: String,
    pub redirect_url: String,
}

#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn create_checkout(&self, request: CheckoutRequest) -> Result<CheckoutSession>;
}
