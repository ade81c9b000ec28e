use async_trait::async_trait;

use crate::{
    config::YocoConfig,
    error::{AppError, Result},
    payments::{CheckoutProvider, CheckoutRequest, CheckoutSession},
};

const FALLBACK_ERROR: &str = "Failed to create Yoco checkout session";

/// Client for the Yoco hosted-checkout API (`POST /v1/checkouts`).
pub struct YocoClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl YocoClient {
    pub fn new(config: YocoConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: config.secret_key,
            api_base: config.api_base,
        }
    }
}

#[async_trait]
impl CheckoutProvider for YocoClient {
    async fn create_checkout(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let url = format!("{}/checkouts", self.api_base);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Payment(format!("Yoco request failed: {}", e)))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Payment(format!("Invalid Yoco response: {}", e)))?;

        if !status.is_success() {
            // Yoco reports errors as {"message": "..."}; fall back to a
            // generic string when the body carries none.
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(FALLBACK_ERROR)
                .to_string();
            return Err(AppError::Payment(message));
        }

        serde_json::from_value(body)
            .map_err(|e| AppError::Payment(format!("Invalid Yoco response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn checkout_request_uses_yoco_field_names() {
        let request = CheckoutRequest {
            amount: 24000,
            currency: "ZAR".to_string(),
            external_id: "reg-1".to_string(),
            success_url: "https://club.example/book?status=reg_success&regId=reg-1".to_string(),
            cancel_url: "https://club.example/book?status=reg_cancel".to_string(),
            failure_url: "https://club.example/book?status=reg_failure".to_string(),
            metadata: json!({"plan": "adult-monthly"}),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["amount"], 24000);
        assert_eq!(body["externalId"], "reg-1");
        assert!(body["successUrl"].as_str().unwrap().contains("regId=reg-1"));
        assert!(body.get("external_id").is_none());
    }

    #[test]
    fn checkout_session_parses_provider_response() {
        let session: CheckoutSession = serde_json::from_value(json!({
            "id": "ch_Q7Vn",
            "redirectUrl": "https://pay.yoco.com/ch_Q7Vn",
            "status": "created",
            "amount": 15000
        }))
        .unwrap();

        assert_eq!(session.id, "ch_Q7Vn");
        assert_eq!(session.redirect_url, "https://pay.yoco.com/ch_Q7Vn");
    }
}
