use axum::{
    extract::{rejection::JsonRejection, Host, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    api::state::AppState,
    domain::{
        first_payment_amount, plan_price, resolve_plan_key, NewRegistration, CURRENCY,
        JOINING_FEE,
    },
    error::{AppError, Result},
    payments::CheckoutRequest,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipCheckoutRequest {
    pub plan: String,
    pub billing_cycle: Option<String>,
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
    pub utr_dupr: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MembershipCheckoutResponse {
    /// Paid plan: the caller follows the hosted checkout page.
    Redirect {
        #[serde(rename = "redirectUrl")]
        redirect_url: String,
    },
    /// Free league path: confirmed immediately, no provider call.
    Confirmed { success: bool, message: String },
}

pub async fn create_membership_checkout(
    State(state): State<AppState>,
    Host(host): Host,
    payload: std::result::Result<Json<MembershipCheckoutRequest>, JsonRejection>,
) -> Result<Json<MembershipCheckoutResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // 1. Resolve the plan key and price before touching the store; an
    //    unknown plan writes nothing.
    let plan_key = resolve_plan_key(&request.plan, request.billing_cycle.as_deref());
    let plan = plan_price(&plan_key)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown plan: {}", plan_key)))?;
    let first_payment = first_payment_amount(&plan_key, plan.monthly);

    // 2. Record the registration as pending.
    let registration = state
        .registrations
        .create(NewRegistration {
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            whatsapp: request.whatsapp,
            plan: plan_key.clone(),
            description: plan.description.to_string(),
            monthly_rate: plan.monthly,
            first_payment,
            utr_dupr: request.utr_dupr,
            currency: CURRENCY.to_string(),
        })
        .await?;

    // 3. Free league registrations skip the provider entirely.
    if first_payment == 0 {
        state.registrations.mark_confirmed(registration.id).await?;
        tracing::info!("Registration {} confirmed without payment", registration.id);
        return Ok(Json(MembershipCheckoutResponse::Confirmed {
            success: true,
            message: "League registration confirmed!".to_string(),
        }));
    }

    // 4. Create the Yoco checkout session, with callback URLs pointing back
    //    at the requesting host.
    let return_base = format!("https://{}{}", host, state.settings.server.return_path);
    let session = state
        .checkout
        .create_checkout(CheckoutRequest {
            amount: first_payment,
            currency: CURRENCY.to_string(),
            external_id: registration.id.to_string(),
            success_url: format!("{}?status=reg_success&regId={}", return_base, registration.id),
            cancel_url: format!("{}?status=reg_cancel", return_base),
            failure_url: format!("{}?status=reg_failure", return_base),
            metadata: json!({
                "registrationId": registration.id,
                "plan": plan_key,
                "name": request.full_name,
                "email": request.email,
                "planFee": plan.monthly,
                "joiningFee": JOINING_FEE,
            }),
        })
        .await?;

    // 5. Store the session id on the registration record.
    state
        .registrations
        .set_checkout_id(registration.id, &session.id)
        .await?;

    Ok(Json(MembershipCheckoutResponse::Redirect {
        redirect_url: session.redirect_url,
    }))
}
