use axum::{extract::State, Json};
use domain_types::wallet::{GooglePayButtonData, WalletPaymentIntent};
use serde::Serialize;

use super::CheckoutSession;
use crate::{app::AppState, error::ApiError, flows::wallet};

/// Button data together with the `paymentIntent` the wallet SDK is initialised with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayButtonResponse {
    #[serde(flatten)]
    pub button: GooglePayButtonData,
    pub payment_intent: WalletPaymentIntent,
}

pub async fn google_pay_button(
    State(state): State<AppState>,
    session: CheckoutSession,
) -> Result<Json<GooglePayButtonResponse>, ApiError> {
    let button = wallet::google_pay_button(
        &state.services,
        &state.wallet_settings(),
        &session.id,
        &session.lang,
    )
    .await?;
    let payment_intent = WalletPaymentIntent::from(&button);

    Ok(Json(GooglePayButtonResponse {
        button,
        payment_intent,
    }))
}
