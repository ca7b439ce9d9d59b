use common_utils::{types::MinorUnit, CustomResult};
use domain_types::{
    errors::StorageError,
    wallet::{GooglePayButtonData, GooglePaySettings},
};
use hyperswitch_masking::{PeekInterface, Secret};

use super::CheckoutServices;

/// Shop wide inputs of the Google Pay button.
#[derive(Debug, Clone)]
pub struct WalletSettings {
    pub client_key: Secret<String>,
    pub google_pay: GooglePaySettings,
    pub webstore_name: String,
    pub process_payment_url: String,
}

#[tracing::instrument(skip_all, fields(session_id = %session_id))]
pub async fn google_pay_button(
    services: &CheckoutServices,
    settings: &WalletSettings,
    session_id: &str,
    lang: &str,
) -> CustomResult<GooglePayButtonData, StorageError> {
    let basket = services.baskets.load_basket(session_id).await?;
    let order_amount = MinorUnit::from_major_unit_as_f64(basket.basket_amount).unwrap_or_else(
        |error| {
            tracing::warn!(?error, "basket amount is not a finite number");
            MinorUnit::zero()
        },
    );
    let google_pay = &settings.google_pay;
    let seller_name = google_pay
        .seller_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(settings.webstore_name.as_str())
        .to_string();

    Ok(GooglePayButtonData {
        client_key: Secret::new(settings.client_key.peek().trim().to_string()),
        merchant_id: google_pay.merchant_id.clone(),
        seller_name,
        enforce: google_pay.enforce_3d,
        button_type: google_pay.button_type.clone(),
        button_theme: google_pay.button_theme.clone(),
        button_height: google_pay.button_height,
        test_mode: google_pay.test_mode.into(),
        order_amount,
        currency: basket.currency.clone(),
        order_lang: lang.to_uppercase(),
        country_code: basket.country_code().to_string(),
        process_payment_url: settings.process_payment_url.clone(),
    })
}
