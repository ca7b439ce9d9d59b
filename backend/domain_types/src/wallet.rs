use common_enums::{ApiStatus, WalletEnvironment};
use common_utils::types::MinorUnit;
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

/// Merchant side settings of the Google Pay button.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GooglePaySettings {
    /// Google merchant id issued to the shop
    pub merchant_id: String,
    /// Business name shown on the payment sheet; falls back to the webstore name
    pub seller_name: Option<String>,
    pub enforce_3d: bool,
    pub button_type: String,
    pub button_theme: String,
    pub button_height: u16,
    pub test_mode: bool,
}

/// Data the storefront needs to render the Google Pay button.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayButtonData {
    pub client_key: Secret<String>,
    pub merchant_id: String,
    pub seller_name: String,
    pub enforce: bool,
    pub button_type: String,
    pub button_theme: String,
    pub button_height: u16,
    pub test_mode: WalletEnvironment,
    pub order_amount: MinorUnit,
    pub currency: String,
    pub order_lang: String,
    pub country_code: String,
    pub process_payment_url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletMerchant {
    pub payment_data_present: bool,
    pub country_code: String,
    pub partner_id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    /// Minor units, as a string
    pub amount: String,
    pub currency: String,
    pub enforce3d: bool,
    pub payment_method: String,
    pub environment: WalletEnvironment,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WalletCustom {
    pub lang: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletOrder {
    pub payment_data_present: bool,
    pub merchant_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ButtonDimensions {
    pub height: u16,
    pub width: u16,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletButton {
    #[serde(rename = "type")]
    pub button_type: String,
    pub style: String,
    pub locale: String,
    pub box_sizing: String,
    pub dimensions: ButtonDimensions,
}

/// The `paymentIntent` object handed to the wallet SDK.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WalletPaymentIntent {
    pub merchant: WalletMerchant,
    pub transaction: WalletTransaction,
    pub custom: WalletCustom,
    pub order: WalletOrder,
    pub button: WalletButton,
}

const WALLET_PAYMENT_METHOD: &str = "GOOGLEPAY";
const BUTTON_LOCALE: &str = "en-US";
const BUTTON_BOX_SIZING: &str = "fill";
const BUTTON_WIDTH: u16 = 200;

impl From<&GooglePayButtonData> for WalletPaymentIntent {
    fn from(data: &GooglePayButtonData) -> Self {
        Self {
            merchant: WalletMerchant {
                payment_data_present: false,
                country_code: data.country_code.clone(),
                partner_id: data.merchant_id.clone(),
            },
            transaction: WalletTransaction {
                amount: data.order_amount.to_string(),
                currency: data.currency.clone(),
                enforce3d: data.enforce,
                payment_method: WALLET_PAYMENT_METHOD.to_string(),
                environment: data.test_mode,
            },
            custom: WalletCustom {
                lang: data.order_lang.clone(),
            },
            order: WalletOrder {
                payment_data_present: false,
                merchant_name: data.seller_name.clone(),
            },
            button: WalletButton {
                button_type: data.button_type.clone(),
                style: data.button_theme.clone(),
                locale: BUTTON_LOCALE.to_string(),
                box_sizing: BUTTON_BOX_SIZING.to_string(),
                dimensions: ButtonDimensions {
                    height: data.button_height,
                    width: BUTTON_WIDTH,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WalletCompletionResult {
    #[serde(default)]
    pub status: String,
    pub status_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletCompletionTransaction {
    pub token: Option<String>,
    #[serde(default)]
    pub do_redirect: Option<serde_json::Value>,
}

/// Response passed by the wallet SDK to its process-completion callback.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WalletCompletion {
    pub result: WalletCompletionResult,
    #[serde(default)]
    pub transaction: WalletCompletionTransaction,
}

/// Hidden form fields posted to the payment endpoint after a wallet approval.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WalletFormFields {
    pub nn_google_pay_token: String,
    pub nn_google_pay_do_redirect: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WalletCompletionOutcome {
    Submit(WalletFormFields),
    /// Text to show the shopper; `None` when the SDK sent none
    Display(Option<String>),
}

impl WalletCompletion {
    pub fn outcome(self) -> WalletCompletionOutcome {
        if ApiStatus::from_gateway(&self.result.status).is_success() {
            let do_redirect = match self.transaction.do_redirect {
                Some(serde_json::Value::String(value)) => value,
                Some(serde_json::Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            WalletCompletionOutcome::Submit(WalletFormFields {
                nn_google_pay_token: self.transaction.token.unwrap_or_default(),
                nn_google_pay_do_redirect: do_redirect,
            })
        } else {
            WalletCompletionOutcome::Display(
                self.result.status_text.filter(|text| !text.is_empty()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_data() -> GooglePayButtonData {
        GooglePayButtonData {
            client_key: Secret::new("client".to_string()),
            merchant_id: "BCR2DN4T".to_string(),
            seller_name: "Demo Shop".to_string(),
            enforce: true,
            button_type: "buy".to_string(),
            button_theme: "black".to_string(),
            button_height: 40,
            test_mode: WalletEnvironment::Sandbox,
            order_amount: MinorUnit::new(1999),
            currency: "EUR".to_string(),
            order_lang: "DE".to_string(),
            country_code: "DE".to_string(),
            process_payment_url: "/payment/novalnet/processPayment".to_string(),
        }
    }

    #[test]
    fn payment_intent_has_sdk_shape() {
        let intent = WalletPaymentIntent::from(&button_data());
        let value = serde_json::to_value(&intent).unwrap_or_default();
        assert_eq!(value["merchant"]["partnerId"], "BCR2DN4T");
        assert_eq!(value["transaction"]["amount"], "1999");
        assert_eq!(value["transaction"]["paymentMethod"], "GOOGLEPAY");
        assert_eq!(value["transaction"]["environment"], "SANDBOX");
        assert_eq!(value["order"]["merchantName"], "Demo Shop");
        assert_eq!(value["button"]["type"], "buy");
        assert_eq!(value["button"]["boxSizing"], "fill");
        assert_eq!(value["button"]["dimensions"]["width"], 200);
        assert_eq!(value["custom"]["lang"], "DE");
    }

    #[test]
    fn successful_completion_fills_form() {
        let completion: WalletCompletion = serde_json::from_value(serde_json::json!({
            "result": {"status": "SUCCESS"},
            "transaction": {"token": "tok_123", "doRedirect": true}
        }))
        .unwrap_or_default();
        assert_eq!(
            completion.outcome(),
            WalletCompletionOutcome::Submit(WalletFormFields {
                nn_google_pay_token: "tok_123".to_string(),
                nn_google_pay_do_redirect: "true".to_string(),
            })
        );
    }

    #[test]
    fn failed_completion_shows_status_text() {
        let completion: WalletCompletion = serde_json::from_value(serde_json::json!({
            "result": {"status": "FAILURE", "status_text": "Card declined"}
        }))
        .unwrap_or_default();
        assert_eq!(
            completion.outcome(),
            WalletCompletionOutcome::Display(Some("Card declined".to_string()))
        );
    }
}
