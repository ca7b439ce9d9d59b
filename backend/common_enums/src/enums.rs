use serde::{Deserialize, Serialize};

/// Storefront keys of the Novalnet payment methods offered at checkout.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum PaymentMethodKey {
    #[serde(rename = "NOVALNET_SEPA")]
    #[strum(serialize = "NOVALNET_SEPA")]
    Sepa,
    #[serde(rename = "NOVALNET_GUARANTEED_SEPA")]
    #[strum(serialize = "NOVALNET_GUARANTEED_SEPA")]
    GuaranteedSepa,
    #[serde(rename = "NOVALNET_INVOICE")]
    #[strum(serialize = "NOVALNET_INVOICE")]
    Invoice,
    #[serde(rename = "NOVALNET_GUARANTEED_INVOICE")]
    #[strum(serialize = "NOVALNET_GUARANTEED_INVOICE")]
    GuaranteedInvoice,
    #[serde(rename = "NOVALNET_PREPAYMENT")]
    #[strum(serialize = "NOVALNET_PREPAYMENT")]
    Prepayment,
    #[serde(rename = "NOVALNET_CC")]
    #[strum(serialize = "NOVALNET_CC")]
    Card,
    #[serde(rename = "NOVALNET_GOOGLEPAY")]
    #[strum(serialize = "NOVALNET_GOOGLEPAY")]
    GooglePay,
    #[serde(rename = "NOVALNET_PAYPAL")]
    #[strum(serialize = "NOVALNET_PAYPAL")]
    Paypal,
    #[serde(rename = "NOVALNET_IDEAL")]
    #[strum(serialize = "NOVALNET_IDEAL")]
    Ideal,
    #[serde(rename = "NOVALNET_SOFORT")]
    #[strum(serialize = "NOVALNET_SOFORT")]
    OnlineTransfer,
}

/// Status of a gateway API call (`result.status`).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ApiStatus {
    Success,
    #[default]
    Failure,
    Pending,
}

impl ApiStatus {
    /// Anything the gateway sends that is not a known status counts as a failure.
    pub fn from_gateway(value: &str) -> Self {
        value.trim().parse().unwrap_or(Self::Failure)
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Status of the transaction itself (`transaction.status`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Success,
    Failure,
    Confirmed,
    OnHold,
    Pending,
    Deactivated,
    Progress,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationSeverity {
    Success,
    Error,
    Warning,
    Info,
}

/// Wallet SDK environment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum WalletEnvironment {
    Sandbox,
    #[default]
    Production,
}

impl From<bool> for WalletEnvironment {
    fn from(test_mode: bool) -> Self {
        if test_mode {
            Self::Sandbox
        } else {
            Self::Production
        }
    }
}

/// Whether the gateway call captures immediately or only authorizes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentAction {
    #[default]
    Capture,
    Authorize,
}

/// Handling of a missing or non-numeric order amount on the payment form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AmountPolicy {
    #[default]
    DefaultToZero,
    Reject,
}
