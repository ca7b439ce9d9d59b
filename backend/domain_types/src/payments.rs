use common_enums::{ApiStatus, PaymentMethodKey, TransactionStatus};
use common_utils::{pii, types::MinorUnit};
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub first_name: Secret<String>,
    pub last_name: Secret<String>,
    pub email: Option<pii::Email>,
    pub billing: BillingAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingAddress {
    pub house_no: Option<Secret<String>>,
    pub street: Secret<String>,
    pub city: String,
    pub zip: Secret<String>,
    /// ISO 3166-1 alpha-2
    pub country_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SepaAccount {
    pub iban: Secret<String, pii::IbanStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<Secret<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardData {
    pub pan_hash: Secret<String>,
    pub unique_id: String,
    /// 3-D Secure has to be completed on the gateway page
    pub do_redirect: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GooglePayData {
    pub wallet_token: Secret<String>,
    pub do_redirect: bool,
}

/// Method specific part of a payment attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentMethodData {
    Sepa(SepaAccount),
    GuaranteedSepa {
        account: SepaAccount,
        /// `YYYY-MM-DD`
        birth_date: Option<String>,
    },
    Invoice,
    GuaranteedInvoice {
        birth_date: Option<String>,
    },
    Prepayment,
    Card(CardData),
    GooglePay(GooglePayData),
    Paypal,
    Ideal,
    OnlineTransfer,
}

impl PaymentMethodData {
    pub fn payment_method_key(&self) -> PaymentMethodKey {
        match self {
            Self::Sepa(_) => PaymentMethodKey::Sepa,
            Self::GuaranteedSepa { .. } => PaymentMethodKey::GuaranteedSepa,
            Self::Invoice => PaymentMethodKey::Invoice,
            Self::GuaranteedInvoice { .. } => PaymentMethodKey::GuaranteedInvoice,
            Self::Prepayment => PaymentMethodKey::Prepayment,
            Self::Card(_) => PaymentMethodKey::Card,
            Self::GooglePay(_) => PaymentMethodKey::GooglePay,
            Self::Paypal => PaymentMethodKey::Paypal,
            Self::Ideal => PaymentMethodKey::Ideal,
            Self::OnlineTransfer => PaymentMethodKey::OnlineTransfer,
        }
    }

    /// Whether the shopper has to complete the payment on a gateway hosted page.
    pub fn is_redirect_based(&self) -> bool {
        match self {
            Self::Card(card) => card.do_redirect,
            Self::GooglePay(wallet) => wallet.do_redirect,
            Self::Paypal | Self::Ideal | Self::OnlineTransfer => true,
            Self::Sepa(_)
            | Self::GuaranteedSepa { .. }
            | Self::Invoice
            | Self::GuaranteedInvoice { .. }
            | Self::Prepayment => false,
        }
    }

    pub fn birth_date(&self) -> Option<&str> {
        match self {
            Self::GuaranteedSepa { birth_date, .. } | Self::GuaranteedInvoice { birth_date } => {
                birth_date.as_deref()
            }
            _ => None,
        }
    }
}

/// One checkout attempt, built once and sent to the gateway as is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRequest {
    pub payment_method_key: PaymentMethodKey,
    pub amount: MinorUnit,
    pub currency: String,
    pub customer: Customer,
    pub method_data: PaymentMethodData,
    pub return_url: Option<String>,
    pub lang: String,
    pub test_mode: bool,
    pub order_no: Option<String>,
}

impl PaymentRequest {
    pub fn is_redirect_based(&self) -> bool {
        self.method_data.is_redirect_based()
    }
}

/// Lookup of an existing transaction by its gateway id.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetailsRequest {
    pub tid: String,
    pub lang: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultData {
    pub status: ApiStatus,
    pub status_code: Option<u16>,
    pub status_text: String,
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionData {
    pub tid: Option<String>,
    pub txn_secret: Option<Secret<String>>,
    pub status: Option<TransactionStatus>,
    pub amount: Option<MinorUnit>,
    pub currency: Option<String>,
    pub payment_type: Option<String>,
    pub order_no: Option<String>,
    pub test_mode: Option<bool>,
}

/// Gateway answer to a payment or transaction details call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentResponse {
    pub result: ResultData,
    pub transaction: Option<TransactionData>,
}

impl PaymentResponse {
    pub fn is_success(&self) -> bool {
        self.result.status.is_success()
    }

    pub fn status_text(&self) -> &str {
        &self.result.status_text
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.result
            .redirect_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    pub fn tid(&self) -> Option<&str> {
        self.transaction
            .as_ref()
            .and_then(|transaction| transaction.tid.as_deref())
    }

    pub fn txn_secret(&self) -> Option<&Secret<String>> {
        self.transaction
            .as_ref()
            .and_then(|transaction| transaction.txn_secret.as_ref())
    }

    /// A locally produced failure, used when the gateway could not be reached.
    pub fn failure(status_text: impl Into<String>) -> Self {
        Self {
            result: ResultData {
                status: ApiStatus::Failure,
                status_code: None,
                status_text: status_text.into(),
                redirect_url: None,
            },
            transaction: None,
        }
    }
}
