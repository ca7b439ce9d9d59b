use common_enums::{ApiStatus, PaymentMethodKey, TransactionStatus};
use common_utils::{pii, types::MinorUnit};
use domain_types::{
    payments::{
        PaymentMethodData, PaymentRequest, PaymentResponse, ResultData as DomainResultData,
        TransactionData, TransactionDetailsRequest,
    },
    utils::ForeignFrom,
};
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};
use strum::Display;

const TEST_MODE_ENABLED: i8 = 1;
const TEST_MODE_DISABLED: i8 = 0;
const ENFORCE_3D_ENABLED: i8 = 1;

fn get_test_mode(item: bool) -> i8 {
    if item {
        TEST_MODE_ENABLED
    } else {
        TEST_MODE_DISABLED
    }
}

#[derive(Debug, Copy, Serialize, Deserialize, Clone, PartialEq, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NovalNetPaymentTypes {
    DirectDebitSepa,
    GuaranteedDirectDebitSepa,
    Invoice,
    GuaranteedInvoice,
    Prepayment,
    Creditcard,
    Googlepay,
    Paypal,
    Ideal,
    OnlineTransfer,
}

impl From<PaymentMethodKey> for NovalNetPaymentTypes {
    fn from(item: PaymentMethodKey) -> Self {
        match item {
            PaymentMethodKey::Sepa => Self::DirectDebitSepa,
            PaymentMethodKey::GuaranteedSepa => Self::GuaranteedDirectDebitSepa,
            PaymentMethodKey::Invoice => Self::Invoice,
            PaymentMethodKey::GuaranteedInvoice => Self::GuaranteedInvoice,
            PaymentMethodKey::Prepayment => Self::Prepayment,
            PaymentMethodKey::Card => Self::Creditcard,
            PaymentMethodKey::GooglePay => Self::Googlepay,
            PaymentMethodKey::Paypal => Self::Paypal,
            PaymentMethodKey::Ideal => Self::Ideal,
            PaymentMethodKey::OnlineTransfer => Self::OnlineTransfer,
        }
    }
}

// Auth Struct
#[derive(Debug, Clone, Deserialize)]
pub struct NovalnetAuthType {
    /// Sent as `merchant.signature`
    pub product_activation_key: Secret<String>,
    pub payment_access_key: Secret<String>,
    pub tariff_id: Secret<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetPaymentsRequestMerchant {
    signature: Secret<String>,
    tariff: Secret<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetPaymentsRequestBilling {
    #[serde(skip_serializing_if = "Option::is_none")]
    house_no: Option<Secret<String>>,
    street: Secret<String>,
    city: String,
    zip: Secret<String>,
    country_code: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetPaymentsRequestCustomer {
    first_name: Secret<String>,
    last_name: Secret<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<pii::Email>,
    billing: NovalnetPaymentsRequestBilling,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_date: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetSepa {
    iban: Secret<String, pii::IbanStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bic: Option<Secret<String>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetCard {
    pan_hash: Secret<String>,
    unique_id: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetGooglePay {
    wallet_token: Secret<String>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(untagged)]
pub enum NovalNetPaymentData {
    Sepa(NovalnetSepa),
    Card(NovalnetCard),
    GooglePay(NovalnetGooglePay),
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetCustom {
    lang: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetPaymentsRequestTransaction {
    test_mode: i8,
    payment_type: NovalNetPaymentTypes,
    amount: MinorUnit,
    currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_data: Option<NovalNetPaymentData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enforce_3d: Option<i8>,
}

#[derive(Debug, Serialize, Clone)]
pub struct NovalnetPaymentsRequest {
    merchant: NovalnetPaymentsRequestMerchant,
    customer: NovalnetPaymentsRequestCustomer,
    transaction: NovalnetPaymentsRequestTransaction,
    custom: NovalnetCustom,
}

/// A payment request together with the merchant data needed to send it
pub struct NovalnetRouterData<'a> {
    pub request: &'a PaymentRequest,
    pub auth: &'a NovalnetAuthType,
    pub enforce_3d: bool,
}

fn payment_data(method_data: &PaymentMethodData) -> Option<NovalNetPaymentData> {
    match method_data {
        PaymentMethodData::Sepa(account)
        | PaymentMethodData::GuaranteedSepa { account, .. } => {
            Some(NovalNetPaymentData::Sepa(NovalnetSepa {
                iban: account.iban.clone(),
                bic: account.bic.clone(),
            }))
        }
        PaymentMethodData::Card(card) => Some(NovalNetPaymentData::Card(NovalnetCard {
            pan_hash: card.pan_hash.clone(),
            unique_id: card.unique_id.clone(),
        })),
        PaymentMethodData::GooglePay(wallet) => {
            Some(NovalNetPaymentData::GooglePay(NovalnetGooglePay {
                wallet_token: wallet.wallet_token.clone(),
            }))
        }
        PaymentMethodData::Invoice
        | PaymentMethodData::GuaranteedInvoice { .. }
        | PaymentMethodData::Prepayment
        | PaymentMethodData::Paypal
        | PaymentMethodData::Ideal
        | PaymentMethodData::OnlineTransfer => None,
    }
}

impl From<&NovalnetRouterData<'_>> for NovalnetPaymentsRequest {
    fn from(item: &NovalnetRouterData<'_>) -> Self {
        let request = item.request;
        let customer = &request.customer;
        let billing = &customer.billing;

        let enforce_3d = matches!(
            request.method_data,
            PaymentMethodData::Card(_) | PaymentMethodData::GooglePay(_)
        ) && item.enforce_3d;

        Self {
            merchant: NovalnetPaymentsRequestMerchant {
                signature: item.auth.product_activation_key.clone(),
                tariff: item.auth.tariff_id.clone(),
            },
            customer: NovalnetPaymentsRequestCustomer {
                first_name: customer.first_name.clone(),
                last_name: customer.last_name.clone(),
                email: customer.email.clone(),
                billing: NovalnetPaymentsRequestBilling {
                    house_no: billing.house_no.clone(),
                    street: billing.street.clone(),
                    city: billing.city.clone(),
                    zip: billing.zip.clone(),
                    country_code: billing.country_code.clone(),
                },
                birth_date: request.method_data.birth_date().map(str::to_string),
            },
            transaction: NovalnetPaymentsRequestTransaction {
                test_mode: get_test_mode(request.test_mode),
                payment_type: NovalNetPaymentTypes::from(request.payment_method_key),
                amount: request.amount,
                currency: request.currency.clone(),
                order_no: request.order_no.clone(),
                payment_data: payment_data(&request.method_data),
                return_url: request.return_url.clone(),
                error_return_url: request.return_url.clone(),
                enforce_3d: enforce_3d.then_some(ENFORCE_3D_ENABLED),
            },
            custom: NovalnetCustom {
                lang: request.lang.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NovalnetSyncTransaction {
    tid: String,
}

#[derive(Debug, Serialize)]
pub struct NovalnetSyncRequest {
    pub transaction: NovalnetSyncTransaction,
    pub custom: NovalnetCustom,
}

impl From<&TransactionDetailsRequest> for NovalnetSyncRequest {
    fn from(item: &TransactionDetailsRequest) -> Self {
        Self {
            transaction: NovalnetSyncTransaction {
                tid: item.tid.clone(),
            },
            custom: NovalnetCustom {
                lang: item.lang.clone(),
            },
        }
    }
}

// PaymentsResponse
#[derive(Debug, Display, Copy, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NovalnetTransactionStatus {
    Success,
    Failure,
    Confirmed,
    OnHold,
    Pending,
    Deactivated,
    Progress,
    #[serde(other)]
    Unknown,
}

impl NovalnetTransactionStatus {
    pub fn to_transaction_status(self) -> Option<TransactionStatus> {
        match self {
            Self::Success => Some(TransactionStatus::Success),
            Self::Failure => Some(TransactionStatus::Failure),
            Self::Confirmed => Some(TransactionStatus::Confirmed),
            Self::OnHold => Some(TransactionStatus::OnHold),
            Self::Pending => Some(TransactionStatus::Pending),
            Self::Deactivated => Some(TransactionStatus::Deactivated),
            Self::Progress => Some(TransactionStatus::Progress),
            Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultData {
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub status: String,
    pub status_code: Option<u16>,
    #[serde(default)]
    pub status_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovalnetPaymentsResponseTransactionData {
    pub amount: Option<MinorUnit>,
    pub currency: Option<String>,
    pub order_no: Option<String>,
    pub payment_type: Option<String>,
    pub txn_secret: Option<Secret<String>>,
    pub tid: Option<i64>,
    pub test_mode: Option<i8>,
    pub status: Option<NovalnetTransactionStatus>,
}

/// Answer of `/payment`, `/authorize` and `/transaction/details`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovalnetPaymentsResponse {
    pub result: ResultData,
    pub transaction: Option<NovalnetPaymentsResponseTransactionData>,
}

pub type NovalnetPSyncResponse = NovalnetPaymentsResponse;

impl ForeignFrom<ResultData> for DomainResultData {
    fn foreign_from(result: ResultData) -> Self {
        Self {
            status: ApiStatus::from_gateway(&result.status),
            status_code: result.status_code,
            status_text: result.status_text,
            redirect_url: result.redirect_url.filter(|url| !url.is_empty()),
        }
    }
}

impl ForeignFrom<NovalnetPaymentsResponse> for PaymentResponse {
    fn foreign_from(response: NovalnetPaymentsResponse) -> Self {
        Self {
            result: DomainResultData::foreign_from(response.result),
            transaction: response.transaction.map(|transaction| TransactionData {
                tid: transaction.tid.map(|tid| tid.to_string()),
                txn_secret: transaction.txn_secret,
                status: transaction
                    .status
                    .and_then(NovalnetTransactionStatus::to_transaction_status),
                amount: transaction.amount,
                currency: transaction.currency,
                payment_type: transaction.payment_type,
                order_no: transaction.order_no,
                test_mode: transaction.test_mode.map(|mode| mode == TEST_MODE_ENABLED),
            }),
        }
    }
}

/// Body of a 4xx/5xx answer
#[derive(Debug, Serialize, Deserialize)]
pub struct NovalnetErrorResponse {
    pub result: ResultData,
}

impl NovalnetErrorResponse {
    pub fn into_payment_response(self, status_code: u16) -> PaymentResponse {
        let mut result = DomainResultData::foreign_from(self.result);
        result.status = ApiStatus::Failure;
        result.status_code.get_or_insert(status_code);
        PaymentResponse {
            result,
            transaction: None,
        }
    }
}

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}
