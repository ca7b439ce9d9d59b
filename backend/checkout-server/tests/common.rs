#![allow(dead_code)]
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use checkout_server::{
    configs::Config,
    flows::{process::ProcessSettings, CheckoutServices},
    host::{InMemoryBasketRepository, InMemoryNotifications, InMemoryOrderBook, InMemorySessionStore},
};
use common_enums::{AmountPolicy, ApiStatus};
use common_utils::CustomResult;
use domain_types::{
    basket::BasketSnapshot,
    errors::ConnectorError,
    payment_form::{IntentSettings, PaymentForm},
    payments::{
        BillingAddress, Customer, PaymentRequest, PaymentResponse, ResultData, TransactionData,
    },
    redirect::ReceivedRedirect,
};
use error_stack::report;
use hyperswitch_masking::{PeekInterface, Secret};
use interfaces::gateway::PaymentGateway;

pub const RETURN_URL: &str = "https://shop.example/payment/novalnet/paymentResponse";
pub const GATEWAY_PAGE: &str = "https://paygate.novalnet.de/nn/checkout/7b2f";
pub const TXN_SECRET: &str = "a4f8c3e9d1b2";
pub const TID: &str = "14496300055218123";

/// Gateway double answering with canned results and recording every call.
pub struct FakeGateway {
    payment: Result<PaymentResponse, ConnectorError>,
    details: Result<PaymentResponse, ConnectorError>,
    checksum_valid: bool,
    pub payment_requests: Mutex<Vec<PaymentRequest>>,
    pub checksum_checks: Mutex<Vec<(String, String)>>,
    pub details_calls: Mutex<Vec<(String, String)>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            payment: Ok(success_response(TID)),
            details: Ok(success_response(TID)),
            checksum_valid: true,
            payment_requests: Mutex::default(),
            checksum_checks: Mutex::default(),
            details_calls: Mutex::default(),
        }
    }

    pub fn with_payment(mut self, payment: Result<PaymentResponse, ConnectorError>) -> Self {
        self.payment = payment;
        self
    }

    pub fn with_details(mut self, details: Result<PaymentResponse, ConnectorError>) -> Self {
        self.details = details;
        self
    }

    pub fn with_checksum(mut self, checksum_valid: bool) -> Self {
        self.checksum_valid = checksum_valid;
        self
    }

    pub fn payment_requests(&self) -> Vec<PaymentRequest> {
        self.payment_requests.lock().unwrap().clone()
    }

    pub fn checksum_checks(&self) -> Vec<(String, String)> {
        self.checksum_checks.lock().unwrap().clone()
    }

    pub fn details_calls(&self) -> Vec<(String, String)> {
        self.details_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> CustomResult<PaymentResponse, ConnectorError> {
        self.payment_requests.lock().unwrap().push(request.clone());
        self.payment.clone().map_err(|error| report!(error))
    }

    async fn transaction_details(
        &self,
        tid: &str,
        lang: &str,
    ) -> CustomResult<PaymentResponse, ConnectorError> {
        self.details_calls
            .lock()
            .unwrap()
            .push((tid.to_string(), lang.to_string()));
        self.details.clone().map_err(|error| report!(error))
    }

    fn verify_redirect_checksum(
        &self,
        redirect: &ReceivedRedirect,
        txn_secret: &Secret<String>,
    ) -> CustomResult<bool, ConnectorError> {
        self.checksum_checks
            .lock()
            .unwrap()
            .push((redirect.tid.clone(), txn_secret.peek().clone()));
        Ok(self.checksum_valid)
    }
}

/// Checkout services wired to the gateway double and the in-memory storefront.
pub struct Harness {
    pub gateway: Arc<FakeGateway>,
    pub sessions: Arc<InMemorySessionStore>,
    pub baskets: Arc<InMemoryBasketRepository>,
    pub orders: Arc<InMemoryOrderBook>,
    pub notifications: Arc<InMemoryNotifications>,
}

impl Harness {
    pub fn new(gateway: FakeGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
            sessions: Arc::new(InMemorySessionStore::default()),
            baskets: Arc::new(InMemoryBasketRepository::with_fallback(Some(basket()))),
            orders: Arc::new(InMemoryOrderBook::default()),
            notifications: Arc::new(InMemoryNotifications::default()),
        }
    }

    pub fn services(&self) -> CheckoutServices {
        CheckoutServices {
            gateway: self.gateway.clone(),
            sessions: self.sessions.clone(),
            baskets: self.baskets.clone(),
            orders: self.orders.clone(),
            notifications: self.notifications.clone(),
        }
    }
}

pub fn basket() -> BasketSnapshot {
    BasketSnapshot {
        currency: "EUR".to_string(),
        basket_amount: 19.99,
        customer: Customer {
            first_name: Secret::new("Norbert".to_string()),
            last_name: Secret::new("Maier".to_string()),
            email: None,
            billing: BillingAddress {
                house_no: Some(Secret::new("9".to_string())),
                street: Secret::new("Hauptstr".to_string()),
                city: "Kaiserslautern".to_string(),
                zip: Secret::new("66862".to_string()),
                country_code: "DE".to_string(),
            },
        },
        order_no: None,
    }
}

pub fn process_settings(order_creation_before_payment: bool) -> ProcessSettings {
    ProcessSettings {
        intent: IntentSettings {
            amount_policy: AmountPolicy::DefaultToZero,
            return_url: RETURN_URL.to_string(),
            lang: "DE".to_string(),
            test_mode: true,
        },
        order_creation_before_payment,
    }
}

pub fn form(payment_key: &str) -> PaymentForm {
    PaymentForm {
        nn_payment_key: Some(payment_key.to_string()),
        nn_order_amount: Some("1999".to_string()),
        ..Default::default()
    }
}

pub fn card_form(cc3d_redirect: bool) -> PaymentForm {
    PaymentForm {
        nn_pan_hash: Some("2C9D4F3B7A".to_string()),
        nn_unique_id: Some("Uq8p2T".to_string()),
        nn_cc3d_redirect: cc3d_redirect.then(|| "1".to_string()),
        ..form("NOVALNET_CC")
    }
}

pub fn success_response(tid: &str) -> PaymentResponse {
    PaymentResponse {
        result: ResultData {
            status: ApiStatus::Success,
            status_code: Some(100),
            status_text: "Successful".to_string(),
            redirect_url: None,
        },
        transaction: Some(TransactionData {
            tid: Some(tid.to_string()),
            ..Default::default()
        }),
    }
}

pub fn failure_response(status_text: &str) -> PaymentResponse {
    PaymentResponse {
        result: ResultData {
            status: ApiStatus::Failure,
            status_code: Some(106),
            status_text: status_text.to_string(),
            redirect_url: None,
        },
        transaction: None,
    }
}

/// First step of a redirect payment: the gateway page and the txn secret.
pub fn redirect_response() -> PaymentResponse {
    PaymentResponse {
        result: ResultData {
            status: ApiStatus::Success,
            status_code: Some(100),
            status_text: "Successful".to_string(),
            redirect_url: Some(GATEWAY_PAGE.to_string()),
        },
        transaction: Some(TransactionData {
            txn_secret: Some(Secret::new(TXN_SECRET.to_string())),
            ..Default::default()
        }),
    }
}

const TEST_CONFIG: &str = r#"
[common]
environment = "development"

[server]
host = "127.0.0.1"
port = 0

[metrics]
host = "127.0.0.1"
port = 0

[log.console]
enabled = false
level = "DEBUG"

[connectors.novalnet]
base_url = "http://127.0.0.1:9/v2"

[novalnet]
client_key = " client-key-123 "
test_mode = true
return_url = "https://shop.example/payment/novalnet/paymentResponse"

[novalnet.auth]
product_activation_key = "activation-key"
payment_access_key = "a87ff679a2f3e71d9181a67b7542122c"
tariff_id = "10004"

[novalnet.google_pay]
merchant_id = "BCR2DN4T"
button_type = "buy"
button_theme = "black"
button_height = 40
test_mode = true

[storefront]
default_language = "de"
webstore_name = "Demo Webshop"
process_payment_url = "/payment/novalnet/processPayment"
"#;

/// Configuration read from a temporary file, the same way the server reads its own.
pub fn test_config() -> Config {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temporary config file");
    file.write_all(TEST_CONFIG.as_bytes())
        .expect("config is written");
    Config::new_with_config_path(Some(file.path().to_path_buf())).expect("config is valid")
}
