#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use common_utils::types::MinorUnit;
use connector_integration::{connectors::Novalnet, NovalnetAuthType};
use domain_types::{
    errors::ConnectorError,
    payments::{BillingAddress, Customer, PaymentMethodData, PaymentRequest},
    types::{ConnectorParams, Connectors, Proxy},
};
use hyperswitch_masking::Secret;
use interfaces::gateway::PaymentGateway;
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// Constants for the mocked Novalnet endpoint
const ACCESS_KEY: &str = "a87ff679a2f3e71d9181a67b7542122c";
const ENCODED_ACCESS_KEY: &str = "YTg3ZmY2NzlhMmYzZTcxZDkxODFhNjdiNzU0MjEyMmM=";
const TEST_TID: i64 = 14496300055218123;

fn gateway(server: &MockServer) -> Novalnet {
    Novalnet::new(
        NovalnetAuthType {
            product_activation_key: Secret::new("activation-key".to_string()),
            payment_access_key: Secret::new(ACCESS_KEY.to_string()),
            tariff_id: Secret::new("10004".to_string()),
        },
        Connectors {
            novalnet: ConnectorParams {
                base_url: server.uri(),
            },
        },
        Proxy::default(),
    )
}

fn invoice_request() -> PaymentRequest {
    PaymentRequest {
        payment_method_key: PaymentMethodData::Invoice.payment_method_key(),
        amount: MinorUnit::new(4990),
        currency: "EUR".to_string(),
        customer: Customer {
            first_name: Secret::new("Erika".to_string()),
            last_name: Secret::new("Musterfrau".to_string()),
            email: None,
            billing: BillingAddress {
                house_no: None,
                street: Secret::new("Hauptstr 9".to_string()),
                city: "Leipzig".to_string(),
                zip: Secret::new("04109".to_string()),
                country_code: "DE".to_string(),
            },
        },
        method_data: PaymentMethodData::Invoice,
        return_url: None,
        lang: "de".to_string(),
        test_mode: true,
        order_no: None,
    }
}

#[tokio::test]
async fn create_payment_posts_to_payment_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payment"))
        .and(header("X-NN-Access-Key", ENCODED_ACCESS_KEY))
        .and(header("Charset", "utf-8"))
        .and(body_partial_json(json!({
            "transaction": { "payment_type": "INVOICE", "amount": 4990, "currency": "EUR" },
            "merchant": { "signature": "activation-key", "tariff": "10004" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "status": "SUCCESS", "status_code": 100, "status_text": "Successful" },
            "transaction": { "tid": TEST_TID, "status": "PENDING", "amount": 4990, "currency": "EUR" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server)
        .create_payment(&invoice_request())
        .await
        .expect("gateway call succeeds");

    assert!(response.is_success());
    assert_eq!(response.tid(), Some("14496300055218123"));
}

#[tokio::test]
async fn transaction_details_sends_tid_and_language() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transaction/details"))
        .and(body_partial_json(json!({
            "transaction": { "tid": "14496300055218123" },
            "custom": { "lang": "en" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "status": "SUCCESS", "status_text": "Successful" },
            "transaction": { "tid": TEST_TID, "status": "CONFIRMED" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server)
        .transaction_details("14496300055218123", "en")
        .await
        .expect("gateway call succeeds");

    assert!(response.is_success());
    assert_eq!(response.tid(), Some("14496300055218123"));
}

#[tokio::test]
async fn rejected_payment_is_reported_as_failed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payment"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "result": { "status": "FAILURE", "status_code": 106, "status_text": "Invalid request" }
        })))
        .mount(&server)
        .await;

    let response = gateway(&server)
        .create_payment(&invoice_request())
        .await
        .expect("error body is readable");

    assert!(!response.is_success());
    assert_eq!(response.status_text(), "Invalid request");
}

#[tokio::test]
async fn unreadable_server_error_surfaces_as_connector_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payment"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let error = gateway(&server)
        .create_payment(&invoice_request())
        .await
        .expect_err("gateway is unavailable");

    assert!(matches!(
        error.current_context(),
        ConnectorError::UnexpectedResponseStatus { status_code: 503 }
    ));
}
