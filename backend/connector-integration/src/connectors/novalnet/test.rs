#[cfg(test)]
mod tests {
    use common_enums::{ApiStatus, PaymentAction, PaymentMethodKey, TransactionStatus};
    use common_utils::{crypto, types::MinorUnit};
    use domain_types::{
        connector_flow::{Authorize, PSync},
        payments::{
            BillingAddress, CardData, Customer, PaymentMethodData, PaymentRequest,
            PaymentResponse, SepaAccount, TransactionDetailsRequest,
        },
        redirect::ReceivedRedirect,
        router_response_types::Response,
        types::{ConnectorParams, Connectors, Proxy},
    };
    use hyperswitch_masking::{Maskable, PeekInterface, Secret};
    use interfaces::{connector_integration::ConnectorIntegration, gateway::PaymentGateway};
    use serde_json::{json, Value};

    use crate::connectors::novalnet::{
        transformers::{
            reverse_string, NovalNetPaymentTypes, NovalnetAuthType, NovalnetPaymentsRequest,
            NovalnetRouterData,
        },
        Novalnet,
    };

    const ACCESS_KEY: &str = "a87ff679a2f3e71d9181a67b7542122c";

    fn auth() -> NovalnetAuthType {
        NovalnetAuthType {
            product_activation_key: Secret::new(
                "7ibc7ob5|tuJEH3gNbeWJfIHah||nbobljbnmdli0poys|doU3HJVoym7MQ44qf7cpn7pc".to_string(),
            ),
            payment_access_key: Secret::new(ACCESS_KEY.to_string()),
            tariff_id: Secret::new("10004".to_string()),
        }
    }

    fn connector() -> Novalnet {
        Novalnet::new(
            auth(),
            Connectors {
                novalnet: ConnectorParams {
                    base_url: "https://payport.novalnet.de/v2/".to_string(),
                },
            },
            Proxy::default(),
        )
    }

    fn request(method_data: PaymentMethodData) -> PaymentRequest {
        let return_url = method_data
            .is_redirect_based()
            .then(|| "https://shop.example/novalnet/payment-response".to_string());
        PaymentRequest {
            payment_method_key: method_data.payment_method_key(),
            amount: MinorUnit::new(1999),
            currency: "EUR".to_string(),
            customer: Customer {
                first_name: Secret::new("Max".to_string()),
                last_name: Secret::new("Mustermann".to_string()),
                email: "max@example.com".parse().ok(),
                billing: BillingAddress {
                    house_no: Some(Secret::new("2".to_string())),
                    street: Secret::new("Musterstr".to_string()),
                    city: "Musterhausen".to_string(),
                    zip: Secret::new("12345".to_string()),
                    country_code: "DE".to_string(),
                },
            },
            method_data,
            return_url,
            lang: "de".to_string(),
            test_mode: true,
            order_no: Some("ORD-1001".to_string()),
        }
    }

    fn wire_body(connector: &Novalnet, request: &PaymentRequest) -> Value {
        let router_data = NovalnetRouterData {
            request,
            auth: &connector.auth,
            enforce_3d: connector.enforce_3d,
        };
        serde_json::to_value(NovalnetPaymentsRequest::from(&router_data))
            .expect("request serializes")
    }

    fn response(status_code: u16, body: Value) -> Response {
        Response {
            headers: None,
            response: bytes::Bytes::from(body.to_string()),
            status_code,
        }
    }

    #[test]
    fn sepa_without_bic_sends_only_the_iban() {
        let body = wire_body(
            &connector(),
            &request(PaymentMethodData::Sepa(SepaAccount {
                iban: Secret::new("DE24300209002411761956".to_string()),
                bic: None,
            })),
        );

        assert_eq!(body["transaction"]["payment_type"], "DIRECT_DEBIT_SEPA");
        assert_eq!(
            body["transaction"]["payment_data"],
            json!({ "iban": "DE24300209002411761956" })
        );
        assert!(body["transaction"].get("return_url").is_none());
        assert_eq!(body["transaction"]["test_mode"], 1);
        assert_eq!(body["transaction"]["amount"], 1999);
        assert_eq!(body["merchant"]["tariff"], "10004");
        assert_eq!(body["custom"]["lang"], "de");
        assert_eq!(body["customer"]["billing"]["country_code"], "DE");
    }

    #[test]
    fn redirect_card_payment_carries_return_urls_and_3ds_flag() {
        let connector = connector().with_enforce_3d(true);
        let body = wire_body(
            &connector,
            &request(PaymentMethodData::Card(CardData {
                pan_hash: Secret::new("pan-hash".to_string()),
                unique_id: "unique-id".to_string(),
                do_redirect: true,
            })),
        );

        assert_eq!(body["transaction"]["payment_type"], "CREDITCARD");
        assert_eq!(
            body["transaction"]["return_url"],
            "https://shop.example/novalnet/payment-response"
        );
        assert_eq!(
            body["transaction"]["error_return_url"],
            body["transaction"]["return_url"]
        );
        assert_eq!(body["transaction"]["enforce_3d"], 1);
        assert_eq!(body["transaction"]["payment_data"]["pan_hash"], "pan-hash");
    }

    #[test]
    fn enforce_3d_is_not_sent_for_invoice() {
        let connector = connector().with_enforce_3d(true);
        let body = wire_body(&connector, &request(PaymentMethodData::Invoice));
        assert!(body["transaction"].get("enforce_3d").is_none());
        assert!(body["transaction"].get("payment_data").is_none());
    }

    #[test]
    fn guaranteed_invoice_sends_birth_date_on_the_customer() {
        let body = wire_body(
            &connector(),
            &request(PaymentMethodData::GuaranteedInvoice {
                birth_date: Some("1990-04-01".to_string()),
            }),
        );
        assert_eq!(body["transaction"]["payment_type"], "GUARANTEED_INVOICE");
        assert_eq!(body["customer"]["birth_date"], "1990-04-01");
    }

    #[test]
    fn every_method_key_has_a_gateway_type() {
        let expected = [
            (PaymentMethodKey::Sepa, "DIRECT_DEBIT_SEPA"),
            (PaymentMethodKey::GuaranteedSepa, "GUARANTEED_DIRECT_DEBIT_SEPA"),
            (PaymentMethodKey::OnlineTransfer, "ONLINE_TRANSFER"),
            (PaymentMethodKey::GooglePay, "GOOGLEPAY"),
            (PaymentMethodKey::Prepayment, "PREPAYMENT"),
        ];
        for (key, wire) in expected {
            assert_eq!(NovalNetPaymentTypes::from(key).to_string(), wire);
        }
    }

    #[test]
    fn headers_carry_the_encoded_access_key_masked() {
        let connector = connector();
        let headers = <Novalnet as ConnectorIntegration<
            Authorize,
            PaymentRequest,
            PaymentResponse,
        >>::get_headers(&connector, &request(PaymentMethodData::Prepayment))
        .expect("headers");

        let (_, access_key) = headers
            .iter()
            .find(|(name, _)| name == "X-NN-Access-Key")
            .expect("access key header");
        match access_key {
            Maskable::Masked(value) => assert_eq!(
                value.peek(),
                "YTg3ZmY2NzlhMmYzZTcxZDkxODFhNjdiNzU0MjEyMmM="
            ),
            Maskable::Normal(_) => panic!("access key must be masked"),
        }
        assert!(headers.iter().any(|(name, value)| {
            name == "Charset" && matches!(value, Maskable::Normal(charset) if charset == "utf-8")
        }));
    }

    #[test]
    fn payment_url_follows_payment_action() {
        let req = request(PaymentMethodData::Prepayment);
        let capture = <Novalnet as ConnectorIntegration<
            Authorize,
            PaymentRequest,
            PaymentResponse,
        >>::get_url(&connector(), &req)
        .expect("url");
        assert_eq!(capture, "https://payport.novalnet.de/v2/payment");

        let authorize = <Novalnet as ConnectorIntegration<
            Authorize,
            PaymentRequest,
            PaymentResponse,
        >>::get_url(
            &connector().with_payment_action(PaymentAction::Authorize),
            &req,
        )
        .expect("url");
        assert_eq!(authorize, "https://payport.novalnet.de/v2/authorize");
    }

    #[test]
    fn transaction_details_request_targets_details_endpoint() {
        let req = TransactionDetailsRequest {
            tid: "14496300055218123".to_string(),
            lang: "en".to_string(),
        };
        let url = <Novalnet as ConnectorIntegration<
            PSync,
            TransactionDetailsRequest,
            PaymentResponse,
        >>::get_url(&connector(), &req)
        .expect("url");
        assert_eq!(url, "https://payport.novalnet.de/v2/transaction/details");

        let blank = TransactionDetailsRequest {
            tid: " ".to_string(),
            lang: "en".to_string(),
        };
        assert!(<Novalnet as ConnectorIntegration<
            PSync,
            TransactionDetailsRequest,
            PaymentResponse,
        >>::get_request_body(&connector(), &blank)
        .is_err());
    }

    #[test]
    fn successful_answer_maps_to_domain_response() {
        let body = json!({
            "result": {
                "status": "SUCCESS",
                "status_code": 100,
                "status_text": "Successful",
                "redirect_url": "https://payport.novalnet.de/pci_payport/abc"
            },
            "transaction": {
                "tid": 14496300055218123_i64,
                "txn_secret": "d3b07384d113edec49eaa6238ad5ff00",
                "status": "PENDING",
                "amount": 1999,
                "currency": "EUR",
                "payment_type": "CREDITCARD",
                "test_mode": 1
            }
        });
        let response = <Novalnet as ConnectorIntegration<
            Authorize,
            PaymentRequest,
            PaymentResponse,
        >>::handle_response(
            &connector(),
            &request(PaymentMethodData::Prepayment),
            response(200, body),
        )
        .expect("response parses");

        assert!(response.is_success());
        assert_eq!(response.tid(), Some("14496300055218123"));
        assert_eq!(
            response.redirect_url(),
            Some("https://payport.novalnet.de/pci_payport/abc")
        );
        let transaction = response.transaction.expect("transaction");
        assert_eq!(transaction.status, Some(TransactionStatus::Pending));
        assert_eq!(transaction.test_mode, Some(true));
        assert_eq!(transaction.amount, Some(MinorUnit::new(1999)));
    }

    #[test]
    fn unknown_transaction_status_is_kept_as_absent() {
        let body = json!({
            "result": { "status": "SUCCESS", "status_text": "ok" },
            "transaction": { "tid": 1, "status": "SOMETHING_NEW" }
        });
        let response = <Novalnet as ConnectorIntegration<
            PSync,
            TransactionDetailsRequest,
            PaymentResponse,
        >>::handle_response(
            &connector(),
            &TransactionDetailsRequest {
                tid: "1".to_string(),
                lang: "en".to_string(),
            },
            response(200, body),
        )
        .expect("response parses");
        assert_eq!(response.transaction.and_then(|t| t.status), None);
    }

    #[test]
    fn error_answer_becomes_failed_payment() {
        let body = json!({
            "result": { "status": "FAILURE", "status_code": 106, "status_text": "Invalid IBAN" }
        });
        let response = <Novalnet as ConnectorIntegration<
            Authorize,
            PaymentRequest,
            PaymentResponse,
        >>::get_error_response(
            &connector(),
            &request(PaymentMethodData::Prepayment),
            response(400, body),
        )
        .expect("error body parses");
        assert_eq!(response.result.status, ApiStatus::Failure);
        assert_eq!(response.status_text(), "Invalid IBAN");
        assert_eq!(response.result.status_code, Some(106));
    }

    #[test]
    fn unreadable_error_answer_is_an_unexpected_status() {
        let result = <Novalnet as ConnectorIntegration<
            Authorize,
            PaymentRequest,
            PaymentResponse,
        >>::get_5xx_error_response(
            &connector(),
            &request(PaymentMethodData::Prepayment),
            Response {
                headers: None,
                response: bytes::Bytes::from_static(b"<html>bad gateway</html>"),
                status_code: 502,
            },
        );
        assert!(matches!(
            result.as_ref().map_err(|err| err.current_context()),
            Err(domain_types::errors::ConnectorError::UnexpectedResponseStatus { status_code: 502 })
        ));
    }

    fn signed_redirect(status: &str, txn_secret: &str) -> ReceivedRedirect {
        let tid = "14496300055218123";
        let message = format!("{tid}{txn_secret}{status}{}", reverse_string(ACCESS_KEY));
        ReceivedRedirect {
            tid: tid.to_string(),
            status: status.to_string(),
            status_text: None,
            checksum: crypto::sha256_hex(message.as_bytes()).ok(),
        }
    }

    #[test]
    fn redirect_checksum_matches_gateway_formula() {
        let secret = Secret::new("d3b07384d113edec49eaa6238ad5ff00".to_string());
        let redirect = signed_redirect("SUCCESS", "d3b07384d113edec49eaa6238ad5ff00");
        assert!(connector()
            .verify_redirect_checksum(&redirect, &secret)
            .expect("verification runs"));
    }

    #[test]
    fn tampered_redirect_fails_verification() {
        let secret = Secret::new("d3b07384d113edec49eaa6238ad5ff00".to_string());

        let mut tampered_status = signed_redirect("SUCCESS", "d3b07384d113edec49eaa6238ad5ff00");
        tampered_status.status = "FAILURE".to_string();
        assert!(!connector()
            .verify_redirect_checksum(&tampered_status, &secret)
            .expect("verification runs"));

        let other_secret = signed_redirect("SUCCESS", "another-secret");
        assert!(!connector()
            .verify_redirect_checksum(&other_secret, &secret)
            .expect("verification runs"));
    }

    #[test]
    fn missing_or_garbled_checksum_fails_verification() {
        let secret = Secret::new("d3b07384d113edec49eaa6238ad5ff00".to_string());

        let mut missing = signed_redirect("SUCCESS", "d3b07384d113edec49eaa6238ad5ff00");
        missing.checksum = None;
        assert!(!connector()
            .verify_redirect_checksum(&missing, &secret)
            .expect("verification runs"));

        let mut garbled = signed_redirect("SUCCESS", "d3b07384d113edec49eaa6238ad5ff00");
        garbled.checksum = Some("not-hex".to_string());
        assert!(!connector()
            .verify_redirect_checksum(&garbled, &secret)
            .expect("verification runs"));

        let mut truncated = signed_redirect("SUCCESS", "d3b07384d113edec49eaa6238ad5ff00");
        truncated.checksum = truncated
            .checksum
            .map(|checksum| checksum.chars().take(32).collect());
        assert!(!connector()
            .verify_redirect_checksum(&truncated, &secret)
            .expect("verification runs"));
    }
}
