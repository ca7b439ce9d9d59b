pub mod transformers;

#[cfg(test)]
mod test;

use base64::Engine;
use common_enums::PaymentAction;
use common_utils::{
    crypto,
    errors::CustomResult,
    ext_traits::BytesExt,
    request::RequestContent,
};
use domain_types::{
    connector_flow::{Authorize, PSync},
    errors,
    payments::{PaymentRequest, PaymentResponse, TransactionDetailsRequest},
    redirect::ReceivedRedirect,
    router_response_types::Response,
    types::{Connectors, Proxy},
    utils::ForeignFrom,
};
use error_stack::ResultExt;
use external_services::service::execute_connector_processing_step;
use hyperswitch_masking::{ExposeInterface, Mask, Maskable, PeekInterface, Secret};
use interfaces::{
    api::ConnectorCommon,
    connector_integration::{BoxedConnectorIntegration, ConnectorIntegration},
    gateway::PaymentGateway,
    verification::RedirectVerification,
};
use transformers::{
    self as novalnet, NovalnetAuthType, NovalnetErrorResponse, NovalnetPaymentsRequest,
    NovalnetPaymentsResponse, NovalnetRouterData, NovalnetSyncRequest,
};

pub const BASE64_ENGINE: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const CHARSET: &str = "Charset";
    pub(crate) const ACCEPT: &str = "Accept";
    pub(crate) const X_NN_ACCESS_KEY: &str = "X-NN-Access-Key";
}

/// Novalnet payment API client.
#[derive(Debug, Clone)]
pub struct Novalnet {
    auth: NovalnetAuthType,
    connectors: Connectors,
    proxy: Proxy,
    payment_action: PaymentAction,
    enforce_3d: bool,
}

impl Novalnet {
    pub fn new(auth: NovalnetAuthType, connectors: Connectors, proxy: Proxy) -> Self {
        Self {
            auth,
            connectors,
            proxy,
            payment_action: PaymentAction::default(),
            enforce_3d: false,
        }
    }

    pub fn with_payment_action(mut self, payment_action: PaymentAction) -> Self {
        self.payment_action = payment_action;
        self
    }

    /// Force 3-D Secure for card and wallet payments.
    pub fn with_enforce_3d(mut self, enforce_3d: bool) -> Self {
        self.enforce_3d = enforce_3d;
        self
    }

    pub fn build_headers(
        &self,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        let mut header = vec![
            (
                headers::CONTENT_TYPE.to_string(),
                self.common_get_content_type().to_string().into(),
            ),
            (headers::CHARSET.to_string(), "utf-8".to_string().into()),
            (
                headers::ACCEPT.to_string(),
                self.common_get_content_type().to_string().into(),
            ),
        ];
        let mut api_key = self.get_auth_header()?;
        header.append(&mut api_key);
        Ok(header)
    }

    fn connector_base_url(&self) -> &str {
        self.base_url(&self.connectors).trim_end_matches('/')
    }

    fn parse_payment_response(
        &self,
        res: Response,
        type_name: &'static str,
    ) -> CustomResult<PaymentResponse, errors::ConnectorError> {
        let response: NovalnetPaymentsResponse = res
            .response
            .parse_struct(type_name)
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;
        tracing::debug!(
            status = %response.result.status,
            status_code = ?response.result.status_code,
            "novalnet response received"
        );
        Ok(PaymentResponse::foreign_from(response))
    }
}

impl ConnectorCommon for Novalnet {
    fn id(&self) -> &'static str {
        "novalnet"
    }

    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        connectors.novalnet.base_url.as_ref()
    }

    fn get_auth_header(
        &self,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        let api_key: String = self.auth.payment_access_key.clone().expose();
        if api_key.is_empty() {
            return Err(errors::ConnectorError::FailedToObtainAuthType.into());
        }
        let encoded_api_key = BASE64_ENGINE.encode(api_key);
        Ok(vec![(
            headers::X_NN_ACCESS_KEY.to_string(),
            encoded_api_key.into_masked(),
        )])
    }

    fn build_error_response(
        &self,
        res: Response,
    ) -> CustomResult<PaymentResponse, errors::ConnectorError> {
        let status_code = res.status_code;
        let response: Result<NovalnetErrorResponse, _> =
            res.response.parse_struct("NovalnetErrorResponse");
        match response {
            Ok(response) => Ok(response.into_payment_response(status_code)),
            Err(error) => {
                tracing::warn!(?error, status_code, "unparseable novalnet error response");
                Err(errors::ConnectorError::UnexpectedResponseStatus { status_code }.into())
            }
        }
    }
}

impl ConnectorIntegration<Authorize, PaymentRequest, PaymentResponse> for Novalnet {
    fn get_headers(
        &self,
        _req: &PaymentRequest,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers()
    }

    fn get_url(&self, _req: &PaymentRequest) -> CustomResult<String, errors::ConnectorError> {
        let endpoint = self.connector_base_url();
        Ok(match self.payment_action {
            PaymentAction::Capture => format!("{endpoint}/payment"),
            PaymentAction::Authorize => format!("{endpoint}/authorize"),
        })
    }

    fn get_request_body(
        &self,
        req: &PaymentRequest,
    ) -> CustomResult<Option<RequestContent>, errors::ConnectorError> {
        let router_data = NovalnetRouterData {
            request: req,
            auth: &self.auth,
            enforce_3d: self.enforce_3d,
        };
        let connector_req = NovalnetPaymentsRequest::from(&router_data);
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn handle_response(
        &self,
        _req: &PaymentRequest,
        res: Response,
    ) -> CustomResult<PaymentResponse, errors::ConnectorError> {
        self.parse_payment_response(res, "NovalnetPaymentsResponse")
    }

    fn get_error_response(
        &self,
        _req: &PaymentRequest,
        res: Response,
    ) -> CustomResult<PaymentResponse, errors::ConnectorError> {
        self.build_error_response(res)
    }
}

impl ConnectorIntegration<PSync, TransactionDetailsRequest, PaymentResponse> for Novalnet {
    fn get_headers(
        &self,
        _req: &TransactionDetailsRequest,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        self.build_headers()
    }

    fn get_url(
        &self,
        _req: &TransactionDetailsRequest,
    ) -> CustomResult<String, errors::ConnectorError> {
        Ok(format!("{}/transaction/details", self.connector_base_url()))
    }

    fn get_request_body(
        &self,
        req: &TransactionDetailsRequest,
    ) -> CustomResult<Option<RequestContent>, errors::ConnectorError> {
        if req.tid.trim().is_empty() {
            return Err(errors::ConnectorError::MissingRequiredField { field_name: "tid" }.into());
        }
        let connector_req = NovalnetSyncRequest::from(req);
        Ok(Some(RequestContent::Json(Box::new(connector_req))))
    }

    fn handle_response(
        &self,
        _req: &TransactionDetailsRequest,
        res: Response,
    ) -> CustomResult<PaymentResponse, errors::ConnectorError> {
        self.parse_payment_response(res, "NovalnetPSyncResponse")
    }

    fn get_error_response(
        &self,
        _req: &TransactionDetailsRequest,
        res: Response,
    ) -> CustomResult<PaymentResponse, errors::ConnectorError> {
        self.build_error_response(res)
    }
}

impl RedirectVerification for Novalnet {
    fn get_secrets(&self) -> CustomResult<Vec<u8>, errors::ConnectorError> {
        let access_key = self.auth.payment_access_key.peek();
        if access_key.is_empty() {
            return Err(errors::ConnectorError::FailedToObtainAuthType.into());
        }
        Ok(novalnet::reverse_string(access_key).into_bytes())
    }

    fn get_algorithm(
        &self,
    ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, errors::ConnectorError> {
        Ok(Box::new(crypto::Sha256))
    }

    fn get_message(
        &self,
        redirect: &ReceivedRedirect,
        txn_secret: &Secret<String>,
        secrets: &[u8],
    ) -> CustomResult<Vec<u8>, errors::ConnectorError> {
        let reversed_access_key = String::from_utf8(secrets.to_vec())
            .change_context(errors::ConnectorError::FailedToObtainAuthType)
            .attach_printable("Could not convert the reversed access key to UTF-8")?;

        let message = format!(
            "{}{}{}{}",
            redirect.tid,
            txn_secret.peek(),
            redirect.status,
            reversed_access_key
        );

        Ok(message.into_bytes())
    }
}

#[async_trait::async_trait]
impl PaymentGateway for Novalnet {
    async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> CustomResult<PaymentResponse, errors::ConnectorError> {
        let connector: BoxedConnectorIntegration<'_, Authorize, PaymentRequest, PaymentResponse> =
            Box::new(self);
        execute_connector_processing_step(&self.proxy, connector, request, "authorize").await
    }

    async fn transaction_details(
        &self,
        tid: &str,
        lang: &str,
    ) -> CustomResult<PaymentResponse, errors::ConnectorError> {
        let request = TransactionDetailsRequest {
            tid: tid.to_string(),
            lang: lang.to_string(),
        };
        let connector: BoxedConnectorIntegration<
            '_,
            PSync,
            TransactionDetailsRequest,
            PaymentResponse,
        > = Box::new(self);
        execute_connector_processing_step(&self.proxy, connector, &request, "psync").await
    }

    fn verify_redirect_checksum(
        &self,
        redirect: &ReceivedRedirect,
        txn_secret: &Secret<String>,
    ) -> CustomResult<bool, errors::ConnectorError> {
        self.verify(redirect, txn_secret)
    }
}
