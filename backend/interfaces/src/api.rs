use common_utils::CustomResult;
use domain_types::{
    errors::ConnectorError, payments::PaymentResponse, router_response_types::Response,
    types::Connectors,
};
use hyperswitch_masking::Maskable;

pub trait ConnectorCommon {
    /// Name of the connector (in lowercase).
    fn id(&self) -> &'static str;

    /// HTTP header used for authorization.
    fn get_auth_header(&self) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(Vec::new())
    }

    /// HTTP `Content-Type` to be used for POST requests.
    /// Defaults to `application/json`.
    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    /// The base URL for interacting with the connector's API.
    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str;

    /// Error answer (4xx/5xx) of the connector, expressed as a failed payment response
    fn build_error_response(
        &self,
        res: Response,
    ) -> CustomResult<PaymentResponse, ConnectorError> {
        Err(ConnectorError::UnexpectedResponseStatus {
            status_code: res.status_code,
        }
        .into())
    }
}
