use common_utils::CustomResult;
use domain_types::{
    errors::ConnectorError,
    payments::{PaymentRequest, PaymentResponse},
    redirect::ReceivedRedirect,
};
use hyperswitch_masking::Secret;

/// Server side calls to the payment gateway.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates the payment (capture or authorization, per merchant settings).
    async fn create_payment(
        &self,
        request: &PaymentRequest,
    ) -> CustomResult<PaymentResponse, ConnectorError>;

    /// Fetches the full, authoritative state of a transaction.
    async fn transaction_details(
        &self,
        tid: &str,
        lang: &str,
    ) -> CustomResult<PaymentResponse, ConnectorError>;

    /// Checks the checksum the gateway appended to a redirect against the stored txn secret.
    fn verify_redirect_checksum(
        &self,
        redirect: &ReceivedRedirect,
        txn_secret: &Secret<String>,
    ) -> CustomResult<bool, ConnectorError>;
}
