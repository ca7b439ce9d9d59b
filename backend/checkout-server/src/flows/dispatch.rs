use common_utils::{consts, CustomResult};
use domain_types::{
    errors::{CheckoutError, StorageError},
    session::SessionPaymentState,
};

use super::{record_failure, record_success, CheckoutRedirect, CheckoutServices};

const STEP: &str = "dispatch";

/// Sends the payment request stored in the session to the gateway.
///
/// Redirect based methods hand the browser to the gateway page once the txn secret is
/// stored; direct methods are finalized right away on success.
#[tracing::instrument(skip_all, fields(session_id = %session_id))]
pub async fn dispatch_stored_request(
    services: &CheckoutServices,
    session_id: &str,
    state: &mut SessionPaymentState,
) -> CustomResult<CheckoutRedirect, StorageError> {
    let Some(request) = state.stored_request().cloned() else {
        record_failure(STEP, &CheckoutError::PaymentDataMissing);
        services
            .notify_error(session_id, consts::GENERIC_ERROR_TEXT)
            .await;
        return Ok(CheckoutRedirect::Checkout);
    };
    let redirect_based = request.is_redirect_based();

    let response = match services.gateway.create_payment(&request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(?error, "payment call to the gateway failed");
            record_failure(STEP, &CheckoutError::GatewayUnavailable);
            services
                .notify_error(session_id, consts::GENERIC_ERROR_TEXT)
                .await;
            return Ok(if redirect_based {
                CheckoutRedirect::Confirmation
            } else {
                CheckoutRedirect::Checkout
            });
        }
    };

    if redirect_based {
        match (response.redirect_url(), response.txn_secret()) {
            (Some(redirect_url), Some(txn_secret)) => {
                state.store_txn_secret(txn_secret.clone());
                services.sessions.save(session_id, state.clone()).await?;
                record_success(STEP);
                Ok(CheckoutRedirect::Gateway(redirect_url.to_string()))
            }
            _ => {
                record_failure(STEP, &CheckoutError::RedirectDataMissing);
                services
                    .notify_error(session_id, response.status_text())
                    .await;
                Ok(CheckoutRedirect::Confirmation)
            }
        }
    } else if response.is_success() {
        state.merge_response(&response);
        services.finalize_order(session_id, state, true).await?;
        record_success(STEP);
        Ok(CheckoutRedirect::Confirmation)
    } else {
        record_failure(STEP, &CheckoutError::GatewayReportedFailure);
        services
            .notify_error(session_id, response.status_text())
            .await;
        Ok(CheckoutRedirect::Checkout)
    }
}

/// Entry point of the storefront when the order was created before the payment.
pub async fn direct_payment_process(
    services: &CheckoutServices,
    session_id: &str,
) -> CustomResult<CheckoutRedirect, StorageError> {
    let mut state = services.sessions.load(session_id).await?;
    dispatch_stored_request(services, session_id, &mut state).await
}
