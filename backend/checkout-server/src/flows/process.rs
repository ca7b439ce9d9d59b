use common_utils::{consts, CustomResult};
use domain_types::{
    errors::{CheckoutError, StorageError},
    payment_form::{IntentSettings, PaymentForm},
    payments::PaymentRequest,
    utils::ForeignTryFrom,
};

use super::{dispatch::dispatch_stored_request, record_failure, CheckoutRedirect, CheckoutServices};

const STEP: &str = "process";

#[derive(Debug, Clone)]
pub struct ProcessSettings {
    pub intent: IntentSettings,
    /// The storefront creates the order and calls the direct endpoint afterwards
    pub order_creation_before_payment: bool,
}

/// Builds the payment request from the posted form and stores it as the current attempt.
#[tracing::instrument(skip_all, fields(session_id = %session_id))]
pub async fn process_payment(
    services: &CheckoutServices,
    settings: &ProcessSettings,
    session_id: &str,
    form: PaymentForm,
) -> CustomResult<CheckoutRedirect, StorageError> {
    let basket = services.baskets.load_basket(session_id).await?;

    let request = match PaymentRequest::foreign_try_from((&basket, &form, &settings.intent)) {
        Ok(request) => request,
        Err(error) => {
            tracing::warn!(?error, "payment form could not be turned into a request");
            record_failure(STEP, &CheckoutError::InvalidPaymentRequest);
            services
                .notify_error(session_id, consts::GENERIC_ERROR_TEXT)
                .await;
            return Ok(CheckoutRedirect::Checkout);
        }
    };
    tracing::info!(
        payment_method = %request.payment_method_key,
        redirect = request.is_redirect_based(),
        "payment request stored"
    );

    let mut state = services.sessions.load(session_id).await?;
    state.start_attempt(request);
    services.sessions.save(session_id, state.clone()).await?;

    if form.reinitialize_payment() || !settings.order_creation_before_payment {
        dispatch_stored_request(services, session_id, &mut state).await
    } else {
        Ok(CheckoutRedirect::PlaceOrder)
    }
}
