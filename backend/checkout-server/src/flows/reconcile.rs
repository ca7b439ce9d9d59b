use common_utils::{consts, CustomResult};
use domain_types::{
    errors::{CheckoutError, StorageError},
    payments::{PaymentResponse, ResultData, TransactionData},
    redirect::{ReceivedRedirect, RedirectCallback},
};

use super::{record_failure, record_success, CheckoutRedirect, CheckoutServices};

const STEP: &str = "reconcile";

/// Handles the shopper coming back from the gateway payment page.
///
/// Only a redirect whose checksum matches the stored txn secret is followed by the
/// transaction details call; the details answer is what the order is finalized with.
/// Every outcome ends on the confirmation page.
#[tracing::instrument(skip_all, fields(session_id = %session_id))]
pub async fn payment_response(
    services: &CheckoutServices,
    session_id: &str,
    lang: &str,
    callback: RedirectCallback,
) -> CustomResult<CheckoutRedirect, StorageError> {
    let supplied_text = callback.status_text.clone().unwrap_or_default();
    let Some(redirect) = callback.into_received() else {
        record_failure(STEP, &CheckoutError::MissingTransactionId);
        services.notify_error(session_id, &supplied_text).await;
        return Ok(CheckoutRedirect::Confirmation);
    };

    let mut state = services.sessions.load(session_id).await?;

    if !redirect.api_status().is_success() {
        record_failure(STEP, &CheckoutError::GatewayReportedFailure);
        services.notify_error(session_id, &supplied_text).await;
        if state.stored_request().is_none() {
            tracing::warn!(tid = %redirect.tid, "failure redirect without a payment attempt");
            return Ok(CheckoutRedirect::Confirmation);
        }
        state.merge_response(&response_from_redirect(&redirect));
        services.finalize_order(session_id, &mut state, false).await?;
        return Ok(CheckoutRedirect::Confirmation);
    }

    let checksum_valid = match state.txn_secret.as_ref() {
        Some(txn_secret) => services
            .gateway
            .verify_redirect_checksum(&redirect, txn_secret)
            .unwrap_or_else(|error| {
                tracing::warn!(?error, "redirect checksum could not be verified");
                false
            }),
        None => {
            tracing::warn!(tid = %redirect.tid, "no txn secret stored for the session");
            false
        }
    };
    if !checksum_valid {
        record_failure(STEP, &CheckoutError::ChecksumInvalid);
        services
            .notify_error(session_id, consts::CHECKSUM_MISMATCH_TEXT)
            .await;
        return Ok(CheckoutRedirect::Confirmation);
    }

    let response = match services
        .gateway
        .transaction_details(&redirect.tid, lang)
        .await
    {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(?error, tid = %redirect.tid, "transaction details call failed");
            record_failure(STEP, &CheckoutError::GatewayUnavailable);
            services
                .notify_error(session_id, consts::GENERIC_ERROR_TEXT)
                .await;
            return Ok(CheckoutRedirect::Confirmation);
        }
    };

    let paid = response.is_success();
    if paid {
        record_success(STEP);
        services
            .notify_success(session_id, response.status_text())
            .await;
    } else {
        record_failure(STEP, &CheckoutError::GatewayReportedFailure);
        services
            .notify_error(session_id, response.status_text())
            .await;
    }
    state.merge_response(&response);
    services.finalize_order(session_id, &mut state, paid).await?;
    Ok(CheckoutRedirect::Confirmation)
}

/// The gateway's own failure report, kept so the order process sees the tid and reason.
fn response_from_redirect(redirect: &ReceivedRedirect) -> PaymentResponse {
    PaymentResponse {
        result: ResultData {
            status: redirect.api_status(),
            status_code: None,
            status_text: redirect.status_text.clone().unwrap_or_default(),
            redirect_url: None,
        },
        transaction: Some(TransactionData {
            tid: Some(redirect.tid.clone()),
            ..Default::default()
        }),
    }
}
