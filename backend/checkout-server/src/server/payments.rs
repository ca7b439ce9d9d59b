use axum::{
    extract::{rejection::FormRejection, rejection::QueryRejection, Query, State},
    response::Response,
    Form,
};
use domain_types::{payment_form::PaymentForm, redirect::RedirectCallback};

use super::{settle, CheckoutSession};
use crate::{
    app::AppState,
    flows::{dispatch, process, reconcile, CheckoutRedirect},
};

/// Gateway return in query parameters.
pub async fn payment_response_query(
    State(state): State<AppState>,
    session: CheckoutSession,
    callback: Result<Query<RedirectCallback>, QueryRejection>,
) -> Response {
    let callback = callback
        .map(|Query(callback)| callback)
        .unwrap_or_else(|rejection| {
            tracing::warn!(%rejection, "unreadable redirect parameters");
            RedirectCallback::default()
        });
    payment_response(state, session, callback).await
}

/// Gateway return posted as a form.
pub async fn payment_response_form(
    State(state): State<AppState>,
    session: CheckoutSession,
    callback: Result<Form<RedirectCallback>, FormRejection>,
) -> Response {
    let callback = callback
        .map(|Form(callback)| callback)
        .unwrap_or_else(|rejection| {
            tracing::warn!(%rejection, "unreadable redirect form");
            RedirectCallback::default()
        });
    payment_response(state, session, callback).await
}

async fn payment_response(
    state: AppState,
    session: CheckoutSession,
    callback: RedirectCallback,
) -> Response {
    tracing::info!(tid = ?callback.tid, status = ?callback.status, "gateway redirect received");
    let outcome = reconcile::payment_response(
        &state.services,
        &session.id,
        &session.gateway_lang(),
        callback,
    )
    .await;
    settle(&state, &session, outcome, CheckoutRedirect::Confirmation).await
}

pub async fn process_payment(
    State(state): State<AppState>,
    session: CheckoutSession,
    form: Result<Form<PaymentForm>, FormRejection>,
) -> Response {
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        tracing::warn!(%rejection, "unreadable payment form");
        PaymentForm::default()
    });
    let settings = state.process_settings(&session.gateway_lang());
    let outcome = process::process_payment(&state.services, &settings, &session.id, form).await;
    settle(&state, &session, outcome, CheckoutRedirect::Checkout).await
}

pub async fn direct_payment_process(
    State(state): State<AppState>,
    session: CheckoutSession,
) -> Response {
    let outcome = dispatch::direct_payment_process(&state.services, &session.id).await;
    settle(&state, &session, outcome, CheckoutRedirect::Checkout).await
}
