use axum::{extract::State, Json};
use domain_types::notification::Notification;

use super::CheckoutSession;
use crate::app::AppState;

/// Drains the messages queued for the shopper by the checkout steps.
pub async fn take_notifications(
    State(state): State<AppState>,
    session: CheckoutSession,
) -> Json<Vec<Notification>> {
    let notifications = state.services.notifications.take(&session.id).await;
    tracing::debug!(count = notifications.len(), "notifications handed to the storefront");
    Json(notifications)
}
