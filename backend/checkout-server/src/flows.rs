//! Checkout steps driven by the storefront and the gateway redirect.
//!
//! Every step ends with a [`CheckoutRedirect`]; failures are reported to the shopper through
//! the [`NotificationService`] instead of an error page.

pub mod dispatch;
pub mod process;
pub mod reconcile;
pub mod wallet;

use std::sync::Arc;

use common_utils::{consts, CustomResult};
use domain_types::{
    errors::{CheckoutError, StorageError},
    notification::Notification,
    session::SessionPaymentState,
};
use external_services::shared_metrics;
use interfaces::{
    gateway::PaymentGateway,
    host::{BasketRepository, NotificationService, OrderFinalizer, SessionStore},
};

/// Host platform capabilities and the gateway client used by the checkout steps.
#[derive(Clone)]
pub struct CheckoutServices {
    pub gateway: Arc<dyn PaymentGateway>,
    pub sessions: Arc<dyn SessionStore>,
    pub baskets: Arc<dyn BasketRepository>,
    pub orders: Arc<dyn OrderFinalizer>,
    pub notifications: Arc<dyn NotificationService>,
}

impl CheckoutServices {
    async fn notify_error(&self, session_id: &str, message: &str) {
        let message = if message.trim().is_empty() {
            consts::GENERIC_ERROR_TEXT
        } else {
            message
        };
        self.notifications
            .push(session_id, Notification::error(message))
            .await;
    }

    /// Persists the merged state and hands it to the storefront order process. A paid
    /// attempt is complete afterwards and its session state is cleared.
    async fn finalize_order(
        &self,
        session_id: &str,
        state: &mut SessionPaymentState,
        paid: bool,
    ) -> CustomResult<(), StorageError> {
        self.sessions.save(session_id, state.clone()).await?;
        self.orders.handle_payment_response(session_id, state).await?;
        if paid {
            state.clear();
            self.sessions.save(session_id, state.clone()).await?;
        }
        Ok(())
    }

    async fn notify_success(&self, session_id: &str, message: &str) {
        self.notifications
            .push(session_id, Notification::success(message))
            .await;
    }
}

/// Where the browser goes after a checkout step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutRedirect {
    /// `/{lang}/confirmation`
    Confirmation,
    /// Back to the checkout page
    Checkout,
    /// `/{lang}/place-order`, the storefront creates the order first
    PlaceOrder,
    /// Gateway hosted payment page
    Gateway(String),
}

fn record_failure(step: &str, error: &CheckoutError) {
    tracing::info!(step, reason = %error, "checkout step failed");
    shared_metrics::record_checkout_outcome(step, &error.to_string());
}

fn record_success(step: &str) {
    shared_metrics::record_checkout_outcome(step, "success");
}
