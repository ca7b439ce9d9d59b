//! Capabilities provided by the storefront platform.

use common_utils::CustomResult;
use domain_types::{
    basket::BasketSnapshot, errors::StorageError, notification::Notification,
    session::SessionPaymentState,
};

#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// State of the given session; a fresh session yields the default state.
    async fn load(&self, session_id: &str) -> CustomResult<SessionPaymentState, StorageError>;

    async fn save(
        &self,
        session_id: &str,
        state: SessionPaymentState,
    ) -> CustomResult<(), StorageError>;
}

#[async_trait::async_trait]
pub trait BasketRepository: Send + Sync {
    async fn load_basket(&self, session_id: &str) -> CustomResult<BasketSnapshot, StorageError>;
}

/// Hands a completed payment to the storefront order process.
#[async_trait::async_trait]
pub trait OrderFinalizer: Send + Sync {
    async fn handle_payment_response(
        &self,
        session_id: &str,
        state: &SessionPaymentState,
    ) -> CustomResult<(), StorageError>;
}

/// Messages shown to the shopper on the next storefront page load.
#[async_trait::async_trait]
pub trait NotificationService: Send + Sync {
    async fn push(&self, session_id: &str, notification: Notification);

    /// Removes and returns the pending notifications of the session.
    async fn take(&self, session_id: &str) -> Vec<Notification>;
}
