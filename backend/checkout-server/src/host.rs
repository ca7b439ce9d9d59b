//! In-memory stand-ins for the storefront platform, used by the standalone server.
//!
//! They keep state for the lifetime of the process only. Sessions are dropped once their
//! payment state is cleared, and the order book retains the most recent orders only.

use std::collections::{HashMap, VecDeque};

use common_utils::CustomResult;
use domain_types::{
    basket::BasketSnapshot, errors::StorageError, notification::Notification,
    payments::PaymentResponse, session::SessionPaymentState,
};
use error_stack::report;
use interfaces::host::{BasketRepository, NotificationService, OrderFinalizer, SessionStore};
use tokio::sync::RwLock;

/// Finalized orders kept by [`InMemoryOrderBook`]
const ORDER_BOOK_CAPACITY: usize = 1024;

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionPaymentState>>,
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, session_id: &str) -> CustomResult<SessionPaymentState, StorageError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(
        &self,
        session_id: &str,
        state: SessionPaymentState,
    ) -> CustomResult<(), StorageError> {
        let mut sessions = self.sessions.write().await;
        if state == SessionPaymentState::default() {
            sessions.remove(session_id);
        } else {
            sessions.insert(session_id.to_string(), state);
        }
        Ok(())
    }
}

/// Baskets by session, with an optional basket handed to every unknown session.
#[derive(Debug, Default)]
pub struct InMemoryBasketRepository {
    baskets: RwLock<HashMap<String, BasketSnapshot>>,
    fallback: Option<BasketSnapshot>,
}

impl InMemoryBasketRepository {
    pub fn with_fallback(fallback: Option<BasketSnapshot>) -> Self {
        Self {
            baskets: RwLock::default(),
            fallback,
        }
    }

    pub async fn insert(&self, session_id: &str, basket: BasketSnapshot) {
        self.baskets
            .write()
            .await
            .insert(session_id.to_string(), basket);
    }
}

#[async_trait::async_trait]
impl BasketRepository for InMemoryBasketRepository {
    async fn load_basket(&self, session_id: &str) -> CustomResult<BasketSnapshot, StorageError> {
        self.baskets
            .read()
            .await
            .get(session_id)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| report!(StorageError::BasketNotFound(session_id.to_string())))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedOrder {
    pub session_id: String,
    pub response: Option<PaymentResponse>,
}

/// Records the payments handed over for order processing, oldest first.
#[derive(Debug, Default)]
pub struct InMemoryOrderBook {
    orders: RwLock<VecDeque<FinalizedOrder>>,
}

impl InMemoryOrderBook {
    pub async fn orders(&self) -> Vec<FinalizedOrder> {
        self.orders.read().await.iter().cloned().collect()
    }
}

#[async_trait::async_trait]
impl OrderFinalizer for InMemoryOrderBook {
    async fn handle_payment_response(
        &self,
        session_id: &str,
        state: &SessionPaymentState,
    ) -> CustomResult<(), StorageError> {
        let response = state.payment_data.response.clone();
        tracing::info!(
            session_id,
            tid = ?response.as_ref().and_then(|response| response.tid()),
            "payment handed over to order processing"
        );
        let mut orders = self.orders.write().await;
        if orders.len() == ORDER_BOOK_CAPACITY {
            orders.pop_front();
        }
        orders.push_back(FinalizedOrder {
            session_id: session_id.to_string(),
            response,
        });
        Ok(())
    }
}

/// Notifications waiting for the next page load of a session.
#[derive(Debug, Default)]
pub struct InMemoryNotifications {
    pending: RwLock<HashMap<String, Vec<Notification>>>,
}

#[async_trait::async_trait]
impl NotificationService for InMemoryNotifications {
    async fn push(&self, session_id: &str, notification: Notification) {
        self.pending
            .write()
            .await
            .entry(session_id.to_string())
            .or_default()
            .push(notification);
    }

    async fn take(&self, session_id: &str) -> Vec<Notification> {
        self.pending
            .write()
            .await
            .remove(session_id)
            .unwrap_or_default()
    }
}
