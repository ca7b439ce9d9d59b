use common_enums::PaymentMethodKey;
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

use crate::payments::{PaymentRequest, PaymentResponse};

/// The request of the current attempt together with the last gateway answer for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentData {
    pub request: Option<PaymentRequest>,
    pub response: Option<PaymentResponse>,
}

/// Payment progress kept in the shopper's storefront session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionPaymentState {
    #[serde(rename = "nnPaymentData")]
    pub payment_data: PaymentData,
    #[serde(rename = "nnTxnSecret")]
    pub txn_secret: Option<Secret<String>>,
    #[serde(rename = "nnDoRedirect")]
    pub do_redirect: bool,
    #[serde(rename = "paymentkey")]
    pub payment_key: Option<PaymentMethodKey>,
}

impl SessionPaymentState {
    /// Replaces whatever a previous attempt left behind.
    pub fn start_attempt(&mut self, request: PaymentRequest) {
        self.payment_key = Some(request.payment_method_key);
        self.do_redirect = request.is_redirect_based();
        self.txn_secret = None;
        self.payment_data = PaymentData {
            request: Some(request),
            response: None,
        };
    }

    pub fn stored_request(&self) -> Option<&PaymentRequest> {
        self.payment_data.request.as_ref()
    }

    /// Last write wins; merging the same response again leaves the state unchanged.
    pub fn merge_response(&mut self, response: &PaymentResponse) {
        self.payment_data.response = Some(response.clone());
    }

    pub fn store_txn_secret(&mut self, txn_secret: Secret<String>) {
        self.txn_secret = Some(txn_secret);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
