use serde::{Deserialize, Serialize};

use crate::payments::Customer;

/// The parts of the storefront basket a payment attempt is built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketSnapshot {
    /// ISO 4217 code
    pub currency: String,
    /// Basket total in major units, as kept by the storefront
    pub basket_amount: f64,
    pub customer: Customer,
    pub order_no: Option<String>,
}

impl BasketSnapshot {
    pub fn country_code(&self) -> &str {
        &self.customer.billing.country_code
    }
}
