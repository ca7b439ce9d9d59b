pub mod basket;
pub mod connector_flow;
pub mod errors;
pub mod notification;
pub mod payment_form;
pub mod payments;
pub mod redirect;
pub mod router_response_types;
pub mod session;
pub mod types;
pub mod utils;
pub mod wallet;
