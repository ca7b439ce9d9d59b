pub mod api;
pub mod connector_integration;
pub mod gateway;
pub mod host;
pub mod verification;
