//! Application layer orchestrating gateway exchanges.
//!
//! [`client::GatewayClient`] sequences message creation, event notification,
//! validation and transport dispatch. [`validation::ValidationPipeline`] runs
//! the two validation phases against the configured validator.

pub mod client;
pub mod validation;
