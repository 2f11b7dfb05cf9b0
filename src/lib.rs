pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::client::GatewayClient;
pub use config::GatewayConfig;
pub use domain::message::{Message, MessageKind};
pub use error::{GatewayError, Result};
