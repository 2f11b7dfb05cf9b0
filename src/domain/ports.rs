use super::constraints::{ValidationGroup, Violation};
use super::event::GatewayEvent;
use super::mapping::TransportMapping;
use super::message::{HttpMethod, Message};
use crate::error::Result;
use async_trait::async_trait;

pub const HTTP_OK: u16 = 200;

/// A form submission to the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: TransportMapping,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl TransportResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: HTTP_OK,
            reason: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == HTTP_OK
    }
}

/// Executes HTTP form submissions. Timeouts and cancellation are the
/// implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Runs declared field rules.
///
/// `groups` is a group sequence: a group is only evaluated when every earlier
/// group produced no violation.
pub trait MessageValidator: Send + Sync {
    fn validate(&self, message: &Message, groups: &[ValidationGroup]) -> Vec<Violation>;
}

/// Receives gateway events. Sinks cannot fail the flow.
pub trait EventSink: Send + Sync {
    fn notify(&self, event: &mut GatewayEvent<'_>);
}

pub type TransportBox = Box<dyn Transport>;
pub type MessageValidatorBox = Box<dyn MessageValidator>;
pub type EventSinkBox = Box<dyn EventSink>;
