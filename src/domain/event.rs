use super::message::Message;
use serde::Serialize;
use std::fmt;

/// Extra arguments attached to an event.
pub type EventArguments = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventName {
    PaymentRequest,
    PaymentResponse,
    PaymentNotifyResponse,
    PaymentStatusRequest,
    PaymentStatusResponse,
    MessageValidationViolations,
}

impl EventName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PaymentRequest => "ipay88.payment_request",
            Self::PaymentResponse => "ipay88.payment_response",
            Self::PaymentNotifyResponse => "ipay88.payment_notify_response",
            Self::PaymentStatusRequest => "ipay88.payment_status_request",
            Self::PaymentStatusResponse => "ipay88.payment_status_response",
            Self::MessageValidationViolations => "ipay88.message_validation_violations",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event published to the notification sink.
///
/// Creation events fire before validation and hand out the message mutably,
/// so sinks may amend it.
#[derive(Debug)]
pub struct GatewayEvent<'a> {
    pub name: EventName,
    pub message: &'a mut Message,
    pub arguments: EventArguments,
}

impl<'a> GatewayEvent<'a> {
    pub fn new(name: EventName, message: &'a mut Message, arguments: EventArguments) -> Self {
        Self {
            name,
            message,
            arguments,
        }
    }

    /// Creation event for the message's own kind.
    pub fn created(message: &'a mut Message, arguments: EventArguments) -> Self {
        Self::new(message.kind().event_name(), message, arguments)
    }

    pub fn violations(message: &'a mut Message, arguments: EventArguments) -> Self {
        Self::new(EventName::MessageValidationViolations, message, arguments)
    }
}
