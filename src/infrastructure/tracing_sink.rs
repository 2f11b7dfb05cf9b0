use crate::domain::event::{EventName, GatewayEvent};
use crate::domain::ports::EventSink;
use tracing::{info, warn};

/// Forwards gateway events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl TracingEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingEventSink {
    fn notify(&self, event: &mut GatewayEvent<'_>) {
        let message = &*event.message;
        let reference = message.header().payment_reference().unwrap_or_default();
        match event.name {
            EventName::MessageValidationViolations => {
                for violation in message.violations() {
                    warn!(
                        event = %event.name,
                        kind = ?message.kind(),
                        reference,
                        field = %violation.field,
                        "{}",
                        violation.message
                    );
                }
            }
            name => info!(
                event = %name,
                kind = ?message.kind(),
                reference,
                arguments = %serde_json::Value::Object(event.arguments.clone()),
                "{message}"
            ),
        }
    }
}
