use crate::domain::constraints::Violation;
use crate::domain::mapping::TransportMapping;
use crate::domain::message::{Message, MessageKind};
use crate::error::{GatewayError, Result};
use serde::Serialize;
use std::io::Write;

/// JSON view of a message: its wire fields and its violations.
#[derive(Debug, Serialize)]
pub struct MessageReport<'a> {
    pub kind: MessageKind,
    pub description: String,
    pub url: Option<&'a str>,
    pub fields: TransportMapping,
    pub violations: &'a [Violation],
}

impl<'a> From<&'a Message> for MessageReport<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            kind: message.kind(),
            description: message.to_string(),
            url: message.url(),
            fields: message.to_transport_mapping(),
            violations: message.violations(),
        }
    }
}

/// Writes message reports as pretty-printed JSON.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_message(&mut self, message: &Message) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &MessageReport::from(message))
            .map_err(|e| GatewayError::IoError(e.into()))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_fields_as_pairs() {
        let mapping: TransportMapping = [("PaymentStatusMessage", "00")].into_iter().collect();
        let message = Message::from_transport_mapping(MessageKind::PaymentStatusResponse, &mapping);

        let mut out = Vec::new();
        ReportWriter::new(&mut out).write_message(&message).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(report["kind"], "PaymentStatusResponse");
        assert_eq!(report["fields"][0][0], "PaymentStatusMessage");
        assert_eq!(report["fields"][0][1], "00");
        assert_eq!(report["violations"].as_array().map(Vec::len), Some(0));
    }
}
