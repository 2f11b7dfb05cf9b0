use super::{MessageHeader, header_rules};
use crate::domain::catalog::{self, STATUS_MESSAGE_GATEWAY_CANCELED, StatusOutcome};
use crate::domain::constraints::{Constraint, FieldRule, ValidationGroup};
use crate::domain::mapping::{TransportMapping, fields};
use crate::error::Result;

/// Re-query of the status of an earlier payment. Not signed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentStatusRequest {
    pub header: MessageHeader,
}

impl PaymentStatusRequest {
    pub fn from_transport_mapping(mapping: &TransportMapping) -> Self {
        Self {
            header: MessageHeader::from_transport_mapping(mapping),
        }
    }

    pub fn to_transport_mapping(&self) -> TransportMapping {
        self.header.to_transport_mapping(false)
    }

    pub(crate) fn rules(&self) -> Vec<FieldRule<'_>> {
        header_rules(&self.header)
    }
}

/// Answer to a status request: a single status message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentStatusResponse {
    pub header: MessageHeader,
    status_message: Option<String>,
}

impl PaymentStatusResponse {
    /// Reads the `PaymentStatusMessage` key only.
    pub fn from_transport_mapping(mapping: &TransportMapping) -> Self {
        Self {
            header: MessageHeader::default(),
            status_message: mapping.get_owned(fields::PAYMENT_STATUS_MESSAGE),
        }
    }

    pub fn to_transport_mapping(&self) -> TransportMapping {
        let mut mapping = TransportMapping::new();
        mapping.insert_opt(fields::PAYMENT_STATUS_MESSAGE, self.status_message());
        mapping
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, value: Option<String>) {
        self.status_message = value;
    }

    /// Catalog label of the status message, when it is a known one.
    pub fn status_label(&self) -> Option<&'static str> {
        self.status_message()
            .and_then(|message| catalog::status_message(message).ok())
            .map(|record| record.label)
    }

    /// Outcome of the status message. Unknown messages are a catalog lookup
    /// error.
    pub fn outcome(&self) -> Result<StatusOutcome> {
        catalog::status_message(self.status_message().unwrap_or_default())
            .map(|record| record.outcome)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self.outcome(), Ok(StatusOutcome::Succeeded))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome(), Ok(StatusOutcome::Failed))
    }

    pub fn is_errored(&self) -> bool {
        matches!(self.outcome(), Ok(StatusOutcome::Errored))
    }

    pub fn is_canceled(&self) -> bool {
        self.status_message() == Some(STATUS_MESSAGE_GATEWAY_CANCELED)
    }

    pub(crate) fn rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::text(
            fields::PAYMENT_STATUS_MESSAGE,
            "payment status message",
            ValidationGroup::SignaturePart,
            self.status_message(),
            &[Constraint::NotBlank],
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;

    fn response(message: &str) -> PaymentStatusResponse {
        let mapping: TransportMapping =
            [(fields::PAYMENT_STATUS_MESSAGE, message)].into_iter().collect();
        PaymentStatusResponse::from_transport_mapping(&mapping)
    }

    #[test]
    fn test_succeeded_status_message() {
        let response = response("00");
        assert!(response.is_succeeded());
        assert!(!response.is_failed());
        assert!(!response.is_errored());
        assert_eq!(response.status_label(), Some("Succeeded payment"));
    }

    #[test]
    fn test_canceled_is_a_failure() {
        let response = response("M88Admin");
        assert!(response.is_canceled());
        assert!(response.is_failed());
    }

    #[test]
    fn test_errored_status_message() {
        let response = response("Record not found");
        assert!(response.is_errored());
        assert!(!response.is_succeeded());
    }

    #[test]
    fn test_unknown_status_message_is_a_lookup_error() {
        let response = response("Something else");
        assert!(matches!(
            response.outcome(),
            Err(GatewayError::UnknownCatalogEntry { category: "status message", .. })
        ));
        assert!(!response.is_succeeded());
        assert_eq!(response.status_label(), None);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mapping: TransportMapping = [("Other", "00")].into_iter().collect();
        let response = PaymentStatusResponse::from_transport_mapping(&mapping);
        assert_eq!(response.status_message(), None);
    }

    #[test]
    fn test_status_request_mapping_has_no_signature() {
        let mapping: TransportMapping = [
            ("MerchantCode", "M001"),
            ("RefNo", "REF1"),
            ("Amount", "1.00"),
            ("Signature", "ignored"),
        ]
        .into_iter()
        .collect();
        let request = PaymentStatusRequest::from_transport_mapping(&mapping);
        let out = request.to_transport_mapping();
        assert!(!out.contains_key(fields::SIGNATURE));
        assert_eq!(out.len(), 3);
    }
}
