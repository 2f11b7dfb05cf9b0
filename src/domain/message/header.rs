use super::Message;
use crate::domain::amount::PaymentAmount;
use crate::domain::constraints::Violation;
use crate::domain::mapping::{TransportMapping, fields};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Fields shared by every message variant.
///
/// The stored signature is derived state: every setter of a field that takes
/// part in a signature recipe clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageHeader {
    seller_identifier: Option<String>,
    payment_reference: Option<String>,
    payment_amount: Option<PaymentAmount>,
    signature: Option<String>,
    url: Option<String>,
    related_message: Option<Arc<Message>>,
    violations: Vec<Violation>,
}

impl MessageHeader {
    pub(crate) fn from_transport_mapping(mapping: &TransportMapping) -> Self {
        Self {
            seller_identifier: mapping.get_owned(fields::MERCHANT_CODE),
            payment_reference: mapping.get_owned(fields::REF_NO),
            payment_amount: mapping.get(fields::AMOUNT).map(PaymentAmount::from_wire),
            ..Self::default()
        }
    }

    /// Header entries of the wire mapping. The signature is only emitted for
    /// variants that carry one.
    pub(crate) fn to_transport_mapping(&self, with_signature: bool) -> TransportMapping {
        let mut mapping = TransportMapping::new();
        if let Some(amount) = &self.payment_amount {
            mapping.insert(fields::AMOUNT, amount.to_wire());
        }
        mapping.insert_opt(fields::MERCHANT_CODE, self.seller_identifier());
        mapping.insert_opt(fields::REF_NO, self.payment_reference());
        if with_signature {
            mapping.insert_opt(fields::SIGNATURE, self.signature());
        }
        mapping
    }

    pub fn seller_identifier(&self) -> Option<&str> {
        self.seller_identifier.as_deref()
    }

    pub fn set_seller_identifier(&mut self, value: Option<String>) {
        self.seller_identifier = value;
        self.invalidate_signature();
    }

    pub fn payment_reference(&self) -> Option<&str> {
        self.payment_reference.as_deref()
    }

    pub fn set_payment_reference(&mut self, value: Option<String>) {
        self.payment_reference = value;
        self.invalidate_signature();
    }

    /// The amount as a decimal, when it parsed.
    pub fn payment_amount(&self) -> Option<Decimal> {
        self.payment_amount.as_ref().and_then(PaymentAmount::value)
    }

    pub fn payment_amount_field(&self) -> Option<&PaymentAmount> {
        self.payment_amount.as_ref()
    }

    pub fn set_payment_amount(&mut self, value: Option<PaymentAmount>) {
        self.payment_amount = value;
        self.invalidate_signature();
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub(crate) fn set_signature(&mut self, value: Option<String>) {
        self.signature = value;
    }

    pub fn invalidate_signature(&mut self) {
        self.signature = None;
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, value: Option<String>) {
        self.url = value;
    }

    pub fn related_message(&self) -> Option<&Arc<Message>> {
        self.related_message.as_ref()
    }

    pub(crate) fn set_related_message(&mut self, value: Option<Arc<Message>>) {
        self.related_message = value;
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn set_violations(&mut self, violations: Vec<Violation>) {
        self.violations = violations;
    }
}
