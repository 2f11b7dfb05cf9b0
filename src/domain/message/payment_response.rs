use super::payment_request::payment_rules;
use super::{MessageHeader, header_rules};
use crate::domain::catalog::PaymentStatus;
use crate::domain::constraints::{Constraint, FieldRule, ValidationGroup};
use crate::domain::mapping::{TransportMapping, fields};

/// Card details the gateway reports for card payments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDetails {
    pub authorization_code: Option<String>,
    pub holder_name: Option<String>,
    pub issuer_country: Option<String>,
    pub issuer_name: Option<String>,
    /// Partially masked, e.g. "123456xxxxxx7890".
    pub number: Option<String>,
}

/// Payment outcome posted back by the gateway, either to the return URL or,
/// as a notify response, to the backend URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentResponse {
    pub header: MessageHeader,
    payment_identifier: Option<String>,
    payment_method: Option<String>,
    payment_status: Option<String>,
    payment_currency: Option<String>,
    payment_comment: Option<String>,
    payment_error: Option<String>,
    pub card: CardDetails,
}

impl PaymentResponse {
    pub fn from_transport_mapping(mapping: &TransportMapping) -> Self {
        let mut header = MessageHeader::from_transport_mapping(mapping);
        header.set_signature(mapping.get_owned(fields::SIGNATURE));
        Self {
            header,
            payment_identifier: mapping.get_owned(fields::TRANS_ID),
            payment_method: mapping.get_owned(fields::PAYMENT_ID),
            payment_status: mapping.get_owned(fields::STATUS),
            payment_currency: mapping.get_owned(fields::CURRENCY),
            payment_comment: mapping.get_owned(fields::REMARK),
            payment_error: mapping.get_owned(fields::ERR_DESC),
            card: CardDetails {
                authorization_code: mapping.get_owned(fields::AUTH_CODE),
                holder_name: mapping.get_owned(fields::CC_NAME),
                issuer_country: mapping.get_owned(fields::S_COUNTRY),
                issuer_name: mapping.get_owned(fields::S_BANKNAME),
                number: mapping.get_owned(fields::CC_NO),
            },
        }
    }

    pub fn to_transport_mapping(&self) -> TransportMapping {
        let mut mapping = TransportMapping::new();
        mapping.insert_opt(fields::AUTH_CODE, self.card.authorization_code.as_deref());
        mapping.insert_opt(fields::CC_NAME, self.card.holder_name.as_deref());
        mapping.insert_opt(fields::CC_NO, self.card.number.as_deref());
        mapping.insert_opt(fields::ERR_DESC, self.payment_error());
        mapping.insert_opt(fields::S_BANKNAME, self.card.issuer_name.as_deref());
        mapping.insert_opt(fields::S_COUNTRY, self.card.issuer_country.as_deref());
        mapping.insert_opt(fields::STATUS, self.payment_status());
        mapping.insert_opt(fields::TRANS_ID, self.payment_identifier());
        mapping.insert_opt(fields::CURRENCY, self.payment_currency());
        mapping.insert_opt(fields::PAYMENT_ID, self.payment_method());
        mapping.insert_opt(fields::REMARK, self.payment_comment());
        mapping.merge_inherited(self.header.to_transport_mapping(true));
        mapping
    }

    pub fn payment_identifier(&self) -> Option<&str> {
        self.payment_identifier.as_deref()
    }

    pub fn set_payment_identifier(&mut self, value: Option<String>) {
        self.payment_identifier = value;
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn set_payment_method(&mut self, value: Option<String>) {
        self.payment_method = value;
        self.header.invalidate_signature();
    }

    pub fn payment_status(&self) -> Option<&str> {
        self.payment_status.as_deref()
    }

    pub fn set_payment_status(&mut self, value: Option<String>) {
        self.payment_status = value;
        self.header.invalidate_signature();
    }

    pub fn payment_currency(&self) -> Option<&str> {
        self.payment_currency.as_deref()
    }

    pub fn set_payment_currency(&mut self, value: Option<String>) {
        self.payment_currency = value;
        self.header.invalidate_signature();
    }

    pub fn payment_comment(&self) -> Option<&str> {
        self.payment_comment.as_deref()
    }

    pub fn set_payment_comment(&mut self, value: Option<String>) {
        self.payment_comment = value;
    }

    pub fn payment_error(&self) -> Option<&str> {
        self.payment_error.as_deref()
    }

    pub fn set_payment_error(&mut self, value: Option<String>) {
        self.payment_error = value;
    }

    pub fn is_succeeded(&self) -> bool {
        self.payment_status() == Some(PaymentStatus::Succeeded.code())
    }

    pub fn is_failed(&self) -> bool {
        self.payment_status() == Some(PaymentStatus::Failed.code())
    }

    pub fn is_delayed(&self) -> bool {
        self.payment_status() == Some(PaymentStatus::Delayed.code())
    }

    pub(crate) fn rules(&self) -> Vec<FieldRule<'_>> {
        let mut rules = header_rules(&self.header);
        rules.extend(payment_rules(
            self.payment_comment(),
            self.payment_currency(),
            self.payment_method(),
            true,
        ));

        let full = ValidationGroup::Full;
        rules.extend([
            FieldRule::text(
                fields::AUTH_CODE,
                "credit card authorization code",
                full,
                self.card.authorization_code.as_deref(),
                &[Constraint::MaxLength(20)],
            ),
            FieldRule::text(
                fields::CC_NAME,
                "credit card holder name",
                full,
                self.card.holder_name.as_deref(),
                &[Constraint::MaxLength(200)],
            ),
            FieldRule::text(
                fields::S_COUNTRY,
                "credit card country",
                full,
                self.card.issuer_country.as_deref(),
                &[Constraint::MaxLength(100)],
            ),
            FieldRule::text(
                fields::S_BANKNAME,
                "credit card issuer name",
                full,
                self.card.issuer_name.as_deref(),
                &[Constraint::MaxLength(100)],
            ),
            FieldRule::text(
                fields::CC_NO,
                "credit card number",
                full,
                self.card.number.as_deref(),
                &[Constraint::MaxLength(16), Constraint::MaskedCardNumber],
            ),
            FieldRule::text(
                fields::ERR_DESC,
                "error",
                full,
                self.payment_error(),
                &[Constraint::MaxLength(100)],
            ),
            FieldRule::text(
                fields::TRANS_ID,
                "payment identifier",
                full,
                self.payment_identifier(),
                &[Constraint::MaxLength(30)],
            ),
            FieldRule::text(
                fields::STATUS,
                "payment status",
                ValidationGroup::SignaturePart,
                self.payment_status(),
                &[Constraint::NotBlank, Constraint::MaxLength(1)],
            ),
        ]);
        rules
    }
}
