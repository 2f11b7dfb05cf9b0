use super::{MessageHeader, header_rules};
use crate::domain::catalog::CatalogCategory;
use crate::domain::constraints::{Constraint, FieldRule, ValidationGroup};
use crate::domain::mapping::{TransportMapping, fields};

/// Payment request sent by the seller to open a payment page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentRequest {
    pub header: MessageHeader,
    payment_method: Option<String>,
    payment_currency: Option<String>,
    payment_comment: Option<String>,
    payment_description: Option<String>,
    customer_name: Option<String>,
    customer_email_address: Option<String>,
    customer_phone_number: Option<String>,
    character_encoding: Option<String>,
    signature_type: Option<String>,
    return_url: Option<String>,
    notify_url: Option<String>,
}

impl PaymentRequest {
    pub fn from_transport_mapping(mapping: &TransportMapping) -> Self {
        let mut header = MessageHeader::from_transport_mapping(mapping);
        header.set_signature(mapping.get_owned(fields::SIGNATURE));
        Self {
            header,
            payment_method: mapping.get_owned(fields::PAYMENT_ID),
            payment_currency: mapping.get_owned(fields::CURRENCY),
            payment_comment: mapping.get_owned(fields::REMARK),
            payment_description: mapping.get_owned(fields::PROD_DESC),
            customer_name: mapping.get_owned(fields::USER_NAME),
            customer_email_address: mapping.get_owned(fields::USER_EMAIL),
            customer_phone_number: mapping.get_owned(fields::USER_CONTACT),
            character_encoding: mapping.get_owned(fields::LANG),
            signature_type: mapping.get_owned(fields::SIGNATURE_TYPE),
            return_url: mapping.get_owned(fields::RESPONSE_URL),
            notify_url: mapping.get_owned(fields::BACKEND_URL),
        }
    }

    pub fn to_transport_mapping(&self) -> TransportMapping {
        let mut mapping = TransportMapping::new();
        mapping.insert_opt(fields::BACKEND_URL, self.notify_url());
        mapping.insert_opt(fields::LANG, self.character_encoding());
        mapping.insert_opt(fields::PROD_DESC, self.payment_description());
        mapping.insert_opt(fields::RESPONSE_URL, self.return_url());
        mapping.insert_opt(fields::SIGNATURE_TYPE, self.signature_type());
        mapping.insert_opt(fields::USER_CONTACT, self.customer_phone_number());
        mapping.insert_opt(fields::USER_EMAIL, self.customer_email_address());
        mapping.insert_opt(fields::USER_NAME, self.customer_name());
        mapping.insert_opt(fields::CURRENCY, self.payment_currency());
        mapping.insert_opt(fields::PAYMENT_ID, self.payment_method());
        mapping.insert_opt(fields::REMARK, self.payment_comment());
        mapping.merge_inherited(self.header.to_transport_mapping(true));
        mapping
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn set_payment_method(&mut self, value: Option<String>) {
        self.payment_method = value;
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

    pub fn payment_description(&self) -> Option<&str> {
        self.payment_description.as_deref()
    }

    pub fn set_payment_description(&mut self, value: Option<String>) {
        self.payment_description = value;
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    pub fn set_customer_name(&mut self, value: Option<String>) {
        self.customer_name = value;
    }

    pub fn customer_email_address(&self) -> Option<&str> {
        self.customer_email_address.as_deref()
    }

    pub fn set_customer_email_address(&mut self, value: Option<String>) {
        self.customer_email_address = value;
    }

    pub fn customer_phone_number(&self) -> Option<&str> {
        self.customer_phone_number.as_deref()
    }

    pub fn set_customer_phone_number(&mut self, value: Option<String>) {
        self.customer_phone_number = value;
    }

    pub fn character_encoding(&self) -> Option<&str> {
        self.character_encoding.as_deref()
    }

    pub fn set_character_encoding(&mut self, value: Option<String>) {
        self.character_encoding = value;
    }

    pub fn signature_type(&self) -> Option<&str> {
        self.signature_type.as_deref()
    }

    /// The signature depends on the algorithm, so changing it clears the
    /// stored signature.
    pub fn set_signature_type(&mut self, value: Option<String>) {
        self.signature_type = value;
        self.header.invalidate_signature();
    }

    pub fn return_url(&self) -> Option<&str> {
        self.return_url.as_deref()
    }

    pub fn set_return_url(&mut self, value: Option<String>) {
        self.return_url = value;
    }

    pub fn notify_url(&self) -> Option<&str> {
        self.notify_url.as_deref()
    }

    pub fn set_notify_url(&mut self, value: Option<String>) {
        self.notify_url = value;
    }

    pub(crate) fn rules(&self) -> Vec<FieldRule<'_>> {
        let mut rules = header_rules(&self.header);
        rules.extend(payment_rules(
            self.payment_comment(),
            self.payment_currency(),
            self.payment_method(),
            false,
        ));

        let full = ValidationGroup::Full;
        rules.extend([
            FieldRule::text(
                fields::USER_EMAIL,
                "customer email address",
                full,
                self.customer_email_address(),
                &[Constraint::NotBlank, Constraint::MaxLength(100), Constraint::Email],
            ),
            FieldRule::text(
                fields::USER_NAME,
                "customer name",
                full,
                self.customer_name(),
                &[Constraint::NotBlank, Constraint::MaxLength(100)],
            ),
            FieldRule::text(
                fields::USER_CONTACT,
                "customer phone number",
                full,
                self.customer_phone_number(),
                &[Constraint::NotBlank, Constraint::MaxLength(20)],
            ),
            FieldRule::text(
                fields::PROD_DESC,
                "payment description",
                full,
                self.payment_description(),
                &[Constraint::NotBlank, Constraint::MaxLength(100)],
            ),
            FieldRule::text(
                fields::LANG,
                "message encoding",
                full,
                self.character_encoding(),
                &[
                    Constraint::NotBlank,
                    Constraint::MaxLength(20),
                    Constraint::Choice(CatalogCategory::CharacterEncoding),
                ],
            ),
            FieldRule::text(
                fields::BACKEND_URL,
                "notify URL",
                full,
                self.notify_url(),
                &[Constraint::NotBlank, Constraint::MaxLength(200), Constraint::Url],
            ),
            FieldRule::text(
                fields::RESPONSE_URL,
                "return URL",
                full,
                self.return_url(),
                &[Constraint::NotBlank, Constraint::MaxLength(200), Constraint::Url],
            ),
            FieldRule::text(
                fields::SIGNATURE_TYPE,
                "message signature type",
                ValidationGroup::SignaturePart,
                self.signature_type(),
                &[
                    Constraint::NotBlank,
                    Constraint::MaxLength(10),
                    Constraint::Choice(CatalogCategory::SignatureType),
                ],
            ),
        ]);
        rules
    }
}

/// Rules shared by payment requests and payment responses. Responses sign
/// the payment method, which makes it required and moves it to the first
/// group.
pub(crate) fn payment_rules<'a>(
    comment: Option<&'a str>,
    currency: Option<&'a str>,
    method: Option<&'a str>,
    method_signed: bool,
) -> Vec<FieldRule<'a>> {
    let method_rule = if method_signed {
        FieldRule::text(
            fields::PAYMENT_ID,
            "payment method",
            ValidationGroup::SignaturePart,
            method,
            &[
                Constraint::NotBlank,
                Constraint::Choice(CatalogCategory::PaymentMethod),
            ],
        )
    } else {
        FieldRule::text(
            fields::PAYMENT_ID,
            "payment method",
            ValidationGroup::Full,
            method,
            &[Constraint::Choice(CatalogCategory::PaymentMethod)],
        )
    };
    vec![
        FieldRule::text(
            fields::REMARK,
            "payment comment",
            ValidationGroup::Full,
            comment,
            &[Constraint::MaxLength(100)],
        ),
        FieldRule::text(
            fields::CURRENCY,
            "payment currency",
            ValidationGroup::SignaturePart,
            currency,
            &[
                Constraint::NotBlank,
                Constraint::MaxLength(5),
                Constraint::Choice(CatalogCategory::Currency),
            ],
        ),
        method_rule,
    ]
}
