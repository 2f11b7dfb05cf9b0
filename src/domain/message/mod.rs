//! Gateway messages.
//!
//! The variant set is closed: [`MessageKind`] carries the static metadata of
//! every variant (HTTP binding, pairing, signature recipe) and [`Message`]
//! holds an instance of one of them.

mod header;
mod payment_request;
mod payment_response;
mod status;

pub use header::MessageHeader;
pub use payment_request::PaymentRequest;
pub use payment_response::{CardDetails, PaymentResponse};
pub use status::{PaymentStatusRequest, PaymentStatusResponse};

use super::amount::PaymentAmount;
use super::constraints::{Constraint, FieldRule, ValidationGroup, Violation};
use super::event::EventName;
use super::mapping::{TransportMapping, fields};
use super::signature;
use crate::error::{GatewayError, Result};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

const ENTRY_URL: &str = "https://www.mobile88.com/epayment/entry.asp";
const ENQUIRY_URL: &str = "https://www.mobile88.com/epayment/enquiry.asp";
const SIGNATURE_TEST_URL: &str = "https://www.mobile88.com/epayment/testing/testsignature_256.asp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Fields a signature recipe can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeField {
    SellerIdentifier,
    PaymentReference,
    PaymentAmount,
    PaymentCurrency,
    PaymentMethod,
    PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageKind {
    PaymentRequest,
    PaymentResponse,
    PaymentNotifyResponse,
    PaymentStatusRequest,
    PaymentStatusResponse,
}

/// Request kind to the response kind it expects back.
pub const PAIRINGS: &[(MessageKind, MessageKind)] = &[
    (MessageKind::PaymentRequest, MessageKind::PaymentResponse),
    (
        MessageKind::PaymentStatusRequest,
        MessageKind::PaymentStatusResponse,
    ),
];

impl MessageKind {
    pub const ALL: [MessageKind; 5] = [
        MessageKind::PaymentRequest,
        MessageKind::PaymentResponse,
        MessageKind::PaymentNotifyResponse,
        MessageKind::PaymentStatusRequest,
        MessageKind::PaymentStatusResponse,
    ];

    pub fn is_request(self) -> bool {
        matches!(self, Self::PaymentRequest | Self::PaymentStatusRequest)
    }

    pub fn is_response(self) -> bool {
        !self.is_request()
    }

    pub fn requires_signature(self) -> bool {
        matches!(
            self,
            Self::PaymentRequest | Self::PaymentResponse | Self::PaymentNotifyResponse
        )
    }

    pub fn http_method(self) -> HttpMethod {
        HttpMethod::Post
    }

    /// Where the message is sent to or received from. Notify responses are
    /// pushed by the gateway to the seller's backend URL.
    pub fn default_url(self) -> Option<&'static str> {
        match self {
            Self::PaymentRequest | Self::PaymentResponse => Some(ENTRY_URL),
            Self::PaymentStatusRequest | Self::PaymentStatusResponse => Some(ENQUIRY_URL),
            Self::PaymentNotifyResponse => None,
        }
    }

    pub fn signature_test_url(self) -> Option<&'static str> {
        match self {
            Self::PaymentRequest => Some(SIGNATURE_TEST_URL),
            _ => None,
        }
    }

    /// The paired variant, resolved through [`PAIRINGS`] in both directions.
    pub fn paired(self) -> Option<MessageKind> {
        paired_in(self, PAIRINGS)
    }

    /// The kind a related message of this kind is expected to be. Notify
    /// responses answer payment requests without being in [`PAIRINGS`].
    pub fn related_kind(self) -> Option<MessageKind> {
        match self {
            Self::PaymentNotifyResponse => Some(Self::PaymentRequest),
            _ => self.paired(),
        }
    }

    /// Whether an instance of `other` may be attached as related message.
    pub fn accepts_related(self, other: MessageKind) -> bool {
        match self {
            Self::PaymentRequest => {
                matches!(other, Self::PaymentResponse | Self::PaymentNotifyResponse)
            }
            _ => self.related_kind() == Some(other),
        }
    }

    pub fn signature_recipe(self) -> &'static [RecipeField] {
        use RecipeField::*;
        match self {
            Self::PaymentRequest => &[
                SellerIdentifier,
                PaymentReference,
                PaymentAmount,
                PaymentCurrency,
            ],
            Self::PaymentResponse | Self::PaymentNotifyResponse => &[
                SellerIdentifier,
                PaymentMethod,
                PaymentReference,
                PaymentAmount,
                PaymentCurrency,
                PaymentStatus,
            ],
            Self::PaymentStatusRequest | Self::PaymentStatusResponse => &[],
        }
    }

    pub fn event_name(self) -> EventName {
        match self {
            Self::PaymentRequest => EventName::PaymentRequest,
            Self::PaymentResponse => EventName::PaymentResponse,
            Self::PaymentNotifyResponse => EventName::PaymentNotifyResponse,
            Self::PaymentStatusRequest => EventName::PaymentStatusRequest,
            Self::PaymentStatusResponse => EventName::PaymentStatusResponse,
        }
    }

    /// Field receiving a response body that is a bare string rather than a
    /// form-encoded field set.
    pub fn bare_body_field(self) -> Option<&'static str> {
        match self {
            Self::PaymentStatusResponse => Some(fields::PAYMENT_STATUS_MESSAGE),
            Self::PaymentResponse | Self::PaymentNotifyResponse => Some(fields::ERR_DESC),
            _ => None,
        }
    }
}

/// Looks `kind` up in a pairing table.
pub fn paired_in(
    kind: MessageKind,
    pairings: &[(MessageKind, MessageKind)],
) -> Option<MessageKind> {
    pairings.iter().find_map(|(request, response)| {
        if *request == kind {
            Some(*response)
        } else if *response == kind {
            Some(*request)
        } else {
            None
        }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PaymentRequest(PaymentRequest),
    PaymentResponse(PaymentResponse),
    PaymentNotifyResponse(PaymentResponse),
    PaymentStatusRequest(PaymentStatusRequest),
    PaymentStatusResponse(PaymentStatusResponse),
}

impl Message {
    /// Builds a message from its wire fields. Missing keys leave the
    /// corresponding fields unset; construction never fails.
    pub fn from_transport_mapping(kind: MessageKind, mapping: &TransportMapping) -> Self {
        match kind {
            MessageKind::PaymentRequest => {
                Self::PaymentRequest(PaymentRequest::from_transport_mapping(mapping))
            }
            MessageKind::PaymentResponse => {
                Self::PaymentResponse(PaymentResponse::from_transport_mapping(mapping))
            }
            MessageKind::PaymentNotifyResponse => {
                Self::PaymentNotifyResponse(PaymentResponse::from_transport_mapping(mapping))
            }
            MessageKind::PaymentStatusRequest => {
                Self::PaymentStatusRequest(PaymentStatusRequest::from_transport_mapping(mapping))
            }
            MessageKind::PaymentStatusResponse => {
                Self::PaymentStatusResponse(PaymentStatusResponse::from_transport_mapping(mapping))
            }
        }
    }

    pub fn to_transport_mapping(&self) -> TransportMapping {
        match self {
            Self::PaymentRequest(m) => m.to_transport_mapping(),
            Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => m.to_transport_mapping(),
            Self::PaymentStatusRequest(m) => m.to_transport_mapping(),
            Self::PaymentStatusResponse(m) => m.to_transport_mapping(),
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::PaymentRequest(_) => MessageKind::PaymentRequest,
            Self::PaymentResponse(_) => MessageKind::PaymentResponse,
            Self::PaymentNotifyResponse(_) => MessageKind::PaymentNotifyResponse,
            Self::PaymentStatusRequest(_) => MessageKind::PaymentStatusRequest,
            Self::PaymentStatusResponse(_) => MessageKind::PaymentStatusResponse,
        }
    }

    pub fn header(&self) -> &MessageHeader {
        match self {
            Self::PaymentRequest(m) => &m.header,
            Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => &m.header,
            Self::PaymentStatusRequest(m) => &m.header,
            Self::PaymentStatusResponse(m) => &m.header,
        }
    }

    pub fn header_mut(&mut self) -> &mut MessageHeader {
        match self {
            Self::PaymentRequest(m) => &mut m.header,
            Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => &mut m.header,
            Self::PaymentStatusRequest(m) => &mut m.header,
            Self::PaymentStatusResponse(m) => &mut m.header,
        }
    }

    pub fn signature(&self) -> Option<&str> {
        self.header().signature()
    }

    /// The signature algorithm in effect. Responses are always SHA256.
    pub fn signature_type(&self) -> Option<&str> {
        match self {
            Self::PaymentRequest(m) => m.signature_type(),
            Self::PaymentResponse(_) | Self::PaymentNotifyResponse(_) => {
                Some(signature::SHA256)
            }
            Self::PaymentStatusRequest(_) | Self::PaymentStatusResponse(_) => None,
        }
    }

    /// Computes the signature for the current field values without storing it.
    pub fn compute_signature(&self, shared_secret: &str) -> Option<String> {
        signature::compute_signature(self, shared_secret)
    }

    /// Computes and stores the signature.
    pub fn sign(&mut self, shared_secret: &str) -> Option<&str> {
        let signature = self.compute_signature(shared_secret);
        self.header_mut().set_signature(signature);
        self.signature()
    }

    /// String value of a recipe field, empty when unset.
    pub fn recipe_value(&self, field: RecipeField) -> String {
        let header = self.header();
        let value = match field {
            RecipeField::SellerIdentifier => header.seller_identifier().map(str::to_string),
            RecipeField::PaymentReference => header.payment_reference().map(str::to_string),
            RecipeField::PaymentAmount => {
                header.payment_amount_field().map(PaymentAmount::to_hashable)
            }
            RecipeField::PaymentCurrency => match self {
                Self::PaymentRequest(m) => m.payment_currency().map(str::to_string),
                Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => {
                    m.payment_currency().map(str::to_string)
                }
                _ => None,
            },
            RecipeField::PaymentMethod => match self {
                Self::PaymentRequest(m) => m.payment_method().map(str::to_string),
                Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => {
                    m.payment_method().map(str::to_string)
                }
                _ => None,
            },
            RecipeField::PaymentStatus => match self {
                Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => {
                    m.payment_status().map(str::to_string)
                }
                _ => None,
            },
        };
        value.unwrap_or_default()
    }

    /// Declared field rules of the variant, every group included.
    pub fn rules(&self) -> Vec<FieldRule<'_>> {
        match self {
            Self::PaymentRequest(m) => m.rules(),
            Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => m.rules(),
            Self::PaymentStatusRequest(m) => m.rules(),
            Self::PaymentStatusResponse(m) => m.rules(),
        }
    }

    pub fn violations(&self) -> &[Violation] {
        self.header().violations()
    }

    pub fn has_violations(&self) -> bool {
        !self.violations().is_empty()
    }

    pub fn related_message(&self) -> Option<&Arc<Message>> {
        self.header().related_message()
    }

    /// Attaches the paired message. Fails when `related` is of a type this
    /// variant cannot pair with.
    pub fn set_related_message(&mut self, related: Option<Arc<Message>>) -> Result<()> {
        let kind = self.kind();
        if let Some(other) = related.as_deref()
            && !kind.accepts_related(other.kind())
        {
            return Err(GatewayError::InvalidAssociation {
                expected: kind.related_kind().unwrap_or(kind),
                given: other.kind(),
            });
        }
        self.header_mut().set_related_message(related);
        Ok(())
    }

    pub fn http_method(&self) -> HttpMethod {
        self.kind().http_method()
    }

    /// The instance URL override, or the variant default.
    pub fn url(&self) -> Option<&str> {
        self.header().url().or(self.kind().default_url())
    }

    pub fn as_payment_request(&self) -> Option<&PaymentRequest> {
        match self {
            Self::PaymentRequest(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_payment_response(&self) -> Option<&PaymentResponse> {
        match self {
            Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_payment_status_request(&self) -> Option<&PaymentStatusRequest> {
        match self {
            Self::PaymentStatusRequest(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_payment_status_response(&self) -> Option<&PaymentStatusResponse> {
        match self {
            Self::PaymentStatusResponse(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reference = self.header().payment_reference().unwrap_or_default();
        match self {
            Self::PaymentRequest(_) => write!(f, "Payment request {reference}"),
            Self::PaymentResponse(m) | Self::PaymentNotifyResponse(m) => write!(
                f,
                "Payment response {} (reference {reference})",
                m.payment_identifier().unwrap_or_default()
            ),
            Self::PaymentStatusRequest(_) => write!(f, "Payment status request {reference}"),
            Self::PaymentStatusResponse(m) => write!(
                f,
                "Payment status response \"{}\"",
                m.status_label().unwrap_or(m.status_message().unwrap_or_default())
            ),
        }
    }
}

/// Rules shared by every variant carrying the common header fields.
pub(crate) fn header_rules(header: &MessageHeader) -> Vec<FieldRule<'_>> {
    let group = ValidationGroup::SignaturePart;
    vec![
        FieldRule::amount(
            fields::AMOUNT,
            "payment amount",
            group,
            header.payment_amount_field(),
            &[Constraint::NotBlank, Constraint::Numeric],
        ),
        FieldRule::text(
            fields::REF_NO,
            "payment reference",
            group,
            header.payment_reference(),
            &[Constraint::NotNull, Constraint::MaxLength(30)],
        ),
        FieldRule::text(
            fields::MERCHANT_CODE,
            "seller identifier",
            group,
            header.seller_identifier(),
            &[Constraint::NotBlank, Constraint::MaxLength(20)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_table_resolves_both_directions() {
        assert_eq!(
            MessageKind::PaymentRequest.paired(),
            Some(MessageKind::PaymentResponse)
        );
        assert_eq!(
            MessageKind::PaymentStatusResponse.paired(),
            Some(MessageKind::PaymentStatusRequest)
        );
        assert_eq!(MessageKind::PaymentNotifyResponse.paired(), None);
        assert_eq!(
            MessageKind::PaymentNotifyResponse.related_kind(),
            Some(MessageKind::PaymentRequest)
        );
        assert!(MessageKind::PaymentNotifyResponse.accepts_related(MessageKind::PaymentRequest));
        assert!(!MessageKind::PaymentNotifyResponse.accepts_related(MessageKind::PaymentResponse));
        assert!(MessageKind::PaymentRequest.accepts_related(MessageKind::PaymentNotifyResponse));
        assert_eq!(paired_in(MessageKind::PaymentRequest, &[]), None);
    }

    #[test]
    fn test_capabilities() {
        assert!(MessageKind::PaymentRequest.is_request());
        assert!(MessageKind::PaymentRequest.requires_signature());
        assert!(MessageKind::PaymentStatusRequest.is_request());
        assert!(!MessageKind::PaymentStatusRequest.requires_signature());
        assert!(MessageKind::PaymentNotifyResponse.is_response());
        assert!(MessageKind::PaymentNotifyResponse.requires_signature());
        assert!(!MessageKind::PaymentStatusResponse.requires_signature());
        assert_eq!(MessageKind::PaymentStatusRequest.http_method(), HttpMethod::Post);
        assert!(MessageKind::PaymentRequest.signature_test_url().is_some());
        assert!(MessageKind::PaymentNotifyResponse.default_url().is_none());
    }

    #[test]
    fn test_related_message_type_is_checked() {
        let mut response = Message::from_transport_mapping(
            MessageKind::PaymentStatusResponse,
            &TransportMapping::new(),
        );
        let wrong = Arc::new(Message::from_transport_mapping(
            MessageKind::PaymentRequest,
            &TransportMapping::new(),
        ));
        let result = response.set_related_message(Some(wrong));
        assert!(matches!(
            result,
            Err(GatewayError::InvalidAssociation {
                expected: MessageKind::PaymentStatusRequest,
                given: MessageKind::PaymentRequest,
            })
        ));

        let right = Arc::new(Message::from_transport_mapping(
            MessageKind::PaymentStatusRequest,
            &TransportMapping::new(),
        ));
        response.set_related_message(Some(right)).unwrap();
        assert_eq!(
            response.related_message().map(|m| m.kind()),
            Some(MessageKind::PaymentStatusRequest)
        );
    }

    #[test]
    fn test_notify_response_relates_to_payment_request() {
        let mut notify = Message::from_transport_mapping(
            MessageKind::PaymentNotifyResponse,
            &TransportMapping::new(),
        );
        let wrong = Arc::new(Message::from_transport_mapping(
            MessageKind::PaymentStatusRequest,
            &TransportMapping::new(),
        ));
        assert!(matches!(
            notify.set_related_message(Some(wrong)),
            Err(GatewayError::InvalidAssociation {
                expected: MessageKind::PaymentRequest,
                given: MessageKind::PaymentStatusRequest,
            })
        ));

        let request = Arc::new(Message::from_transport_mapping(
            MessageKind::PaymentRequest,
            &TransportMapping::new(),
        ));
        notify.set_related_message(Some(request)).unwrap();
        assert_eq!(
            notify.related_message().map(|m| m.kind()),
            Some(MessageKind::PaymentRequest)
        );
    }

    #[test]
    fn test_url_override() {
        let mut request = Message::from_transport_mapping(
            MessageKind::PaymentStatusRequest,
            &TransportMapping::new(),
        );
        assert_eq!(request.url(), MessageKind::PaymentStatusRequest.default_url());
        request
            .header_mut()
            .set_url(Some("https://sandbox.example.com/enquiry.asp".to_string()));
        assert_eq!(request.url(), Some("https://sandbox.example.com/enquiry.asp"));
    }
}
