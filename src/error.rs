use crate::domain::constraints::Violation;
use crate::domain::message::{Message, MessageKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Coarse classification of gateway failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing shared secret or collaborator. Never retried.
    Configuration,
    /// Constraint violations raised in strict mode.
    Validation,
    /// Caller used a message type where another was expected.
    ProtocolType,
    /// The transport failed or answered with a non-success status.
    Transport,
    /// A catalog key is unknown.
    CatalogLookup,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("The shared secret is required to validate the message \"{0}\"")]
    MissingSharedSecret(String),
    #[error("No {0} collaborator is available")]
    MissingCollaborator(&'static str),
    #[error("The message \"{}\" has {} validation violation(s)", .0.message, .0.violations.len())]
    InvalidMessage(Box<InvalidMessage>),
    #[error("The message type {0:?} is not a request")]
    UnsupportedRequestType(MessageKind),
    #[error("The request type {0:?} is not paired with a response type")]
    UnpairedRequestType(MessageKind),
    #[error("The related message must be paired with {expected:?}, {given:?} given")]
    InvalidAssociation {
        expected: MessageKind,
        given: MessageKind,
    },
    #[error("The gateway answered with an unexpected HTTP status {status}: \"{reason}\"")]
    UnexpectedTransportStatus { status: u16, reason: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("The {category} \"{key}\" is not supported by the gateway")]
    UnknownCatalogEntry { category: &'static str, key: String },
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The offending message and its violations, carried by strict validation failures.
#[derive(Debug)]
pub struct InvalidMessage {
    pub message: Message,
    pub violations: Vec<Violation>,
}

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingSharedSecret(_) | Self::MissingCollaborator(_) => {
                ErrorCategory::Configuration
            }
            Self::InvalidMessage(_) | Self::InvalidParameters(_) => ErrorCategory::Validation,
            Self::UnsupportedRequestType(_)
            | Self::UnpairedRequestType(_)
            | Self::InvalidAssociation { .. } => ErrorCategory::ProtocolType,
            Self::UnexpectedTransportStatus { .. } | Self::Transport(_) | Self::IoError(_) => {
                ErrorCategory::Transport
            }
            Self::UnknownCatalogEntry { .. } => ErrorCategory::CatalogLookup,
        }
    }

    /// Violations carried by a strict validation failure, empty otherwise.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidMessage(invalid) => &invalid.violations,
            _ => &[],
        }
    }

    pub(crate) fn unknown(category: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownCatalogEntry {
            category,
            key: key.into(),
        }
    }
}

#[cfg(feature = "http-transport")]
impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            GatewayError::MissingCollaborator("transport").category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            GatewayError::UnpairedRequestType(MessageKind::PaymentStatusRequest).category(),
            ErrorCategory::ProtocolType
        );
        assert_eq!(
            GatewayError::UnexpectedTransportStatus {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
            .category(),
            ErrorCategory::Transport
        );
        assert_eq!(
            GatewayError::unknown("currency", "XYZ").category(),
            ErrorCategory::CatalogLookup
        );
    }

    #[test]
    fn test_unknown_catalog_entry_message() {
        let err = GatewayError::unknown("currency", "XYZ");
        assert_eq!(
            err.to_string(),
            "The currency \"XYZ\" is not supported by the gateway"
        );
        assert!(err.violations().is_empty());
    }
}
