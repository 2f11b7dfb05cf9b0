use crate::domain::constraints::{ValidationGroup, Violation};
use crate::domain::message::Message;
use crate::domain::ports::MessageValidator;
use crate::domain::signature;
use crate::error::{GatewayError, Result};
use tracing::debug;

/// Two-phase validation of a message.
///
/// The signature-critical fields are checked first. The remaining fields and
/// the signature itself are only checked once that phase is clean.
pub struct ValidationPipeline<'a> {
    validator: &'a dyn MessageValidator,
}

impl<'a> ValidationPipeline<'a> {
    pub fn new(validator: &'a dyn MessageValidator) -> Self {
        Self { validator }
    }

    /// Runs both phases and returns the violations.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to validate.
    /// * `shared_secret` - Required when the message carries a signature.
    pub fn run(&self, message: &Message, shared_secret: Option<&str>) -> Result<Vec<Violation>> {
        let shared_secret = if message.kind().requires_signature() {
            match shared_secret {
                Some(secret) if !secret.is_empty() => Some(secret),
                _ => return Err(GatewayError::MissingSharedSecret(message.to_string())),
            }
        } else {
            None
        };

        let violations = self
            .validator
            .validate(message, &[ValidationGroup::SignaturePart]);
        if !violations.is_empty() {
            debug!(kind = ?message.kind(), count = violations.len(), "signature fields invalid");
            return Ok(violations);
        }

        let mut violations = self.validator.validate(message, &[ValidationGroup::Full]);
        if let Some(secret) = shared_secret {
            violations.extend(signature::verify_signature(message, secret));
        }
        Ok(violations)
    }
}
