//! Keyed message signatures.
//!
//! A signature is the lowercase hex SHA-256 digest of the shared secret
//! followed by the variant's recipe fields, concatenated without separator.

use super::constraints::{Constraint, FieldRule, ValidationGroup, Violation, ViolationCode};
use super::mapping::fields;
use super::message::Message;
use sha2::{Digest, Sha256};

pub const SHA256: &str = "SHA256";

const SIGNATURE_MAX_LENGTH: usize = 100;

/// Computes the signature of `message` from its current field values.
///
/// Returns `None` for variants that are not signed and for unsupported
/// signature types.
pub fn compute_signature(message: &Message, shared_secret: &str) -> Option<String> {
    if !message.kind().requires_signature() || message.signature_type() != Some(SHA256) {
        return None;
    }

    let mut hasher = Sha256::new();
    hasher.update(shared_secret.as_bytes());
    for field in message.kind().signature_recipe() {
        hasher.update(message.recipe_value(*field).as_bytes());
    }
    Some(hex::encode(hasher.finalize()))
}

/// Checks the stored signature against a freshly computed one.
///
/// A blank signature only reports the blank violation.
pub fn verify_signature(message: &Message, shared_secret: &str) -> Vec<Violation> {
    let stored = message.signature();
    let rule = FieldRule::text(
        fields::SIGNATURE,
        "message signature",
        ValidationGroup::Full,
        stored,
        &[Constraint::NotBlank, Constraint::MaxLength(SIGNATURE_MAX_LENGTH)],
    );
    let violations = rule.check();
    if !violations.is_empty() {
        return violations;
    }

    match (stored, compute_signature(message, shared_secret)) {
        (Some(stored), Some(expected)) if stored == expected => Vec::new(),
        (stored, _) => vec![Violation::new(
            fields::SIGNATURE,
            ViolationCode::SignatureMismatch,
            format!(
                "The message signature \"{}\" is invalid.",
                stored.unwrap_or_default()
            ),
            stored,
        )],
    }
}
