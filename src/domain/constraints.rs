//! Declarative per-field constraints and the violations they produce.

use super::amount::PaymentAmount;
use super::catalog::{self, CatalogCategory};
use serde::Serialize;

/// Validation phases, evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationGroup {
    /// Fields consumed by the signature recipe.
    SignaturePart,
    /// Every other declared field, plus the signature itself.
    Full,
}

impl ValidationGroup {
    pub const SEQUENCE: [ValidationGroup; 2] =
        [ValidationGroup::SignaturePart, ValidationGroup::Full];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    Blank,
    Null,
    TooLong,
    NotNumeric,
    NotInChoice,
    InvalidUrl,
    InvalidEmail,
    PatternMismatch,
    SignatureMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Wire name of the offending field.
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
    pub value: Option<String>,
}

impl Violation {
    pub fn new(field: &str, code: ViolationCode, message: String, value: Option<&str>) -> Self {
        Self {
            field: field.to_string(),
            code,
            message,
            value: value.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Neither unset nor empty.
    NotBlank,
    /// Not unset; empty is allowed.
    NotNull,
    MaxLength(usize),
    Numeric,
    Choice(CatalogCategory),
    Url,
    Email,
    /// Partially hidden card number: six digits, two to six `x`, four digits.
    MaskedCardNumber,
}

/// The value a rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Amount(Option<&'a PaymentAmount>),
}

impl FieldValue<'_> {
    fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(value) => value.map(str::to_string),
            FieldValue::Amount(amount) => amount.map(PaymentAmount::to_wire),
        }
    }
}

/// Constraints declared for one field within one group.
#[derive(Debug, Clone)]
pub struct FieldRule<'a> {
    pub field: &'static str,
    /// Human readable field name used in violation messages.
    pub label: &'static str,
    pub group: ValidationGroup,
    pub value: FieldValue<'a>,
    pub constraints: Vec<Constraint>,
}

impl<'a> FieldRule<'a> {
    pub fn text(
        field: &'static str,
        label: &'static str,
        group: ValidationGroup,
        value: Option<&'a str>,
        constraints: &[Constraint],
    ) -> Self {
        Self {
            field,
            label,
            group,
            value: FieldValue::Text(value),
            constraints: constraints.to_vec(),
        }
    }

    pub fn amount(
        field: &'static str,
        label: &'static str,
        group: ValidationGroup,
        value: Option<&'a PaymentAmount>,
        constraints: &[Constraint],
    ) -> Self {
        Self {
            field,
            label,
            group,
            value: FieldValue::Amount(value),
            constraints: constraints.to_vec(),
        }
    }

    /// Evaluates every constraint of the rule.
    pub fn check(&self) -> Vec<Violation> {
        self.constraints
            .iter()
            .filter_map(|constraint| self.check_one(*constraint))
            .collect()
    }

    fn violation(&self, code: ViolationCode, message: String) -> Violation {
        let value = self.value.as_text();
        Violation::new(self.field, code, message, value.as_deref())
    }

    fn check_one(&self, constraint: Constraint) -> Option<Violation> {
        let label = self.label;

        if let FieldValue::Amount(amount) = self.value {
            return match (constraint, amount) {
                (Constraint::NotBlank | Constraint::NotNull, None) => Some(self.violation(
                    ViolationCode::Blank,
                    format!("The {label} must not be blank."),
                )),
                (Constraint::Numeric, Some(PaymentAmount::Unparsed(raw))) => Some(self.violation(
                    ViolationCode::NotNumeric,
                    format!("The {label} \"{raw}\" must be numeric."),
                )),
                _ => None,
            };
        }

        let FieldValue::Text(value) = self.value else {
            return None;
        };

        match (constraint, value) {
            (Constraint::NotBlank, None) => Some(self.violation(
                ViolationCode::Blank,
                format!("The {label} must not be blank."),
            )),
            (Constraint::NotBlank, Some(v)) if v.trim().is_empty() => Some(self.violation(
                ViolationCode::Blank,
                format!("The {label} must not be blank."),
            )),
            (Constraint::NotNull, None) => Some(self.violation(
                ViolationCode::Null,
                format!("The {label} must not be null."),
            )),
            // The remaining constraints skip unset and empty values.
            (_, None) => None,
            (_, Some("")) => None,
            (Constraint::MaxLength(max), Some(v)) if v.chars().count() > max => {
                Some(self.violation(
                    ViolationCode::TooLong,
                    format!("The {label} \"{v}\" must have {max} characters or less."),
                ))
            }
            (Constraint::Numeric, Some(v)) if super::amount::parse_display(v).is_none() => {
                Some(self.violation(
                    ViolationCode::NotNumeric,
                    format!("The {label} \"{v}\" must be numeric."),
                ))
            }
            (Constraint::Choice(category), Some(v)) if !catalog::contains(category, v) => {
                let choices = catalog::keys(category).join("\", \"");
                Some(self.violation(
                    ViolationCode::NotInChoice,
                    format!("The {label} \"{v}\" must be a valid one: \"{choices}\"."),
                ))
            }
            (Constraint::Url, Some(v)) if !is_valid_url(v) => Some(self.violation(
                ViolationCode::InvalidUrl,
                format!("The {label} \"{v}\" must be a valid URL."),
            )),
            (Constraint::Email, Some(v)) if !is_valid_email(v) => Some(self.violation(
                ViolationCode::InvalidEmail,
                format!("The {label} \"{v}\" must be a valid email address."),
            )),
            (Constraint::MaskedCardNumber, Some(v)) if !is_masked_card_number(v) => {
                Some(self.violation(
                    ViolationCode::PatternMismatch,
                    format!(
                        "The {label} \"{v}\" must be partially hidden with just the first six and last four digits visible (e.g., \"123456xxxxxx7890\")."
                    ),
                ))
            }
            _ => None,
        }
    }
}

/// Absolute `http` or `https` URL with a non-empty host and no whitespace.
pub fn is_valid_url(value: &str) -> bool {
    let rest = match value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = match host.rsplit_once(':') {
        Some((name, port)) if !host.starts_with('[') => {
            if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }
            name
        }
        _ => host,
    };
    !host.is_empty()
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '[' | ']' | ':'))
}

/// Loose address check: one `@`, a local part, and a dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Matches `^\d{6}x{2,6}\d{4}$`.
pub fn is_masked_card_number(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 12 || bytes.len() > 16 {
        return false;
    }
    let (head, rest) = bytes.split_at(6);
    let (mask, tail) = rest.split_at(rest.len() - 4);
    head.iter().all(u8::is_ascii_digit)
        && tail.iter().all(u8::is_ascii_digit)
        && (2..=6).contains(&mask.len())
        && mask.iter().all(|b| *b == b'x')
}
