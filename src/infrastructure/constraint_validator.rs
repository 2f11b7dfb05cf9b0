use crate::domain::constraints::{ValidationGroup, Violation};
use crate::domain::message::Message;
use crate::domain::ports::MessageValidator;

/// Validator executing the rules each message variant declares.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstraintValidator;

impl ConstraintValidator {
    pub fn new() -> Self {
        Self
    }
}

impl MessageValidator for ConstraintValidator {
    fn validate(&self, message: &Message, groups: &[ValidationGroup]) -> Vec<Violation> {
        let rules = message.rules();
        for group in groups {
            let violations: Vec<Violation> = rules
                .iter()
                .filter(|rule| rule.group == *group)
                .flat_map(|rule| rule.check())
                .collect();
            if !violations.is_empty() {
                return violations;
            }
        }
        Vec::new()
    }
}
