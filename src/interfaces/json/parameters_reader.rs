use crate::domain::mapping::TransportMapping;
use crate::error::{GatewayError, Result};
use serde_json::Value;
use std::io::Read;

/// Reads message parameters from a flat JSON object of wire fields.
///
/// String values are taken as is, numbers and booleans are stringified and
/// `null` leaves the field unset. Nested values are rejected.
pub struct ParametersReader<R: Read> {
    source: R,
}

impl<R: Read> ParametersReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn parameters(self) -> Result<TransportMapping> {
        let value: Value = serde_json::from_reader(self.source)
            .map_err(|e| GatewayError::InvalidParameters(e.to_string()))?;
        let Value::Object(object) = value else {
            return Err(GatewayError::InvalidParameters(
                "expected a JSON object of wire fields".to_string(),
            ));
        };

        let mut mapping = TransportMapping::new();
        for (key, value) in object {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(GatewayError::InvalidParameters(format!(
                        "the field \"{key}\" must be a scalar value"
                    )));
                }
            };
            mapping.insert(key, value);
        }
        Ok(mapping)
    }
}
