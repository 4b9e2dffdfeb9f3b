//! Structural validation of flight records.
//!
//! A valid record is a JSON object carrying exactly the three required keys
//! from [`FIELD_KEYS`], each holding a string. Checks run in a fixed order and
//! stop at the first violation.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::flight::{Flight, AIRCRAFT_TYPE_KEY, DESTINATION_KEY, FIELD_KEYS, FLIGHT_NUMBER_KEY};

/// A violation of the flight record shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The candidate is not a JSON object.
    #[error("{found} is not of type 'object'")]
    NotAnObject {
        /// JSON type name of the value found instead.
        found: &'static str,
    },

    /// A required key is absent.
    #[error("'{field}' is a required property")]
    MissingField {
        /// The missing key.
        field: &'static str,
    },

    /// A required key holds something other than a string.
    #[error("'{field}': {found} is not of type 'string'")]
    WrongType {
        /// The offending key.
        field: &'static str,
        /// JSON type name of the value found instead.
        found: &'static str,
    },

    /// The object carries a key outside the record shape.
    #[error("additional property '{field}' is not allowed")]
    UnexpectedField {
        /// The unexpected key.
        field: String,
    },
}

/// Validate a record in its persisted key layout.
///
/// # Errors
///
/// Returns the first shape violation found.
pub fn validate(flight: &Flight) -> Result<(), ValidationError> {
    validate_value(&record_value(flight))
}

/// Build the JSON object a record is persisted as.
fn record_value(flight: &Flight) -> Value {
    let object: Map<String, Value> = [
        (DESTINATION_KEY, &flight.destination),
        (FLIGHT_NUMBER_KEY, &flight.flight_number),
        (AIRCRAFT_TYPE_KEY, &flight.aircraft_type),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), Value::String(value.clone())))
    .collect();
    Value::Object(object)
}

/// Validate an arbitrary JSON value against the flight record shape.
///
/// # Errors
///
/// Returns the first violation, checked in this order: not an object, a
/// missing key, a non-string value, an unexpected key.
pub fn validate_value(value: &Value) -> Result<(), ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::NotAnObject {
            found: type_name(value),
        });
    };

    for field in FIELD_KEYS {
        if !object.contains_key(field) {
            return Err(ValidationError::MissingField { field });
        }
    }

    for field in FIELD_KEYS {
        match &object[field] {
            Value::String(_) => {}
            other => {
                return Err(ValidationError::WrongType {
                    field,
                    found: type_name(other),
                });
            }
        }
    }

    if let Some(extra) = object.keys().find(|key| !FIELD_KEYS.contains(&key.as_str())) {
        return Err(ValidationError::UnexpectedField {
            field: extra.clone(),
        });
    }

    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
