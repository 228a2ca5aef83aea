//! Validation of the model's `{"code": "..."}` reply.
//!
//! Strict about `code`, permissive about everything else: extra keys are ignored.

use serde_json::Value;
use thiserror::Error;

/// A reply that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformResponse {
    pub code: String,
}

/// Why a parsed reply was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("missing \"code\" property")]
    MissingCode,
    #[error("\"code\" must be a string, got {0}")]
    CodeNotString(&'static str),
}

/// Check that `candidate` is an object with a string `code` field.
pub fn validate(candidate: &Value) -> Result<TransformResponse, SchemaError> {
    let object = candidate
        .as_object()
        .ok_or_else(|| SchemaError::NotAnObject(type_name(candidate)))?;

    match object.get("code") {
        None => Err(SchemaError::MissingCode),
        Some(Value::String(code)) => Ok(TransformResponse { code: code.clone() }),
        Some(other) => Err(SchemaError::CodeNotString(type_name(other))),
    }
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
