use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::domain::common::entities::app_errors::CoreError;

/// Declared shape of a structured AI response.
///
/// The same value is sent to the service as its response schema and used
/// afterwards to check the returned JSON before it becomes a typed entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSchema {
    Object {
        properties: Vec<(String, ResponseSchema)>,
        required: Vec<String>,
    },
    Array(Box<ResponseSchema>),
    String,
    Boolean,
    Enum(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: expected {expected}, found {found}")]
pub struct SchemaViolation {
    pub path: String,
    pub expected: String,
    pub found: String,
}

impl ResponseSchema {
    /// Object whose properties are all required.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, ResponseSchema)>,
        K: Into<String>,
    {
        let properties: Vec<(String, ResponseSchema)> = properties
            .into_iter()
            .map(|(name, schema)| (name.into(), schema))
            .collect();
        let required = properties.iter().map(|(name, _)| name.clone()).collect();

        ResponseSchema::Object {
            properties,
            required,
        }
    }

    /// Marks an object property as optional. No-op on other nodes.
    pub fn with_optional(mut self, name: &str) -> Self {
        if let ResponseSchema::Object { required, .. } = &mut self {
            required.retain(|field| field != name);
        }
        self
    }

    pub fn array(items: ResponseSchema) -> Self {
        ResponseSchema::Array(Box::new(items))
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResponseSchema::Enum(values.into_iter().map(Into::into).collect())
    }

    /// Wire form understood by the service (`type`, `properties`, `items`, `enum`).
    pub fn to_json(&self) -> Value {
        match self {
            ResponseSchema::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert(name.clone(), schema.to_json());
                }
                let ordering: Vec<&str> = properties.iter().map(|(name, _)| name.as_str()).collect();

                json!({
                    "type": "object",
                    "properties": props,
                    "required": required,
                    "propertyOrdering": ordering,
                })
            }
            ResponseSchema::Array(items) => json!({
                "type": "array",
                "items": items.to_json(),
            }),
            ResponseSchema::String => json!({ "type": "string" }),
            ResponseSchema::Boolean => json!({ "type": "boolean" }),
            ResponseSchema::Enum(values) => json!({
                "type": "string",
                "enum": values,
            }),
        }
    }

    /// Checks `value` against the declared shape, reporting the first mismatch.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaViolation> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), SchemaViolation> {
        match self {
            ResponseSchema::Object {
                properties,
                required,
            } => {
                let object = value
                    .as_object()
                    .ok_or_else(|| violation(path, "object", value))?;

                for name in required {
                    if object.get(name).is_none_or(Value::is_null) {
                        return Err(SchemaViolation {
                            path: format!("{}.{}", path, name),
                            expected: "a value".to_string(),
                            found: "nothing".to_string(),
                        });
                    }
                }

                for (name, schema) in properties {
                    match object.get(name) {
                        None | Some(Value::Null) => {}
                        Some(field) => schema.validate_at(field, &format!("{}.{}", path, name))?,
                    }
                }
                Ok(())
            }
            ResponseSchema::Array(items) => {
                let array = value
                    .as_array()
                    .ok_or_else(|| violation(path, "array", value))?;
                for (index, item) in array.iter().enumerate() {
                    items.validate_at(item, &format!("{}[{}]", path, index))?;
                }
                Ok(())
            }
            ResponseSchema::String => match value {
                Value::String(_) => Ok(()),
                other => Err(violation(path, "string", other)),
            },
            ResponseSchema::Boolean => match value {
                Value::Bool(_) => Ok(()),
                other => Err(violation(path, "boolean", other)),
            },
            ResponseSchema::Enum(values) => match value {
                Value::String(s) if values.iter().any(|v| v == s) => Ok(()),
                other => Err(violation(path, &format!("one of {:?}", values), other)),
            },
        }
    }

    /// Parses raw response text into `T`, enforcing this shape first.
    pub fn parse<T: DeserializeOwned>(&self, raw: &str) -> Result<T, CoreError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(CoreError::EmptyResponse);
        }

        let value: Value = serde_json::from_str(text).map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::MalformedResponse(format!("response is not valid JSON: {}", e))
        })?;

        self.validate(&value).map_err(|e| {
            tracing::error!("LLM response does not match the declared shape: {}", e);
            CoreError::MalformedResponse(e.to_string())
        })?;

        serde_json::from_value(value).map_err(|e| {
            tracing::error!("Invalid response format: {}", e);
            CoreError::MalformedResponse(format!("Invalid response format: {}", e))
        })
    }
}

fn violation(path: &str, expected: &str, found: &Value) -> SchemaViolation {
    SchemaViolation {
        path: path.to_string(),
        expected: expected.to_string(),
        found: describe(found),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
