use crate::error::RequestError;
use serde::Serialize;
use serde_json::{Map, Value};

pub const QUESTIONS_FIELD: &str = "questions";

/// A validated, non-empty batch of questions in caller order.
///
/// Only [`Questions::from_body`] and [`Questions::from_value`] construct one,
/// so holding a `Questions` means validation already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questions(Vec<String>);

impl Questions {
    /// Parse a raw request body and pull the `questions` field out of it.
    pub fn from_body(body: &[u8]) -> Result<Self, RequestError> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| RequestError::MalformedPayload(e.to_string()))?;

        match payload {
            Value::Object(map) => Self::from_object(&map),
            other => Err(RequestError::MalformedPayload(format!(
                "expected an object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn from_object(map: &Map<String, Value>) -> Result<Self, RequestError> {
        match map.get(QUESTIONS_FIELD) {
            Some(value) => Self::from_value(value),
            None => Err(RequestError::MissingField(QUESTIONS_FIELD)),
        }
    }

    /// Validate the value of the `questions` field.
    ///
    /// Empty values of any type (`null`, `[]`, `""`, `0`, `false`, `{}`) count
    /// as missing. Anything else that is not an array of strings is rejected
    /// with the JSON type that was actually found.
    pub fn from_value(value: &Value) -> Result<Self, RequestError> {
        if is_empty(value) {
            return Err(RequestError::MissingField(QUESTIONS_FIELD));
        }

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(RequestError::InvalidFieldType {
                    field: QUESTIONS_FIELD,
                    found: json_type_name(other).to_string(),
                })
            }
        };

        let mut questions = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            match item {
                Value::String(q) => questions.push(q.clone()),
                other => {
                    return Err(RequestError::InvalidFieldType {
                        field: QUESTIONS_FIELD,
                        found: format!("array with {} at index {}", json_type_name(other), idx),
                    })
                }
            }
        }

        Ok(Self(questions))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Query pairs sent to the external API: the credential first, then one
/// `questions` pair per question in order. Serializes as a sequence of
/// pairs, which reqwest encodes as `api_key=..&questions=..&questions=..`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutboundQuery(Vec<(&'static str, String)>);

impl OutboundQuery {
    pub fn new(api_key: &str, questions: &Questions) -> Self {
        let mut pairs = Vec::with_capacity(questions.len() + 1);
        pairs.push(("api_key", api_key.to_string()));
        pairs.extend(
            questions
                .as_slice()
                .iter()
                .map(|q| (QUESTIONS_FIELD, q.clone())),
        );
        Self(pairs)
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Name of a JSON value's type as reported back to callers.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
