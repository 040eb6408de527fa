// src/greetings/models.rs

use serde_json::Value;

/// A value offered as a person's name.
///
/// Callers holding loosely typed data (JSON, optional fields) convert it
/// into this union at the boundary; validation then only has to tell text
/// from everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCandidate {
    Text(String),
    /// Anything that is not text, tagged with the kind that was seen
    NonText(&'static str),
}

impl NameCandidate {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NameCandidate::Text(text) => Some(text),
            NameCandidate::NonText(_) => None,
        }
    }
}

impl From<&str> for NameCandidate {
    fn from(text: &str) -> Self {
        NameCandidate::Text(text.to_string())
    }
}

impl From<String> for NameCandidate {
    fn from(text: String) -> Self {
        NameCandidate::Text(text)
    }
}

impl From<&String> for NameCandidate {
    fn from(text: &String) -> Self {
        NameCandidate::Text(text.clone())
    }
}

impl<T: Into<NameCandidate>> From<Option<T>> for NameCandidate {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => NameCandidate::NonText("null"),
        }
    }
}

impl From<Value> for NameCandidate {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => NameCandidate::Text(text),
            Value::Null => NameCandidate::NonText("null"),
            Value::Bool(_) => NameCandidate::NonText("boolean"),
            Value::Number(_) => NameCandidate::NonText("number"),
            Value::Array(_) => NameCandidate::NonText("array"),
            Value::Object(_) => NameCandidate::NonText("object"),
        }
    }
}

impl From<&Value> for NameCandidate {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => NameCandidate::Text(text.clone()),
            other => other.clone().into(),
        }
    }
}
