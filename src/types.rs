//! Core types used throughout the project.

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Number,
    Value,
};

/// Nested mapping of a translation object.
///
/// Keys keep the order they were read or inserted in; replacing the value of
/// an existing key leaves it in place.
pub type TranslationMap = IndexMap<String, TranslationValue>;

/// A leaf value of a translation object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// A node of a translation object.
///
/// Serializes as plain JSON, so any JSON document can be read into it.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_page_kit::TranslationValue;
///
/// let value = TranslationValue::from(json!({ "common": { "hello": "Hello" } }));
/// assert!(value.is_mapping());
/// assert_eq!(value.as_mapping().map(|m| m.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum TranslationValue {
    Scalar(Scalar),
    /// Arrays are opaque to merge: a source sequence always replaces a target one.
    Sequence(Vec<TranslationValue>),
    Mapping(TranslationMap),
}

impl TranslationValue {
    #[must_use]
    pub const fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    #[must_use]
    pub const fn as_mapping(&self) -> Option<&TranslationMap> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the member stored under `key` when this is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

impl From<&str> for TranslationValue {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for TranslationValue {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<TranslationMap> for TranslationValue {
    fn from(map: TranslationMap) -> Self {
        Self::Mapping(map)
    }
}

impl From<Value> for TranslationValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect())
            }
        }
    }
}

impl From<TranslationValue> for Value {
    fn from(value: TranslationValue) -> Self {
        match value {
            TranslationValue::Scalar(Scalar::Null) => Self::Null,
            TranslationValue::Scalar(Scalar::Bool(b)) => Self::Bool(b),
            TranslationValue::Scalar(Scalar::Number(n)) => Self::Number(n),
            TranslationValue::Scalar(Scalar::String(s)) => Self::String(s),
            TranslationValue::Sequence(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            TranslationValue::Mapping(map) => {
                Self::Object(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect())
            }
        }
    }
}
