//! Field values and the per-form value map.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

/// The current value of a single field.
///
/// `Absent` means the field has never fired a change event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Raw text as typed by the user.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Never touched.
    #[default]
    Absent,
}

impl FieldValue {
    /// Check if the value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Get the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Render the value as a string for pattern matching and display.
    ///
    /// Returns `None` for absent values.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::Absent => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

static ABSENT: FieldValue = FieldValue::Absent;

/// Mapping from field name to its current value.
///
/// A key exists only after its field fired at least one change event.
/// Lookups of unknown names yield [`FieldValue::Absent`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, FieldValue>);

impl FormData {
    /// Create an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a field, `Absent` if it was never set.
    pub fn get(&self, name: &str) -> &FieldValue {
        self.0.get(name).unwrap_or(&ABSENT)
    }

    /// Check if a field has fired at least one change.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Return a copy with `name` mapped to `value`, all other entries kept.
    pub fn with(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let mut next = self.clone();
        next.0.insert(name.into(), value.into());
        next
    }

    /// Number of touched fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no field was touched yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = hash_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
