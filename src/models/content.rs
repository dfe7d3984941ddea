use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::common::DocumentError;

/// One value of a page's free-form content document.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentValue {
    Text(String),
    List(Vec<String>),
    /// Sub-values stay as sent so a save writes back exactly what was loaded.
    Group(Vec<(String, Value)>),
    /// Anything else is kept verbatim so edits never drop it.
    Other(Value),
}

impl ContentValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),

            Value::Array(items) if items.iter().all(Value::is_string) => Self::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),

            Value::Object(map) => Self::Group(map.into_iter().collect()),

            other => Self::Other(other),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            Self::Group(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
            Self::Other(value) => value.clone(),
        }
    }
}

impl From<&str> for ContentValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ContentValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for ContentValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Keyed page content, in the order the backend sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDocument {
    entries: Vec<(String, ContentValue)>,
}

impl ContentDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses editor text. Only a JSON object is a valid document.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| DocumentError::Syntax(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(map.into()),
            _ => Err(DocumentError::NotAnObject),
        }
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.to_json()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&ContentValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ContentValue::as_text)
    }

    /// Replaces an existing key in place or appends a new one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContentValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<ContentValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContentValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Map<String, Value>> for ContentDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, ContentValue::from_json(value)))
                .collect(),
        }
    }
}

impl FromIterator<(String, ContentValue)> for ContentDocument {
    fn from_iter<I: IntoIterator<Item = (String, ContentValue)>>(iter: I) -> Self {
        let mut document = Self::new();
        for (key, value) in iter {
            document.insert(key, value);
        }
        document
    }
}

impl Serialize for ContentDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContentDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(map.map(Self::from).unwrap_or_default())
    }
}
