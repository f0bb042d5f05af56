use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely-typed decision payload as emitted by any producer in the system.
///
/// Producers disagree on field names (`matchScore`/`score`, `reasons`/`pros`, ...), so
/// lookups take an ordered alias list and return the first usable value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDecision(Map<String, Value>);

impl RawDecision {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON object; any other JSON shape carries no decision.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// First alias holding a finite number or a numeric string.
    pub(crate) fn number(&self, aliases: &[&str]) -> Option<f64> {
        aliases
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find_map(|value| {
                let number = match value {
                    Value::Number(number) => number.as_f64(),
                    Value::String(text) => text.trim().parse::<f64>().ok(),
                    _ => None,
                };
                number.filter(|number| number.is_finite())
            })
    }

    /// First alias holding a non-blank string, returned as sent.
    pub(crate) fn text(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|key| self.0.get(*key))
            .filter_map(Value::as_str)
            .find(|text| !text.trim().is_empty())
    }

    /// First alias holding an array; non-string entries are skipped, order is kept.
    pub(crate) fn strings(&self, aliases: &[&str]) -> Option<Vec<String>> {
        aliases
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find_map(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
    }
}
