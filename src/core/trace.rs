use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::PropertyPath;
use crate::error::{StyleError, StyleResult};

/// One chart element (a data series) with its nested display properties.
///
/// The trace is an opaque record: the crate never interprets its properties
/// beyond path lookup, so any plotly trace type can be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Trace {
    properties: Value,
}

impl Trace {
    /// Creates a trace of the given plotly trace type (`scatter`, `bar`, ...).
    #[must_use]
    pub fn new(trace_type: impl Into<String>) -> Self {
        let mut properties = Map::new();
        properties.insert("type".to_owned(), Value::String(trace_type.into()));
        Self {
            properties: Value::Object(properties),
        }
    }

    /// Wraps a JSON object; any other JSON shape is rejected.
    pub fn from_value(value: Value) -> StyleResult<Self> {
        if !value.is_object() {
            return Err(StyleError::InvalidData(
                "trace must be a json object".to_owned(),
            ));
        }
        Ok(Self { properties: value })
    }

    /// Sets a top-level property.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if let Value::Object(map) = &mut self.properties {
            map.insert(key.into(), value.into());
        }
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with("name", Value::String(name.into()))
    }

    /// Top-level property lookup without path interpretation.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    #[must_use]
    pub fn resolve(&self, path: &PropertyPath) -> Option<&Value> {
        path.resolve(&self.properties)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    #[must_use]
    pub fn trace_type(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.properties
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.properties
    }
}

impl TryFrom<Value> for Trace {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Trace> for Value {
    fn from(trace: Trace) -> Self {
        trace.properties
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Trace;
    use crate::core::PropertyPath;

    #[test]
    fn builder_sets_type_name_and_nested_properties() {
        let trace = Trace::new("scatter")
            .with_name("temperature")
            .with("marker", json!({"color": "#231F20"}));
        assert_eq!(trace.trace_type(), Some("scatter"));
        assert_eq!(trace.name(), Some("temperature"));
        let path = PropertyPath::parse("marker_color").expect("path");
        assert_eq!(trace.resolve(&path), Some(&json!("#231F20")));
    }

    #[test]
    fn non_object_values_are_rejected() {
        let err = Trace::from_value(json!(["a"])).expect_err("array is not a trace");
        assert!(format!("{err}").contains("json object"));
        assert!(serde_json::from_str::<Trace>("42").is_err());
    }

    #[test]
    fn name_is_none_for_non_string_names() {
        let trace = Trace::from_value(json!({"name": 3})).expect("trace");
        assert_eq!(trace.name(), None);
        assert_eq!(trace.get("name"), Some(&json!(3)));
    }
}
