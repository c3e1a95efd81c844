use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StyleResult;

use super::LayoutStyle;

/// A plotly template: layout defaults plus optional per-trace-type defaults.
///
/// Profiles are plain values. Registering one in a
/// [`TemplateRegistry`](crate::api::TemplateRegistry) stores a copy, so later
/// edits to the caller's value never leak into the registered definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    #[serde(default)]
    pub layout: LayoutStyle,
    /// Trace defaults keyed by trace type (`"scatter"`, `"bar"`, ...).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub data: IndexMap<String, Vec<Value>>,
}

impl StyleProfile {
    #[must_use]
    pub fn new(layout: LayoutStyle) -> Self {
        Self {
            layout,
            data: IndexMap::new(),
        }
    }

    /// Appends default properties for traces of `trace_type`.
    #[must_use]
    pub fn with_trace_defaults(mut self, trace_type: impl Into<String>, defaults: Value) -> Self {
        self.data.entry(trace_type.into()).or_default().push(defaults);
        self
    }

    pub fn validate(&self) -> StyleResult<()> {
        self.layout.validate()
    }

    /// Template object in plotly's `{"layout": ..., "data": ...}` shape.
    pub fn to_template_value(&self) -> StyleResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Layout defaults alone, as a JSON object.
    pub fn layout_value(&self) -> StyleResult<Value> {
        Ok(serde_json::to_value(&self.layout)?)
    }

    pub fn to_json_pretty(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(input: &str) -> StyleResult<Self> {
        let profile: Self = serde_json::from_str(input)?;
        profile.validate()?;
        Ok(profile)
    }
}
