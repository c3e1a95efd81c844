use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::Trace;
use crate::error::StyleResult;

/// Ordered traces plus the figure's explicit layout overrides.
///
/// Trace order is significant: selection results preserve it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    #[serde(default)]
    pub data: Vec<Trace>,
    #[serde(default)]
    pub layout: Map<String, Value>,
}

impl Figure {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_traces(data: Vec<Trace>) -> Self {
        Self {
            data,
            layout: Map::new(),
        }
    }

    #[must_use]
    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn push(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    /// Sets an explicit layout value; it takes precedence over the template.
    #[must_use]
    pub fn with_layout_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.layout.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.data
    }

    /// Parses a plotly figure JSON document (`{"data": [...], "layout": {...}}`).
    pub fn from_json_str(input: &str) -> StyleResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_pretty(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
