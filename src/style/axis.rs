use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::Color;
use crate::error::{StyleError, StyleResult};

/// Tick mark placement relative to the axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickPlacement {
    #[serde(rename = "outside")]
    Outside,
    #[serde(rename = "inside")]
    Inside,
    /// No tick marks; serialized as plotly's empty string.
    #[default]
    #[serde(rename = "")]
    Hidden,
}

/// Named variants of plotly's `mirror` axis attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorMode {
    Ticks,
    All,
    AllTicks,
}

/// Plotly accepts either a boolean or a named mode for `mirror`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisMirror {
    Flag(bool),
    Mode(MirrorMode),
}

/// Appearance of one cartesian or scene axis.
///
/// Unset fields are omitted from the template so plotly falls back to its
/// own defaults for them. Other axis attributes (`title`, `range`, ...) ride
/// along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror: Option<AxisMirror>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickPlacement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linewidth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<Color>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AxisStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_showline(mut self, showline: bool) -> Self {
        self.showline = Some(showline);
        self
    }

    #[must_use]
    pub fn with_mirror(mut self, mirror: AxisMirror) -> Self {
        self.mirror = Some(mirror);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickPlacement) -> Self {
        self.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_showgrid(mut self, showgrid: bool) -> Self {
        self.showgrid = Some(showgrid);
        self
    }

    #[must_use]
    pub fn with_zeroline(mut self, zeroline: bool) -> Self {
        self.zeroline = Some(zeroline);
        self
    }

    #[must_use]
    pub fn with_linewidth(mut self, linewidth: f64) -> Self {
        self.linewidth = Some(linewidth);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_gridcolor(mut self, gridcolor: Color) -> Self {
        self.gridcolor = Some(gridcolor);
        self
    }

    pub fn validate(&self, axis: &str) -> StyleResult<()> {
        if let Some(width) = self.linewidth {
            if !width.is_finite() || width < 0.0 {
                return Err(StyleError::InvalidConfig(format!(
                    "{axis}.linewidth must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Axes of a 3D scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zaxis: Option<AxisStyle>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SceneStyle {
    /// Uses the same style for all three scene axes.
    #[must_use]
    pub fn uniform(axis: AxisStyle) -> Self {
        Self {
            xaxis: Some(axis.clone()),
            yaxis: Some(axis.clone()),
            zaxis: Some(axis),
            extra: Map::new(),
        }
    }

    pub fn validate(&self) -> StyleResult<()> {
        for (name, axis) in [
            ("scene.xaxis", &self.xaxis),
            ("scene.yaxis", &self.yaxis),
            ("scene.zaxis", &self.zaxis),
        ] {
            if let Some(axis) = axis {
                axis.validate(name)?;
            }
        }
        Ok(())
    }
}
