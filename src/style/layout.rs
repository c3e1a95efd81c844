use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::core::Color;
use crate::error::{StyleError, StyleResult};

use super::{AxisStyle, SceneStyle};

/// Plot-area margins in pixels.
///
/// Sides left unset fall back to plotly's own margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad: Option<f64>,
}

impl Margin {
    #[must_use]
    pub const fn new(l: f64, r: f64, t: f64, b: f64) -> Self {
        Self {
            l: Some(l),
            r: Some(r),
            t: Some(t),
            b: Some(b),
            pad: None,
        }
    }

    pub fn validate(self) -> StyleResult<()> {
        for (side, value) in [
            ("l", self.l),
            ("r", self.r),
            ("t", self.t),
            ("b", self.b),
            ("pad", self.pad),
        ] {
            if value.is_some_and(|px| !px.is_finite() || px < 0.0) {
                return Err(StyleError::InvalidConfig(format!(
                    "margin.{side} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl FontStyle {
    pub fn validate(&self) -> StyleResult<()> {
        if let Some(size) = self.size {
            if !size.is_finite() || size < 1.0 {
                return Err(StyleError::InvalidConfig(
                    "font.size must be finite and >= 1".to_owned(),
                ));
            }
        }
        if self.family.as_deref().is_some_and(|family| family.trim().is_empty()) {
            return Err(StyleError::InvalidConfig(
                "font.family must not be blank".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Which points hover labels report.
///
/// Serialized as plotly's mode names, except [`HoverMode::Off`] which is the
/// boolean `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverMode {
    #[default]
    Closest,
    X,
    Y,
    XUnified,
    YUnified,
    Off,
}

const HOVER_MODE_NAMES: &[&str] = &["closest", "x", "y", "x unified", "y unified"];

impl HoverMode {
    #[must_use]
    pub fn as_name(self) -> Option<&'static str> {
        match self {
            Self::Closest => Some("closest"),
            Self::X => Some("x"),
            Self::Y => Some("y"),
            Self::XUnified => Some("x unified"),
            Self::YUnified => Some("y unified"),
            Self::Off => None,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "closest" => Some(Self::Closest),
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "x unified" => Some(Self::XUnified),
            "y unified" => Some(Self::YUnified),
            _ => None,
        }
    }
}

impl Serialize for HoverMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_bool(false),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HoverModeRepr {
    Flag(bool),
    Name(String),
}

impl<'de> Deserialize<'de> for HoverMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match HoverModeRepr::deserialize(deserializer)? {
            HoverModeRepr::Flag(false) => Ok(Self::Off),
            HoverModeRepr::Flag(true) => Err(D::Error::custom(
                "hovermode accepts `false` but not `true`",
            )),
            HoverModeRepr::Name(name) => Self::from_name(&name)
                .ok_or_else(|| D::Error::unknown_variant(&name, HOVER_MODE_NAMES)),
        }
    }
}

/// Layout section of a style profile.
///
/// Layout attributes without a typed field here (`colorway`, `title`,
/// `legend`, ...) are kept verbatim in `extra` so imported templates
/// serialize back without losing them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bargap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bargroupgap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<HoverMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<SceneStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<Color>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutStyle {
    pub fn validate(&self) -> StyleResult<()> {
        if let Some(axis) = &self.xaxis {
            axis.validate("xaxis")?;
        }
        if let Some(axis) = &self.yaxis {
            axis.validate("yaxis")?;
        }
        for (name, gap) in [("bargap", self.bargap), ("bargroupgap", self.bargroupgap)] {
            if let Some(gap) = gap {
                if !gap.is_finite() || !(0.0..=1.0).contains(&gap) {
                    return Err(StyleError::InvalidConfig(format!(
                        "{name} must be finite and in [0, 1]"
                    )));
                }
            }
        }
        for (name, size) in [("height", self.height), ("width", self.width)] {
            if size.is_some_and(|px| px < 10) {
                return Err(StyleError::InvalidConfig(format!("{name} must be >= 10")));
            }
        }
        if let Some(margin) = self.margin {
            margin.validate()?;
        }
        if let Some(scene) = &self.scene {
            scene.validate()?;
        }
        if let Some(font) = &self.font {
            font.validate()?;
        }
        Ok(())
    }
}
