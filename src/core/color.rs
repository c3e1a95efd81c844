use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};

/// Plotly color string validated at construction.
///
/// Accepted forms: `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)`,
/// `rgba(r,g,b,a)`, `hsl(h,s%,l%)`, `hsla(h,s%,l%,a)` and bare CSS color
/// names. The text is kept verbatim so a
/// profile serializes back to exactly what was configured; the `rgba` alpha
/// channel is passed through to the renderer without rescaling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn parse(input: &str) -> StyleResult<Self> {
        let text = input.trim();
        let valid = if let Some(hex) = text.strip_prefix('#') {
            matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        } else if let Some(body) = functional_body(text, "rgba") {
            rgb_channels_valid(body, true)
        } else if let Some(body) = functional_body(text, "rgb") {
            rgb_channels_valid(body, false)
        } else if let Some(body) = functional_body(text, "hsla") {
            hsl_channels_valid(body, true)
        } else if let Some(body) = functional_body(text, "hsl") {
            hsl_channels_valid(body, false)
        } else {
            !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
        };

        if !valid {
            return Err(StyleError::InvalidColor(input.to_owned()));
        }
        Ok(Self(text.to_owned()))
    }

    /// Builds a `#RRGGBB` color from byte channels.
    #[must_use]
    pub fn hex(red: u8, green: u8, blue: u8) -> Self {
        Self(format!("#{red:02X}{green:02X}{blue:02X}"))
    }

    /// Builds an `rgba(r,g,b,a)` color; `alpha` is written as given.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> StyleResult<Self> {
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(StyleError::InvalidColor(format!(
                "rgba({red},{green},{blue},{alpha})"
            )));
        }
        Ok(Self(format!("rgba({red},{green},{blue},{alpha})")))
    }

    /// Builds an `rgba(r,g,b,a)` color with an integral alpha channel.
    #[must_use]
    pub fn rgba_u8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(format!("rgba({red},{green},{blue},{alpha})"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn functional_body<'a>(text: &'a str, function: &str) -> Option<&'a str> {
    text.strip_prefix(function)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn rgb_channels_valid(body: &str, with_alpha: bool) -> bool {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return false;
    }

    let channels_ok = parts[..3].iter().all(|part| {
        part.parse::<f64>()
            .is_ok_and(|value| value.is_finite() && (0.0..=255.0).contains(&value))
    });
    channels_ok && (!with_alpha || alpha_valid(parts[3]))
}

/// Hue is any finite number of degrees; saturation and lightness are
/// percentages in `0..=100`.
fn hsl_channels_valid(body: &str, with_alpha: bool) -> bool {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return false;
    }

    let hue_ok = parts[0].parse::<f64>().is_ok_and(f64::is_finite);
    let percents_ok = parts[1..3].iter().all(|part| {
        part.strip_suffix('%')
            .and_then(|number| number.trim_end().parse::<f64>().ok())
            .is_some_and(|value| value.is_finite() && (0.0..=100.0).contains(&value))
    });
    hue_ok && percents_ok && (!with_alpha || alpha_valid(parts[3]))
}

fn alpha_valid(part: &str) -> bool {
    part.parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value >= 0.0)
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
