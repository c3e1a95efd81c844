use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};

pub const DEFAULT_EXPORT_FILENAME: &str = "plot_capture";

/// Image format produced by the mode bar's download button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Svg,
    Jpeg,
    Webp,
    #[default]
    Pdf,
}

/// `toImageButtonOptions` block of the plotly config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageButtonOptions {
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default = "default_filename")]
    pub filename: String,
    /// Multiplies title, legend, axis and canvas sizes.
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for ImageButtonOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::default(),
            filename: default_filename(),
            scale: default_scale(),
            width: None,
            height: None,
        }
    }
}

/// Plotly config passed next to data and layout on every render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(rename = "toImageButtonOptions", default)]
    pub to_image_button_options: ImageButtonOptions,
    #[serde(default)]
    pub displaylogo: bool,
    #[serde(
        rename = "displayModeBar",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_mode_bar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
}

impl Default for ExportConfig {
    /// PDF capture named `plot_capture` at scale 1, plotly logo hidden.
    fn default() -> Self {
        Self {
            to_image_button_options: ImageButtonOptions::default(),
            displaylogo: false,
            display_mode_bar: None,
            responsive: None,
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.to_image_button_options.format = format;
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.to_image_button_options.filename = filename.into();
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.to_image_button_options.scale = scale;
        self
    }

    /// Fixes the exported image size instead of using the on-screen size.
    #[must_use]
    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.to_image_button_options.width = Some(width);
        self.to_image_button_options.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_displaylogo(mut self, displaylogo: bool) -> Self {
        self.displaylogo = displaylogo;
        self
    }

    #[must_use]
    pub fn with_display_mode_bar(mut self, display_mode_bar: bool) -> Self {
        self.display_mode_bar = Some(display_mode_bar);
        self
    }

    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = Some(responsive);
        self
    }

    pub fn validate(&self) -> StyleResult<()> {
        let options = &self.to_image_button_options;
        if options.filename.trim().is_empty() {
            return Err(StyleError::InvalidConfig(
                "export filename must not be empty".to_owned(),
            ));
        }
        if !options.scale.is_finite() || options.scale <= 0.0 {
            return Err(StyleError::InvalidConfig(
                "export scale must be finite and > 0".to_owned(),
            ));
        }
        if options.width == Some(0) || options.height == Some(0) {
            return Err(StyleError::InvalidConfig(
                "export image size must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(input: &str) -> StyleResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}

fn default_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_owned()
}

fn default_scale() -> f64 {
    1.0
}
