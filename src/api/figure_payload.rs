use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{Figure, Trace};
use crate::error::{StyleError, StyleResult};
use crate::style::StyleProfile;

use super::{ExportConfig, TemplateRegistry};

/// Everything plotly.js needs for one `newPlot` call.
///
/// The style profile and export config are passed in explicitly; the
/// template travels inside `layout.template` so the chart does not depend on
/// any default registered on the JavaScript side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigurePayload {
    pub data: Vec<Trace>,
    pub layout: Map<String, Value>,
    pub config: ExportConfig,
}

impl FigurePayload {
    pub fn build(
        figure: &Figure,
        profile: &StyleProfile,
        config: &ExportConfig,
    ) -> StyleResult<Self> {
        profile.validate()?;
        config.validate()?;

        let mut layout = figure.layout.clone();
        if layout.contains_key("template") {
            debug!("figure sets its own template; explicit value kept");
        } else {
            layout.insert("template".to_owned(), profile.to_template_value()?);
        }

        debug!(
            traces = figure.data.len(),
            layout_keys = layout.len(),
            "built figure payload"
        );
        Ok(Self {
            data: figure.data.clone(),
            layout,
            config: config.clone(),
        })
    }

    /// Builds with the registry's active default profile.
    pub fn with_default_template(
        figure: &Figure,
        registry: &TemplateRegistry,
        config: &ExportConfig,
    ) -> StyleResult<Self> {
        let profile = registry.default_profile().ok_or_else(|| {
            StyleError::InvalidConfig("no default template is active".to_owned())
        })?;
        Self::build(figure, profile, config)
    }

    /// Builds with a registered profile picked by name.
    pub fn with_named_template(
        figure: &Figure,
        registry: &TemplateRegistry,
        template: &str,
        config: &ExportConfig,
    ) -> StyleResult<Self> {
        Self::build(figure, registry.require(template)?, config)
    }

    pub fn to_value(&self) -> StyleResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::FigurePayload;
    use crate::api::{ExportConfig, TemplateRegistry};
    use crate::core::{Figure, Trace};
    use crate::style::StyleProfile;

    #[test]
    fn payload_embeds_template_and_config() {
        let figure = Figure::new().with_trace(Trace::new("bar").with_name("a"));
        let payload = FigurePayload::with_default_template(
            &figure,
            &TemplateRegistry::with_builtin(),
            &ExportConfig::default(),
        )
        .expect("payload");
        let value = payload.to_value().expect("json");
        assert_eq!(value["data"][0]["name"], json!("a"));
        assert_eq!(value["layout"]["template"]["layout"]["hovermode"], json!("closest"));
        assert_eq!(value["config"]["displaylogo"], json!(false));
    }

    #[test]
    fn explicit_figure_template_is_kept() {
        let figure = Figure::new().with_layout_value("template", json!("plotly_dark"));
        let payload = FigurePayload::build(&figure, &StyleProfile::default(), &ExportConfig::default())
            .expect("payload");
        assert_eq!(payload.layout["template"], json!("plotly_dark"));
    }

    #[test]
    fn missing_default_or_name_is_an_error() {
        let figure = Figure::new();
        let registry = TemplateRegistry::new();
        assert!(
            FigurePayload::with_default_template(&figure, &registry, &ExportConfig::default())
                .is_err()
        );
        let err = FigurePayload::with_named_template(
            &figure,
            &registry,
            "PM_graph_1",
            &ExportConfig::default(),
        )
        .expect_err("unregistered template");
        assert!(format!("{err}").contains("not registered"));
    }

    #[test]
    fn invalid_export_config_is_rejected() {
        let config = ExportConfig::default().with_scale(-2.0);
        assert!(FigurePayload::build(&Figure::new(), &StyleProfile::default(), &config).is_err());
    }
}
