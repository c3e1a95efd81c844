use plot_style::api::{ExportConfig, FigurePayload, TemplateRegistry};
use plot_style::core::{Color, Figure, Trace};
use plot_style::style::{
    AxisStyle, FontStyle, HoverMode, LayoutStyle, PM_GRAPH_PROFILE_NAME, StyleProfile,
};
use serde_json::json;

fn profile_with_font(size: f64) -> StyleProfile {
    StyleProfile::new(LayoutStyle {
        font: Some(FontStyle {
            family: Some("Segoe UI".to_owned()),
            size: Some(size),
            color: None,
        }),
        xaxis: Some(AxisStyle::new().with_showgrid(true)),
        hovermode: Some(HoverMode::X),
        ..LayoutStyle::default()
    })
}

#[test]
fn reregistering_a_name_replaces_the_whole_definition() {
    let mut registry = TemplateRegistry::new();
    registry
        .register_default("house", profile_with_font(20.0))
        .expect("first registration");

    let second = StyleProfile::new(LayoutStyle {
        height: Some(400),
        ..LayoutStyle::default()
    });
    let previous = registry
        .register("house", second.clone())
        .expect("second registration");

    assert_eq!(previous, Some(profile_with_font(20.0)));
    let active = registry.default_profile().expect("active profile");
    assert_eq!(active, &second);
    assert!(active.layout.font.is_none());
    assert!(active.layout.xaxis.is_none());
    assert!(active.layout.hovermode.is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn only_one_profile_is_active_and_last_default_wins() {
    let mut registry = TemplateRegistry::with_builtin();
    registry
        .register_default("large", profile_with_font(28.0))
        .expect("register large");
    assert_eq!(registry.default_name(), Some("large"));

    registry
        .set_default(PM_GRAPH_PROFILE_NAME)
        .expect("switch back");
    assert_eq!(registry.default_name(), Some(PM_GRAPH_PROFILE_NAME));
    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec![PM_GRAPH_PROFILE_NAME, "large"]
    );
}

#[test]
fn registered_profile_is_isolated_from_caller_edits() {
    let mut registry = TemplateRegistry::new();
    let mut profile = profile_with_font(20.0);
    registry
        .register("house", profile.clone())
        .expect("registration");
    profile.layout.plot_bgcolor = Some(Color::hex(0, 0, 0));
    assert_eq!(
        registry.get("house").and_then(|p| p.layout.plot_bgcolor.clone()),
        None
    );
}

#[test]
fn separate_registries_do_not_interfere() {
    let mut first = TemplateRegistry::with_builtin();
    let second = TemplateRegistry::with_builtin();
    first
        .register_default("other", StyleProfile::default())
        .expect("register");
    assert_eq!(second.default_name(), Some(PM_GRAPH_PROFILE_NAME));
}

#[test]
fn payload_uses_the_profile_active_at_build_time() {
    let mut registry = TemplateRegistry::with_builtin();
    let figure = Figure::new().with_trace(Trace::new("scatter").with_name("a"));

    let before = FigurePayload::with_default_template(&figure, &registry, &ExportConfig::default())
        .expect("payload");
    registry
        .register_default("compact", profile_with_font(10.0))
        .expect("register");
    let after = FigurePayload::with_default_template(&figure, &registry, &ExportConfig::default())
        .expect("payload");

    assert_eq!(before.layout["template"]["layout"]["font"]["size"], json!(20.0));
    assert_eq!(after.layout["template"]["layout"]["font"]["size"], json!(10.0));
    assert_eq!(after.layout["template"]["layout"]["hovermode"], json!("x"));
}
