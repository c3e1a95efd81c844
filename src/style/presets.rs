//! Built-in `PM_graph_1` house style.

use serde_json::Map;

use crate::core::Color;

use super::{
    AxisMirror, AxisStyle, FontStyle, HoverMode, LayoutStyle, Margin, SceneStyle, StyleProfile,
    TickPlacement,
};

pub const PM_GRAPH_PROFILE_NAME: &str = "PM_graph_1";

/// CMYK 100% black.
pub const BLACK_COLOR: &str = "#231F20";
/// Lighter than plotly's default `#eee`.
pub const GRID_COLOR: &str = "#E2E7ED";

pub const FONT_FAMILY: &str = "Segoe UI";
pub const FONT_SIZE: f64 = 20.0;
pub const AXIS_LINE_WIDTH: f64 = 1.3;
pub const SCENE_AXIS_LINE_WIDTH: f64 = 2.0;
pub const BAR_GAP: f64 = 0.05;
pub const BAR_GROUP_GAP: f64 = 0.0;
pub const FIGURE_HEIGHT_PX: u32 = 700;
pub const MARGIN: Margin = Margin::new(100.0, 30.0, 30.0, 70.0);

#[must_use]
pub fn black() -> Color {
    Color::hex(0x23, 0x1F, 0x20)
}

#[must_use]
pub fn grid() -> Color {
    Color::hex(0xE2, 0xE7, 0xED)
}

/// Boxed 2D axis: mirrored outline, outside ticks, grid and zero line.
#[must_use]
pub fn axis_2d() -> AxisStyle {
    AxisStyle::new()
        .with_showline(true)
        .with_mirror(AxisMirror::Flag(true))
        .with_ticks(TickPlacement::Outside)
        .with_showgrid(true)
        .with_zeroline(true)
        .with_linewidth(AXIS_LINE_WIDTH)
        .with_color(black())
        .with_gridcolor(grid())
}

#[must_use]
pub fn axis_3d() -> AxisStyle {
    AxisStyle::new()
        .with_showline(true)
        .with_ticks(TickPlacement::Outside)
        .with_linewidth(SCENE_AXIS_LINE_WIDTH)
        .with_color(black())
        .with_gridcolor(grid())
}

#[must_use]
pub fn pm_graph() -> StyleProfile {
    StyleProfile::new(LayoutStyle {
        xaxis: Some(axis_2d()),
        yaxis: Some(axis_2d()),
        bargap: Some(BAR_GAP),
        bargroupgap: Some(BAR_GROUP_GAP),
        height: Some(FIGURE_HEIGHT_PX),
        width: None,
        margin: Some(MARGIN),
        hovermode: Some(HoverMode::Closest),
        scene: Some(SceneStyle::uniform(axis_3d())),
        font: Some(FontStyle {
            family: Some(FONT_FAMILY.to_owned()),
            size: Some(FONT_SIZE),
            color: Some(black()),
        }),
        plot_bgcolor: Some(Color::rgba_u8(255, 255, 255, 180)),
        paper_bgcolor: Some(Color::rgba_u8(255, 255, 255, 0)),
        extra: Map::new(),
    })
}
