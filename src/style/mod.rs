//! Typed plotly template model.
//!
//! Every field mirrors a plotly layout attribute of the same name so the
//! serialized profile can be handed to plotly.js unchanged.

pub mod axis;
pub mod layout;
pub mod presets;
pub mod profile;

pub use axis::{AxisMirror, AxisStyle, MirrorMode, SceneStyle, TickPlacement};
pub use layout::{FontStyle, HoverMode, LayoutStyle, Margin};
pub use presets::PM_GRAPH_PROFILE_NAME;
pub use profile::StyleProfile;
