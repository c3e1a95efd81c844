pub mod color;
pub mod figure;
pub mod property_path;
pub mod target_values;
pub mod trace;

pub use color::Color;
pub use figure::Figure;
pub use property_path::{PathSegment, PropertyPath};
pub use target_values::TargetValues;
pub use trace::Trace;
