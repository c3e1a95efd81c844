//! plot-style: house chart template, export defaults and trace selection.
//!
//! The crate models plotly templates as typed values, keeps them in an
//! explicit [`api::TemplateRegistry`] instead of a global table, and offers
//! [`api::sel_trace`] to pick traces out of a figure by property value.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod style;
pub mod telemetry;

pub use api::{ExportConfig, Selection, TemplateRegistry, TraceQuery, sel_trace};
pub use crate::core::{Figure, PropertyPath, TargetValues, Trace};
pub use error::{StyleError, StyleResult};
pub use style::StyleProfile;
