//! Optional feature modules live here.
//!
//! Keep extensions feature-gated and avoid coupling them into core paths.

#[cfg(feature = "plotly-interop")]
pub mod plotly_interop;
