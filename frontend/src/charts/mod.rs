//! Chart pipeline: payload records in, SVG markup mounted into the page.
//!
//! The flow is `registry` (which charts exist, on which tab) → `tabs`
//! (dataset → [`spec::ChartSpec`] builders) → `render` (spec → SVG string)
//! → `dispatch` (per-chart guarded mounting).

pub mod dispatch;
pub mod filter;
pub mod palette;
pub mod registry;
pub mod render;
pub mod spec;
pub mod style;
pub mod tabs;
