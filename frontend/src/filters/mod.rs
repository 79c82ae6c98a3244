//! Filter state, query encoding and the filter form components.

pub mod controls;
pub mod query;

pub use controls::{FilterBar, QuickPickSelect, YearRangeSlider};
pub use query::{apply_all_exclusivity, to_query, FilterSelection, ALL};
