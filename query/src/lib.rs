pub mod dsl;
pub mod engine;

pub use dsl::{Criterion, FilterError, SearchField, SearchQuery};
pub use engine::{apply_filter, apply_query, propagate_link_opacity, OPACITY_DIMMED, OPACITY_SHOWN};
