pub mod builder;
pub mod index;
pub mod workspace;

pub use builder::{symbol_size, BuildError, GraphBuilder, MIN_SYMBOL_SIZE};
pub use workspace::{select_all, select_workspace, VisibilitySelection};
