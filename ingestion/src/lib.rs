pub mod pipeline;
pub mod slot;
pub mod source;

pub use pipeline::{IngestionError, IngestionPipeline};
pub use slot::GraphSlot;
pub use source::{DatasetSource, FileSource, StaticSource};
