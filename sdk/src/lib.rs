pub mod presentation;
pub mod session;

pub use presentation::{tooltip_text, ChartOption};
pub use session::{RelationGraph, SessionError};

pub use graph::VisibilitySelection;
pub use ingestion::{DatasetSource, FileSource, StaticSource};
pub use relgraph_core::config::AppConfig;
pub use relgraph_core::model::Graph;
