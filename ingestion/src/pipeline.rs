use crate::slot::GraphSlot;
use crate::source::{DatasetSource, FileSource};
use graph::{BuildError, GraphBuilder};
use relgraph_core::config::AppConfig;
use relgraph_core::error::{ErrorCode, RelationGraphError};
use relgraph_core::model::Graph;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Dataset not found: {0}")]
    NotFound(String),
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to build graph: {0}")]
    Build(#[from] BuildError),
}

impl RelationGraphError for IngestionError {
    fn error_code(&self) -> ErrorCode {
        match self {
            IngestionError::NotFound(_) => ErrorCode::NotFound,
            IngestionError::Io(_) => ErrorCode::Unavailable,
            IngestionError::Parse(_) => ErrorCode::InvalidArgument,
            IngestionError::Build(e) => e.error_code(),
        }
    }
}

pub struct IngestionPipeline {
    source: Box<dyn DatasetSource>,
}

impl IngestionPipeline {
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Box::new(FileSource::from_config(config)))
    }

    pub fn source(&self) -> &dyn DatasetSource {
        self.source.as_ref()
    }

    /// Fetches, parses and builds a fresh graph without touching any slot.
    pub async fn load(&self) -> Result<Graph, IngestionError> {
        let content = self.source.fetch().await?;
        debug!("Fetched {} bytes from {}", content.len(), self.source.describe());

        let value: Value = serde_json::from_slice(&content)?;
        let graph = GraphBuilder::build_from_value(value)?;
        Ok(graph)
    }

    /// Loads a new graph and swaps it into `slot`. On failure the slot keeps
    /// its previous graph and the error is logged here, once.
    pub async fn refresh<'s>(&self, slot: &'s mut GraphSlot) -> Result<&'s Graph, IngestionError> {
        match self.load().await {
            Ok(graph) => {
                info!(
                    "Loaded graph from {}: {} nodes, {} links",
                    self.source.describe(),
                    graph.nodes.len(),
                    graph.links.len()
                );
                Ok(slot.replace(graph))
            }
            Err(e) => {
                error!("Error fetching data from {}: {}", self.source.describe(), e);
                Err(e)
            }
        }
    }
}
