use crate::presentation::ChartOption;
use graph::{select_all, select_workspace, VisibilitySelection};
use ingestion::{DatasetSource, GraphSlot, IngestionError, IngestionPipeline};
use query::{apply_filter, FilterError};
use relgraph_core::config::AppConfig;
use relgraph_core::error::{ErrorCode, RelationGraphError};
use relgraph_core::model::Graph;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no graph has been loaded yet")]
    NoGraph,
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(String),
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl RelationGraphError for SessionError {
    fn error_code(&self) -> ErrorCode {
        match self {
            SessionError::NoGraph | SessionError::WorkspaceNotFound(_) => ErrorCode::NotFound,
            SessionError::Ingestion(e) => e.error_code(),
            SessionError::Filter(e) => e.error_code(),
        }
    }
}

/// One viewer session: the current graph, its category visibility and the
/// source it is fetched from.
///
/// Every mutating operation takes `&mut self`, so style updates and rebuilds
/// never interleave.
pub struct RelationGraph {
    pipeline: IngestionPipeline,
    slot: GraphSlot,
    selection: VisibilitySelection,
    active_workspace: Option<String>,
}

impl RelationGraph {
    pub fn new(source: Box<dyn DatasetSource>) -> Self {
        Self::with_pipeline(IngestionPipeline::new(source))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_pipeline(IngestionPipeline::from_config(config))
    }

    fn with_pipeline(pipeline: IngestionPipeline) -> Self {
        Self {
            pipeline,
            slot: GraphSlot::new(),
            selection: VisibilitySelection::default(),
            active_workspace: None,
        }
    }

    /// Rebuilds the graph from the source and shows every category again.
    /// A failed fetch keeps the previous graph and selection.
    pub async fn fetch(&mut self) -> Result<&Graph, SessionError> {
        let graph = self.pipeline.refresh(&mut self.slot).await?;
        self.selection = select_all(&graph.categories);
        self.active_workspace = None;
        Ok(graph)
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.slot.get()
    }

    pub fn selection(&self) -> &VisibilitySelection {
        &self.selection
    }

    pub fn active_workspace(&self) -> Option<&str> {
        self.active_workspace.as_deref()
    }

    pub fn workspace_names(&self) -> Vec<&str> {
        self.slot
            .get()
            .map(|graph| graph.workspaces.iter().map(|w| w.name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn select_workspace(&mut self, name: &str) -> Result<&VisibilitySelection, SessionError> {
        let graph = self.slot.get().ok_or(SessionError::NoGraph)?;
        let workspace = graph
            .workspace(name)
            .ok_or_else(|| SessionError::WorkspaceNotFound(name.to_string()))?;

        self.selection = select_workspace(workspace, &graph.categories);
        self.active_workspace = Some(workspace.name.clone());
        info!(
            "Selected workspace {}: {} of {} categories visible",
            name,
            self.selection.visible_categories().len(),
            self.selection.len()
        );
        Ok(&self.selection)
    }

    pub fn show_all_categories(&mut self) -> Result<&VisibilitySelection, SessionError> {
        let graph = self.slot.get().ok_or(SessionError::NoGraph)?;
        self.selection = select_all(&graph.categories);
        self.active_workspace = None;
        Ok(&self.selection)
    }

    /// Runs a search over the current graph. See [`query::SearchQuery`] for the
    /// query syntax; the text is a regular expression.
    pub fn search(&mut self, query: &str) -> Result<&Graph, SessionError> {
        let graph = self.slot.get_mut().ok_or(SessionError::NoGraph)?;
        match apply_filter(graph, query) {
            Ok(graph) => Ok(graph),
            Err(e) => {
                warn!("Rejected search {:?}: {}", query, e);
                Err(e.into())
            }
        }
    }

    pub fn chart_option(&self) -> Option<ChartOption> {
        self.slot
            .get()
            .map(|graph| ChartOption::from_graph(graph, &self.selection))
    }
}
