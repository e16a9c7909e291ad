use relgraph_core::model::Graph;

/// Sole owner of the current graph. A rebuild swaps the whole graph in one
/// step; between rebuilds only style fields are touched, through `get_mut`.
#[derive(Debug, Default)]
pub struct GraphSlot {
    current: Option<Graph>,
    generation: u64,
}

impl GraphSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Graph> {
        self.current.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Graph> {
        self.current.as_mut()
    }

    pub fn replace(&mut self, graph: Graph) -> &Graph {
        self.generation += 1;
        self.current.insert(graph)
    }

    /// Number of successful replacements so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
