use graph::VisibilitySelection;
use relgraph_core::model::{Category, Graph, Link, Node};
use serde::Serialize;

const LINE_BREAK: &str = "<br>";
const FORCE_REPULSION: f64 = 20.0;

/// Tooltip body for a node: the name, then the value with each newline turned
/// into a line break.
pub fn tooltip_text(name: &str, value: Option<&str>) -> String {
    let body = value.map(|v| v.replace('\n', LINE_BREAK)).unwrap_or_default();
    format!("{name}{LINE_BREAK} {body}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub data: Vec<String>,
    pub selected: VisibilitySelection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Force {
    pub repulsion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSeries {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub layout: &'static str,
    pub data: Vec<Node>,
    pub links: Vec<Link>,
    pub categories: Vec<Category>,
    pub animation: bool,
    pub draggable: bool,
    pub roam: bool,
    pub label: Position,
    pub tooltip: Position,
    pub force: Force,
}

impl GraphSeries {
    pub fn tooltip_for(&self, id: &str) -> Option<String> {
        self.data
            .iter()
            .find(|node| node.id == id)
            .map(|node| tooltip_text(&node.name, Some(&node.value)))
    }
}

/// Configuration handed to the chart renderer. Layout is left to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOption {
    pub legend: Legend,
    pub series: Vec<GraphSeries>,
}

impl ChartOption {
    pub fn from_graph(graph: &Graph, selection: &VisibilitySelection) -> Self {
        let series = GraphSeries {
            kind: "graph",
            layout: "force",
            data: graph.nodes.clone(),
            links: graph.links.clone(),
            categories: graph.categories.clone(),
            animation: true,
            draggable: true,
            roam: true,
            label: Position { position: "right" },
            tooltip: Position { position: "bottom" },
            force: Force {
                repulsion: FORCE_REPULSION,
            },
        };

        Self {
            legend: Legend {
                data: graph.category_names(),
                selected: selection.clone(),
            },
            series: vec![series],
        }
    }
}
