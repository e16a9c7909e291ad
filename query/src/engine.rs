use crate::dsl::{FilterError, SearchQuery};
use relgraph_core::model::Graph;
use std::collections::HashMap;
use tracing::debug;

pub const OPACITY_SHOWN: f64 = 1.0;
pub const OPACITY_DIMMED: f64 = 0.1;

/// Highlights the nodes matching `query` and dims the rest, then recomputes
/// link opacities. An empty query shows every node.
///
/// `query` is a case-insensitive regular expression, optionally prefixed with
/// `name:` or `value:` (see [`SearchQuery`]). An invalid pattern is returned
/// as [`FilterError`] before any style is touched.
pub fn apply_filter<'g>(graph: &'g mut Graph, query: &str) -> Result<&'g mut Graph, FilterError> {
    let parsed = SearchQuery::parse(query)?;
    debug!("Applying filter {:?} with fields {:?}", query, parsed.fields());
    apply_query(graph, &parsed);
    Ok(graph)
}

pub fn apply_query(graph: &mut Graph, query: &SearchQuery) {
    for node in &mut graph.nodes {
        let opacity = if query.matches(node) {
            OPACITY_SHOWN
        } else {
            OPACITY_DIMMED
        };
        node.style.opacity = Some(opacity);
    }
    propagate_link_opacity(graph);
}

/// Sets each link to the lower opacity of its two endpoints.
///
/// A link whose endpoint is missing, has no opacity yet, or has opacity
/// exactly 0 keeps its previous style. Hidden endpoints therefore do not hide
/// their links.
pub fn propagate_link_opacity(graph: &mut Graph) {
    let mut opacities: HashMap<&str, Option<f64>> = HashMap::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        opacities.entry(node.id.as_str()).or_insert(node.style.opacity);
    }

    for link in &mut graph.links {
        let source = opacities.get(link.source.as_str()).copied().flatten();
        let target = opacities.get(link.target.as_str()).copied().flatten();
        if let (Some(source), Some(target)) = (source, target) {
            if is_truthy(source) && is_truthy(target) {
                link.style.opacity = Some(source.min(target));
            }
        }
    }
}

fn is_truthy(opacity: f64) -> bool {
    opacity != 0.0 && !opacity.is_nan()
}
