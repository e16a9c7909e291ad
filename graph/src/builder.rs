use crate::index::{CategoryIndex, DegreeIndex};
use relgraph_core::error::{ErrorCode, RelationGraphError};
use relgraph_core::model::{Category, Graph, Link, Node, RawDataset, RawNode, UNRESOLVED_CATEGORY};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Size of a node with no links.
pub const MIN_SYMBOL_SIZE: usize = 5;

const REQUIRED_ARRAYS: [&str; 2] = ["nodes", "categories"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("dataset must be a JSON object")]
    NotAnObject,
    #[error("dataset is missing required array `{0}`")]
    MissingField(&'static str),
    #[error("dataset field `{0}` must be an array")]
    NotAnArray(&'static str),
    #[error("malformed dataset: {0}")]
    Malformed(String),
}

impl RelationGraphError for BuildError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

pub const fn symbol_size(degree: usize) -> usize {
    degree * 2 + MIN_SYMBOL_SIZE
}

pub struct GraphBuilder;

impl GraphBuilder {
    /// Validates the dataset shape before building. Nothing is built unless the
    /// whole document is well formed.
    pub fn build_from_value(value: Value) -> Result<Graph, BuildError> {
        validate_shape(&value)?;
        let raw: RawDataset =
            serde_json::from_value(value).map_err(|e| BuildError::Malformed(e.to_string()))?;
        Ok(Self::build(&raw))
    }

    pub fn build(raw: &RawDataset) -> Graph {
        let categories: Vec<Category> = raw.categories.iter().map(Category::new).collect();

        let mut nodes = Vec::with_capacity(raw.nodes.len());
        let mut links = Vec::new();
        for raw_node in &raw.nodes {
            nodes.push(Node::new(raw_node.name.as_str(), raw_node.content.as_str()));
            links.extend(build_links(raw_node));
        }

        let category_index = CategoryIndex::new(&categories);
        let degrees = DegreeIndex::from_links(&links);
        for (node, raw_node) in nodes.iter_mut().zip(&raw.nodes) {
            node.category = raw_node
                .category
                .as_deref()
                .map(|name| category_index.resolve(name))
                .unwrap_or(UNRESOLVED_CATEGORY);
            node.symbol_size = symbol_size(degrees.degree(&node.id));
        }

        debug!(
            "Built graph: {} nodes, {} links, {} categories, {} workspaces",
            nodes.len(),
            links.len(),
            categories.len(),
            raw.workspaces.len()
        );

        Graph {
            nodes,
            links,
            categories,
            workspaces: raw.workspaces.clone(),
        }
    }
}

/// `links` name incoming edges, `references` outgoing ones.
fn build_links(raw_node: &RawNode) -> Vec<Link> {
    let incoming = raw_node
        .links
        .iter()
        .map(|source| Link::new(source.as_str(), raw_node.name.as_str()));
    let outgoing = raw_node
        .references
        .iter()
        .map(|target| Link::new(raw_node.name.as_str(), target.as_str()));
    incoming.chain(outgoing).collect()
}

fn validate_shape(value: &Value) -> Result<(), BuildError> {
    let object = value.as_object().ok_or(BuildError::NotAnObject)?;
    for field in REQUIRED_ARRAYS {
        match object.get(field) {
            None | Some(Value::Null) => return Err(BuildError::MissingField(field)),
            Some(Value::Array(_)) => {}
            Some(_) => return Err(BuildError::NotAnArray(field)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symbol_size_is_affine_in_degree() {
        assert_eq!(symbol_size(0), 5);
        assert_eq!(symbol_size(1), 7);
        assert_eq!(symbol_size(10), 25);
    }

    #[test]
    fn test_links_before_references() {
        let mut node = RawNode::new("B", "cat");
        node.links = vec!["A".to_string()];
        node.references = vec!["C".to_string()];

        let links = build_links(&node);
        assert_eq!(links, vec![Link::new("A", "B"), Link::new("B", "C")]);
    }

    #[test]
    fn test_missing_nodes_array_is_rejected() {
        let result = GraphBuilder::build_from_value(json!({ "categories": [] }));
        assert_eq!(result, Err(BuildError::MissingField("nodes")));
    }

    #[test]
    fn test_null_categories_is_rejected() {
        let result = GraphBuilder::build_from_value(json!({ "nodes": [], "categories": null }));
        assert_eq!(result, Err(BuildError::MissingField("categories")));
    }

    #[test]
    fn test_non_array_categories_is_rejected() {
        let result =
            GraphBuilder::build_from_value(json!({ "nodes": [], "categories": "person" }));
        assert_eq!(result, Err(BuildError::NotAnArray("categories")));
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        let result = GraphBuilder::build_from_value(json!([]));
        assert_eq!(result, Err(BuildError::NotAnObject));
    }

    #[test]
    fn test_malformed_node_is_rejected() {
        let result = GraphBuilder::build_from_value(json!({
            "categories": ["a"],
            "nodes": [{ "category": "a" }]
        }));
        assert!(matches!(result, Err(BuildError::Malformed(_))));
        assert_eq!(
            result.unwrap_err().error_code(),
            ErrorCode::InvalidArgument
        );
    }
}
