use serde::{Deserialize, Serialize};

/// Category index assigned to nodes whose category name is not in the category list.
pub const UNRESOLVED_CATEGORY: i64 = -1;

/// One entity record as it appears in the dataset JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNode {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: String,
    /// Names of nodes pointing at this one.
    #[serde(default)]
    pub links: Vec<String>,
    /// Names of nodes this one points at.
    #[serde(default)]
    pub references: Vec<String>,
}

impl RawNode {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
            content: String::new(),
            links: Vec::new(),
            references: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Workspace {
    pub fn new(name: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            categories,
        }
    }

    pub fn includes(&self, category: &str) -> bool {
        self.categories.iter().any(|name| name == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDataset {
    pub categories: Vec<String>,
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub name: String,
    pub category: i64,
    pub value: String,
    pub symbol_size: usize,
    #[serde(rename = "itemStyle", default)]
    pub style: Style,
}

impl Node {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            category: UNRESOLVED_CATEGORY,
            value: value.into(),
            symbol_size: 0,
            style: Style::default(),
        }
    }

    pub fn opacity(&self) -> Option<f64> {
        self.style.opacity
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    #[serde(rename = "lineStyle", default)]
    pub style: Style,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            style: Style::default(),
        }
    }

    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Renderable graph. Replaced wholesale on every rebuild; only the style fields
/// of its nodes and links change in between.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub categories: Vec<Category>,
    pub workspaces: Vec<Workspace>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn workspace(&self, name: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|workspace| workspace.name == name)
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| category.name.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_node_optional_fields_default_to_empty() {
        let node: RawNode = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(node.category, None);
        assert!(node.content.is_empty());
        assert!(node.links.is_empty());
        assert!(node.references.is_empty());
    }

    #[test]
    fn test_node_serializes_with_renderer_field_names() {
        let mut node = Node::new("A", "hello");
        node.symbol_size = 7;
        node.style.opacity = Some(1.0);

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["symbolSize"], 7);
        assert_eq!(json["itemStyle"]["opacity"], 1.0);
        assert_eq!(json["category"], -1);
    }

    #[test]
    fn test_unset_opacity_is_omitted() {
        let link = Link::new("A", "B");
        let json = serde_json::to_value(&link).unwrap();
        assert!(json["lineStyle"].get("opacity").is_none());
    }

    #[test]
    fn test_workspace_membership() {
        let workspace = Workspace::new("W1", vec!["cat1".to_string()]);
        assert!(workspace.includes("cat1"));
        assert!(!workspace.includes("cat2"));
    }
}
