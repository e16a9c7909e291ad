use relgraph_core::model::{Category, Workspace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category name to legend visibility. Every known category has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilitySelection(BTreeMap<String, bool>);

impl VisibilitySelection {
    pub fn is_visible(&self, category: &str) -> Option<bool> {
        self.0.get(category).copied()
    }

    pub fn visible_categories(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, visible)| (name.as_str(), *visible))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for VisibilitySelection {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Shows exactly the categories the workspace lists and hides the rest.
/// Names in the workspace that match no category are ignored.
pub fn select_workspace(workspace: &Workspace, categories: &[Category]) -> VisibilitySelection {
    categories
        .iter()
        .map(|category| (category.name.clone(), workspace.includes(&category.name)))
        .collect()
}

pub fn select_all(categories: &[Category]) -> VisibilitySelection {
    categories
        .iter()
        .map(|category| (category.name.clone(), true))
        .collect()
}
