use relgraph_core::model::{Category, UNRESOLVED_CATEGORY};
use std::collections::HashMap;

/// Name to list-position lookup; the first occurrence of a name wins.
pub struct CategoryIndex {
    positions: HashMap<String, i64>,
}

impl CategoryIndex {
    pub fn new(categories: &[Category]) -> Self {
        let mut positions = HashMap::with_capacity(categories.len());
        for (idx, category) in categories.iter().enumerate() {
            positions
                .entry(category.name.clone())
                .or_insert(idx as i64);
        }
        Self { positions }
    }

    pub fn resolve(&self, name: &str) -> i64 {
        self.positions
            .get(name)
            .copied()
            .unwrap_or(UNRESOLVED_CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
