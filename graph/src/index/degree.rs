use relgraph_core::model::Link;
use std::collections::HashMap;

/// Direction-agnostic link count per node id.
pub struct DegreeIndex {
    degrees: HashMap<String, usize>,
}

impl DegreeIndex {
    pub fn new() -> Self {
        Self {
            degrees: HashMap::new(),
        }
    }

    pub fn from_links(links: &[Link]) -> Self {
        let mut index = Self::new();
        for link in links {
            index.add_link(link);
        }
        index
    }

    /// A self-loop touches its node once.
    pub fn add_link(&mut self, link: &Link) {
        *self.degrees.entry(link.source.clone()).or_insert(0) += 1;
        if link.target != link.source {
            *self.degrees.entry(link.target.clone()).or_insert(0) += 1;
        }
    }

    pub fn degree(&self, id: &str) -> usize {
        self.degrees.get(id).copied().unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.degrees.len()
    }
}

impl Default for DegreeIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_counts_both_directions() {
        let links = vec![Link::new("A", "B"), Link::new("C", "A")];
        let index = DegreeIndex::from_links(&links);

        assert_eq!(index.degree("A"), 2);
        assert_eq!(index.degree("B"), 1);
        assert_eq!(index.degree("C"), 1);
        assert_eq!(index.degree("missing"), 0);
    }

    #[test]
    fn test_multi_edges_are_counted_separately() {
        let links = vec![Link::new("A", "B"), Link::new("A", "B")];
        let index = DegreeIndex::from_links(&links);
        assert_eq!(index.degree("A"), 2);
        assert_eq!(index.degree("B"), 2);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let index = DegreeIndex::from_links(&[Link::new("A", "A")]);
        assert_eq!(index.degree("A"), 1);
        assert_eq!(index.node_count(), 1);
    }
}
