//! Element collections
//!
//! An ordered set of element handles over a borrowed tree, the host type
//! that bulk DOM helpers are attached to.

use crate::{DomTree, ElementData, NodeId};
use std::ops::Index;

/// Ordered collection of elements
///
/// Holds ids, not nodes: the tree keeps ownership, and the collection never
/// creates, removes, or reorders nodes. Its size is fixed at construction.
#[derive(Debug)]
pub struct ElementCollection<'t> {
    tree: &'t mut DomTree,
    nodes: Vec<NodeId>,
}

impl<'t> ElementCollection<'t> {
    /// Build a collection; ids that are not elements are dropped
    pub fn new(tree: &'t mut DomTree, ids: impl IntoIterator<Item = NodeId>) -> Self {
        let nodes: Vec<NodeId> = ids
            .into_iter()
            .filter(|&id| tree.element(id).is_some())
            .collect();
        Self { tree, nodes }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Element id at index
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    /// First element id
    pub fn first(&self) -> Option<NodeId> {
        self.get(0)
    }

    /// All element ids in order
    pub fn ids(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Element data at index
    pub fn element(&self, index: usize) -> Option<&ElementData> {
        self.tree.element(self.get(index)?)
    }

    /// Apply `f` to every element, in order
    pub fn each<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(NodeId, &mut ElementData),
    {
        for &id in &self.nodes {
            if let Some(elem) = self.tree.element_mut(id) {
                f(id, elem);
            }
        }
        self
    }

    /// Iterate over `(id, element)` pairs, in order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ElementData)> + '_ {
        self.nodes
            .iter()
            .filter_map(|&id| self.tree.element(id).map(|e| (id, e)))
    }

    /// The underlying tree
    pub fn tree(&self) -> &DomTree {
        &*self.tree
    }

    /// The underlying tree, mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut *self.tree
    }
}

impl Index<usize> for ElementCollection<'_> {
    type Output = NodeId;

    fn index(&self, index: usize) -> &NodeId {
        &self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(n: usize) -> (DomTree, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let ids: Vec<_> = (0..n)
            .map(|_| {
                let id = tree.create_element("div");
                tree.append_child(tree.root(), id);
                id
            })
            .collect();
        (tree, ids)
    }

    #[test]
    fn test_non_elements_dropped() {
        let (mut tree, ids) = tree_with(2);
        let text = tree.create_text("x");
        let root = tree.root();
        let coll = tree.select([ids[0], text, root, NodeId::NONE, ids[1]]);
        assert_eq!(coll.len(), 2);
        assert_eq!(coll.ids(), &ids[..]);
        assert_eq!(coll[1], ids[1]);
    }

    #[test]
    fn test_each_in_order() {
        let (mut tree, ids) = tree_with(3);
        let mut seen = Vec::new();
        tree.select(ids.clone())
            .each(|id, _| seen.push(id))
            .each(|_, elem| elem.class_name.push_str("x"));
        assert_eq!(seen, ids);
        assert!(ids.iter().all(|&id| tree.element(id).map(|e| e.class_name.as_str()) == Some("x")));
    }

    #[test]
    fn test_empty() {
        let mut tree = DomTree::new();
        let coll = tree.select(Vec::new());
        assert!(coll.is_empty());
        assert_eq!(coll.first(), None);
        assert!(coll.element(0).is_none());
    }
}
