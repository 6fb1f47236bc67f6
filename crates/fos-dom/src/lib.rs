//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree plus the element collection type that bulk
//! style and class helpers operate on.

mod node;
mod tree;
mod style;
mod classlist;
mod collection;

pub use node::{Node, NodeData, ElementData, TextData};
pub use tree::{DomTree, Children};
pub use style::{InlineStyle, property_name};
pub use classlist::ClassList;
pub use collection::ElementCollection;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// No node
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> Option<usize> {
        self.is_valid().then_some(self.0 as usize)
    }
}
