//! DOM Tree (arena-based allocation)

use crate::{ElementCollection, ElementData, Node, NodeId};

/// Arena-based DOM tree
///
/// Node 0 is always the document node. Nodes are never freed; detached
/// nodes simply have no parent.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()?)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index()?)
    }

    /// Element data for `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    /// Mutable element data for `id`, if it is an element
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id)?.as_element_mut()
    }

    /// Number of nodes in the tree (including the document)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree holds nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.push(Node::element(tag_name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Store a node; once the arena is full the node is dropped and
    /// `NodeId::NONE` is returned
    fn push(&mut self, node: Node) -> NodeId {
        let Some(id) = id_for_index(self.nodes.len()) else {
            tracing::warn!("Node arena exhausted at {} nodes", self.nodes.len());
            return NodeId::NONE;
        };
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`
    ///
    /// A child that is already attached elsewhere is moved. Invalid ids
    /// and appends that would make a node its own ancestor are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            tracing::debug!("append_child ignored: {:?} -> {:?}", child, parent);
            return;
        }
        if self.is_inclusive_ancestor(child, parent) {
            tracing::debug!("append_child ignored, {:?} is an ancestor of {:?}", child, parent);
            return;
        }

        self.detach(child);

        let prev = self.nodes[parent.0 as usize].last_child;
        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = NodeId::NONE;
        }
        if let Some(prev_node) = self.get_mut(prev) {
            prev_node.next_sibling = child;
        }

        let parent_node = &mut self.nodes[parent.0 as usize];
        if !parent_node.first_child.is_valid() {
            parent_node.first_child = child;
        }
        parent_node.last_child = child;
    }

    /// Check if `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Unlink a node from its parent and siblings
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        if let Some(prev_node) = self.get_mut(prev) {
            prev_node.next_sibling = next;
        }
        if let Some(next_node) = self.get_mut(next) {
            next_node.prev_sibling = prev;
        }
        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child == id {
                parent_node.first_child = next;
            }
            if parent_node.last_child == id {
                parent_node.last_child = prev;
            }
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Nearest ancestor that is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&p| self.element(p).is_some())
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let first = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next: first }
    }

    /// All descendants of `id` in document order (excluding `id` itself)
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).map(|(c, _)| c).collect();
        stack.reverse();

        while let Some(current) = stack.pop() {
            out.push(current);
            let first = stack.len();
            stack.extend(self.children(current).map(|(c, _)| c));
            stack[first..].reverse();
        }
        out
    }

    /// Get the first element with the given id, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&n| self.element(n).and_then(|e| e.id.as_deref()) == Some(id))
    }

    /// Elements carrying `class_name` as a whole token, in document order
    pub fn get_elements_by_class_name(&self, class_name: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&n| {
                self.element(n)
                    .is_some_and(|e| e.class_list().contains(class_name))
            })
            .collect()
    }

    /// Elements with the given tag name, in document order
    pub fn get_elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&n| {
                self.element(n)
                    .is_some_and(|e| tag_name == "*" || e.tag_name.eq_ignore_ascii_case(tag_name))
            })
            .collect()
    }

    /// Get an attribute of an element
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.element(id)?.get_attr(name)
    }

    /// Set an attribute of an element; ignored for non-elements
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.set_attr(name, value);
        }
    }

    /// Wrap a set of nodes in an element collection
    pub fn select(&mut self, ids: impl IntoIterator<Item = NodeId>) -> ElementCollection<'_> {
        ElementCollection::new(self, ids)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena index to id; `u32::MAX` is reserved for `NodeId::NONE`
fn id_for_index(index: usize) -> Option<NodeId> {
    u32::try_from(index)
        .ok()
        .filter(|&i| i != u32::MAX)
        .map(NodeId)
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}
