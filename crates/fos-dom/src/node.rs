//! DOM Node - Compact representation
//!
//! Nodes link to each other through `NodeId` indices into the tree arena
//! instead of pointers, so the tree can hand out plain ids to collections.

use crate::{ClassList, InlineStyle, NodeId};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::detached(NodeData::Element(ElementData::new(tag_name)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Text(TextData { content: content.into() }))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
///
/// `class_name` is kept as the raw attribute string. Token views are built
/// on demand with [`ElementData::class_list`], so class manipulation that
/// works on the string (regex substitution, trimming) sees exactly what
/// the page wrote.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag_name: String,
    /// `id` attribute
    pub id: Option<String>,
    /// `class` attribute, verbatim
    pub class_name: String,
    /// Inline `style` declarations
    pub style: InlineStyle,
}

impl ElementData {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Whitespace-separated class tokens
    pub fn class_list(&self) -> ClassList<'_> {
        ClassList::new(&self.class_name)
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.clone(),
            "class" => Some(self.class_name.clone()),
            "style" if !self.style.is_empty() => Some(self.style.css_text()),
            _ => None,
        }
    }

    /// Set an attribute
    ///
    /// Only the attributes the element models are stored; anything else is
    /// ignored.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match name {
            "id" => self.id = Some(value.to_string()),
            "class" => self.class_name = value.to_string(),
            "style" => self.style.set_css_text(value),
            other => tracing::trace!("Ignoring unmodelled attribute: {}", other),
        }
    }
}

/// Text node data
#[derive(Debug, Clone)]
pub struct TextData {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_tag_is_lowercased() {
        let node = Node::element("DIV");
        assert_eq!(node.as_element().map(|e| e.tag_name.as_str()), Some("div"));
        assert!(node.is_element());
        assert!(!node.is_text());
    }

    #[test]
    fn test_attr_roundtrip() {
        let mut elem = ElementData::new("p");
        elem.set_attr("id", "intro");
        elem.set_attr("class", "lead  muted");
        elem.set_attr("style", "color: red; margin-top: 4px");

        assert_eq!(elem.get_attr("id").as_deref(), Some("intro"));
        assert_eq!(elem.get_attr("class").as_deref(), Some("lead  muted"));
        assert_eq!(elem.style.get("margin-top"), Some("4px"));
        assert_eq!(elem.get_attr("data-x"), None);
    }

    #[test]
    fn test_text_node() {
        let node = Node::text("hello");
        assert_eq!(node.as_text(), Some("hello"));
        assert!(node.as_element().is_none());
    }
}
