//! Comprehensive tests for fos-dom
//!
//! Tree building, attribute reflection and element collections.

use fos_dom::{DomTree, NodeId};

fn list(items: usize) -> (DomTree, NodeId, Vec<NodeId>) {
    let mut tree = DomTree::new();
    let ul = tree.create_element("ul");
    tree.append_child(tree.root(), ul);
    let lis = (0..items)
        .map(|i| {
            let li = tree.create_element("li");
            tree.append_child(ul, li);
            tree.set_attribute(li, "class", if i % 2 == 0 { "row even" } else { "row odd" });
            li
        })
        .collect();
    (tree, ul, lis)
}

#[test]
fn test_dom_tree_creation() {
    let mut tree = DomTree::new();

    let div = tree.create_element("div");
    let span = tree.create_element("span");
    let text = tree.create_text("Hello, World!");

    tree.append_child(tree.root(), div);
    tree.append_child(div, span);
    tree.append_child(span, text);

    assert_eq!(tree.len(), 4); // root + div + span + text

    let div_node = tree.get(div).unwrap();
    assert_eq!(div_node.parent, tree.root());
    assert_eq!(div_node.first_child, span);

    let span_node = tree.get(span).unwrap();
    assert_eq!(span_node.parent, div);
    assert_eq!(span_node.first_child, text);
    assert_eq!(tree.get(text).unwrap().as_text(), Some("Hello, World!"));
}

#[test]
fn test_class_lookup_by_token() {
    let (tree, _, lis) = list(5);
    assert_eq!(tree.get_elements_by_class_name("row").len(), 5);
    assert_eq!(tree.get_elements_by_class_name("even"), vec![lis[0], lis[2], lis[4]]);
    assert!(tree.get_elements_by_class_name("ro").is_empty());
}

#[test]
fn test_collection_mutation_visible_in_tree() {
    let (mut tree, _, lis) = list(3);
    let odd = tree.get_elements_by_class_name("odd");

    tree.select(odd).each(|_, elem| elem.style.set("fontWeight", "700"));

    assert_eq!(tree.element(lis[1]).unwrap().style.get("font-weight"), Some("700"));
    assert_eq!(tree.element(lis[0]).unwrap().style.get("font-weight"), None);
    assert_eq!(
        tree.get_attribute(lis[1], "style").as_deref(),
        Some("font-weight: 700;")
    );
}

#[test]
fn test_collection_never_changes_size() {
    let (mut tree, ul, lis) = list(4);
    let mut coll = tree.select(lis.iter().copied().chain([ul]));
    assert_eq!(coll.len(), 5);

    coll.each(|_, elem| elem.class_name.clear());
    assert_eq!(coll.len(), 5);
    assert_eq!(coll[4], ul);
    assert_eq!(coll.iter().filter(|(_, e)| e.class_name.is_empty()).count(), 5);
}

#[test]
fn test_collection_index_access() {
    let (mut tree, _, lis) = list(2);
    let coll = tree.select(lis.clone());
    assert_eq!(coll.first(), Some(lis[0]));
    assert_eq!(coll.get(1), Some(lis[1]));
    assert_eq!(coll.get(2), None);
    assert_eq!(coll.element(1).map(|e| e.tag_name.as_str()), Some("li"));
}

#[test]
#[should_panic]
fn test_collection_index_out_of_bounds() {
    let (mut tree, _, lis) = list(1);
    let coll = tree.select(lis);
    let _ = coll[3];
}
