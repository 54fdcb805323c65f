mod node;

pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.children.iter().find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.children
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// Path from the root down to the element with `id`, inclusive.
pub fn find_path<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in &root.children {
        if let Some(mut path) = find_path(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// Collect IDs of elements whose attribute `name` equals `value`, in document order.
pub fn collect_by_attribute(root: &Element, name: &str, value: &str) -> Vec<String> {
    let mut result = Vec::new();
    collect_recursive(root, name, value, &mut result);
    result
}

fn collect_recursive(element: &Element, name: &str, value: &str, result: &mut Vec<String>) {
    if element.get_attr(name) == Some(value) {
        result.push(element.id.clone());
    }
    for child in &element.children {
        collect_recursive(child, name, value, result);
    }
}
