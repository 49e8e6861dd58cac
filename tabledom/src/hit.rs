use crate::element::{Content, Element};
use crate::types::Visibility;

/// Whether pointer input can reach this element at all.
pub fn is_hit_testable(element: &Element) -> bool {
    element.hit_testable && element.visibility == Visibility::Visible
}

/// IDs of every clickable, enabled element that pointer input can reach.
///
/// A non-hit-testable ancestor shields its whole subtree.
pub fn clickable_ids(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    collect_clickable(root, &mut ids);
    ids
}

fn collect_clickable(element: &Element, ids: &mut Vec<String>) {
    if !is_hit_testable(element) {
        return;
    }

    if element.clickable && !element.disabled {
        ids.push(element.id.clone());
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            collect_clickable(child, ids);
        }
    }
}
