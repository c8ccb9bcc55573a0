//! Documentation page nodes.

use serde::{Deserialize, Serialize};

/// One documentation page within the navigation hierarchy.
///
/// A node owns its children outright. Child order is meaningful: it defines
/// which pages are "previous" and "next" to each other in the footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    /// Absolute route path (e.g., "/documentation/overview").
    pub route: String,
    /// Display label.
    pub name: String,
    /// Stable identifier used by content cross references.
    #[serde(rename = "module")]
    pub module_id: String,
    /// Child pages in navigation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageNode>,
}

impl PageNode {
    /// Create a leaf page.
    pub fn new(
        route: impl Into<String>,
        name: impl Into<String>,
        module_id: impl Into<String>,
    ) -> Self {
        Self {
            route: route.into(),
            name: name.into(),
            module_id: module_id.into(),
            children: Vec::new(),
        }
    }

    /// Replace the child pages.
    #[must_use]
    pub fn with_children(mut self, children: Vec<PageNode>) -> Self {
        self.children = children;
        self
    }

    /// Walk this subtree in pre-order, yielding each node with its depth
    /// relative to `self` (which is depth 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Pre-order iterator over a page subtree.
///
/// Created by [`PageNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a PageNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a PageNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reversed so the first child is popped first
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
