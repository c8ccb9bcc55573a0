//! Prev/next/up resolution over a page hierarchy.
//!
//! Resolution walks down from the root. At each level the children are
//! scanned in declaration order: an exact route match ends the search, and
//! the first child whose route is a literal prefix of the query is descended
//! into. Sibling order, not prefix length, decides between overlapping
//! prefixes.

use crate::page::PageNode;

/// Navigation context of a resolved page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavInfo<'a> {
    /// The page the query path resolved to.
    pub current: &'a PageNode,
    /// Sibling immediately before `current`, if any.
    pub previous: Option<&'a PageNode>,
    /// Sibling immediately after `current`, if any.
    pub next: Option<&'a PageNode>,
    /// Parent of `current`; `None` for the root.
    pub up: Option<&'a PageNode>,
}

impl<'a> NavInfo<'a> {
    /// Navigation for the root page: no siblings and no parent.
    #[must_use]
    pub fn root(root: &'a PageNode) -> Self {
        Self {
            current: root,
            previous: None,
            next: None,
            up: None,
        }
    }

    /// Navigation for the child at `index` of `parent`.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn child_of(parent: &'a PageNode, index: usize) -> Option<Self> {
        let siblings = &parent.children;
        let current = siblings.get(index)?;

        Some(Self {
            current,
            previous: index.checked_sub(1).and_then(|i| siblings.get(i)),
            next: siblings.get(index + 1),
            up: Some(parent),
        })
    }

    /// Whether `current` is the root of the tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.up.is_none()
    }
}

/// Resolve `path` to its navigation context below `root`.
///
/// Returns `None` when the path neither equals nor is prefixed by any route
/// reached during the descent. That is an expected outcome (e.g., a typed-in
/// URL) and callers render no navigation for it.
#[must_use]
pub fn resolve<'a>(root: &'a PageNode, path: &str) -> Option<NavInfo<'a>> {
    if root.route == path {
        return Some(NavInfo::root(root));
    }

    for (index, child) in root.children.iter().enumerate() {
        if child.route == path {
            return NavInfo::child_of(root, index);
        }
        if path.starts_with(child.route.as_str()) {
            return resolve(child, path);
        }
    }

    None
}

/// Find the first page in pre-order whose module identifier is `module_id`.
#[must_use]
pub fn find_by_module_id<'a>(root: &'a PageNode, module_id: &str) -> Option<&'a PageNode> {
    root.walk()
        .map(|(_, node)| node)
        .find(|node| node.module_id == module_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nested() -> PageNode {
        PageNode::new("/guide/index", "Guide", "Guide").with_children(vec![
            PageNode::new("/guide/intro", "Intro", "Intro"),
            PageNode::new("/guide/plugins", "Plugins", "Plugins").with_children(vec![
                PageNode::new("/guide/plugins/audio", "Audio", "Audio"),
                PageNode::new("/guide/plugins/ui", "UI", "Ui"),
                PageNode::new("/guide/plugins/presets", "Presets", "Presets"),
            ]),
            PageNode::new("/guide/faq", "FAQ", "Faq"),
        ])
    }

    fn route(node: Option<&PageNode>) -> Option<&str> {
        node.map(|n| n.route.as_str())
    }

    #[test]
    fn test_resolve_root_has_no_links() {
        let root = nested();

        let nav = resolve(&root, "/guide/index").unwrap();

        assert_eq!(nav.current.route, "/guide/index");
        assert!(nav.previous.is_none());
        assert!(nav.next.is_none());
        assert!(nav.up.is_none());
        assert!(nav.is_root());
    }

    #[test]
    fn test_resolve_middle_child() {
        let root = nested();

        let nav = resolve(&root, "/guide/plugins").unwrap();

        assert_eq!(nav.current.name, "Plugins");
        assert_eq!(route(nav.previous), Some("/guide/intro"));
        assert_eq!(route(nav.next), Some("/guide/faq"));
        assert_eq!(route(nav.up), Some("/guide/index"));
    }

    #[test]
    fn test_resolve_nested_child_links_to_parent() {
        let root = nested();

        let nav = resolve(&root, "/guide/plugins/ui").unwrap();

        assert_eq!(nav.current.module_id, "Ui");
        assert_eq!(route(nav.previous), Some("/guide/plugins/audio"));
        assert_eq!(route(nav.next), Some("/guide/plugins/presets"));
        assert_eq!(route(nav.up), Some("/guide/plugins"));
        assert!(!nav.is_root());
    }

    #[test]
    fn test_resolve_first_and_last_nested_children() {
        let root = nested();

        let first = resolve(&root, "/guide/plugins/audio").unwrap();
        let last = resolve(&root, "/guide/plugins/presets").unwrap();

        assert!(first.previous.is_none());
        assert_eq!(route(first.next), Some("/guide/plugins/ui"));
        assert_eq!(route(last.previous), Some("/guide/plugins/ui"));
        assert!(last.next.is_none());
    }

    #[test]
    fn test_resolve_unknown_path_returns_none() {
        let root = nested();

        assert!(resolve(&root, "/guide/missing").is_none());
        assert!(resolve(&root, "/elsewhere").is_none());
        assert!(resolve(&root, "").is_none());
    }

    #[test]
    fn test_resolve_unknown_path_below_prefix_returns_none() {
        let root = nested();

        // Descends into "/guide/plugins" and finds nothing there
        assert!(resolve(&root, "/guide/plugins/missing").is_none());
    }

    #[test]
    fn test_resolve_first_prefix_sibling_wins() {
        let root = PageNode::new("/", "Home", "Home").with_children(vec![
            PageNode::new("/api", "API", "Api"),
            PageNode::new("/apis", "APIs", "Apis"),
        ]);

        // "/apis" starts with "/api", which is declared first
        assert!(resolve(&root, "/apis").is_none());
        assert_eq!(resolve(&root, "/api").unwrap().current.name, "API");
    }

    #[test]
    fn test_resolve_exact_match_checked_before_later_prefix() {
        let root = PageNode::new("/", "Home", "Home").with_children(vec![
            PageNode::new("/apis", "APIs", "Apis"),
            PageNode::new("/api", "API", "Api"),
        ]);

        assert_eq!(resolve(&root, "/apis").unwrap().current.name, "APIs");
        assert_eq!(resolve(&root, "/api").unwrap().current.name, "API");
    }

    #[test]
    fn test_child_of_out_of_bounds_returns_none() {
        let root = nested();

        assert!(NavInfo::child_of(&root, 3).is_none());
    }

    #[test]
    fn test_find_by_module_id_nested() {
        let root = nested();

        let page = find_by_module_id(&root, "Presets").unwrap();

        assert_eq!(page.route, "/guide/plugins/presets");
    }

    #[test]
    fn test_find_by_module_id_matches_root() {
        let root = nested();

        assert_eq!(find_by_module_id(&root, "Guide").unwrap().route, "/guide/index");
    }

    #[test]
    fn test_find_by_module_id_prefers_preorder_first() {
        let root = PageNode::new("/", "Home", "Home").with_children(vec![
            PageNode::new("/a", "A", "A")
                .with_children(vec![PageNode::new("/a/x", "Deep", "Shared")]),
            PageNode::new("/b", "Shallow", "Shared"),
        ]);

        assert_eq!(find_by_module_id(&root, "Shared").unwrap().route, "/a/x");
    }

    #[test]
    fn test_find_by_module_id_missing_returns_none() {
        let root = nested();

        assert!(find_by_module_id(&root, "Nope").is_none());
    }
}
