//! The LVtk documentation page table.

use crate::page::PageNode;

/// Route of the documentation index page.
pub const DOCUMENTATION_INDEX_ROUTE: &str = "/documentation/index";

/// Build the LVtk documentation page table.
///
/// Pages that have no written content yet share the `DocNoMatch` module.
#[must_use]
pub fn documentation_pages() -> PageNode {
    PageNode::new(DOCUMENTATION_INDEX_ROUTE, "Index", "DocIndex").with_children(vec![
        PageNode::new("/documentation/why", "Why LVtk?", "WhyLv2Lvtk"),
        PageNode::new("/documentation/overview", "Overview", "DocOverview"),
        PageNode::new(
            "/documentation/getting_started",
            "Getting Started",
            "DocNoMatch",
        ),
        PageNode::new(
            "/documentation/building_an_lv2_audio_plugin",
            "Building an LV2 Audio Plugin",
            "DocNoMatch",
        ),
        PageNode::new(
            "/documentation/building_an_lv2_ui_plugin",
            "Building an LV2 UI Plugin",
            "BuildingAnLv2UiPlugin",
        ),
        PageNode::new("/documentation/apis", "API Documentation", "DocAPI"),
        PageNode::new(
            "/documentation/coding_conventions",
            "LVtk Coding Conventions",
            "DocNoMatch",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PageTree, TreeError, ValidationPolicy};
    use pretty_assertions::assert_eq;

    fn tree() -> PageTree {
        PageTree::new(documentation_pages()).unwrap()
    }

    fn name(page: Option<&PageNode>) -> Option<&str> {
        page.map(|p| p.name.as_str())
    }

    #[test]
    fn test_table_has_eight_pages() {
        let tree = tree();

        assert_eq!(tree.page_count(), 8);
        assert_eq!(tree.root().route, DOCUMENTATION_INDEX_ROUTE);
    }

    #[test]
    fn test_resolve_overview() {
        let tree = tree();

        let nav = tree.resolve("/documentation/overview").unwrap();

        assert_eq!(nav.current.name, "Overview");
        assert_eq!(name(nav.previous), Some("Why LVtk?"));
        assert_eq!(name(nav.next), Some("Getting Started"));
        assert_eq!(name(nav.up), Some("Index"));
    }

    #[test]
    fn test_resolve_coding_conventions_is_last() {
        let tree = tree();

        let nav = tree.resolve("/documentation/coding_conventions").unwrap();

        assert_eq!(nav.current.name, "LVtk Coding Conventions");
        assert_eq!(name(nav.previous), Some("API Documentation"));
        assert!(nav.next.is_none());
        assert_eq!(name(nav.up), Some("Index"));
    }

    #[test]
    fn test_resolve_why_is_first() {
        let tree = tree();

        let nav = tree.resolve("/documentation/why").unwrap();

        assert!(nav.previous.is_none());
        assert_eq!(name(nav.next), Some("Overview"));
    }

    #[test]
    fn test_resolve_index_has_no_links() {
        let tree = tree();

        let nav = tree.resolve(DOCUMENTATION_INDEX_ROUTE).unwrap();

        assert_eq!(nav.current.name, "Index");
        assert!(nav.previous.is_none());
        assert!(nav.next.is_none());
        assert!(nav.up.is_none());
    }

    #[test]
    fn test_resolve_nonexistent_is_not_found() {
        let tree = tree();

        assert!(tree.resolve("/documentation/nonexistent").is_none());
    }

    #[test]
    fn test_placeholder_module_is_shared() {
        let tree = tree();

        assert_eq!(tree.duplicate_module_ids(), vec!["DocNoMatch"]);
        let shared = tree.shared_modules();
        assert_eq!(shared.len(), 1);
        assert_eq!(
            shared[0].routes,
            vec![
                "/documentation/getting_started",
                "/documentation/building_an_lv2_audio_plugin",
                "/documentation/coding_conventions",
            ]
        );
        assert_eq!(
            tree.find_by_module_id("DocNoMatch").unwrap().route,
            "/documentation/getting_started"
        );
    }

    #[test]
    fn test_find_ui_plugin_page() {
        let tree = tree();

        let page = tree.find_by_module_id("BuildingAnLv2UiPlugin").unwrap();

        assert_eq!(page.route, "/documentation/building_an_lv2_ui_plugin");
    }

    #[test]
    fn test_strict_policy_rejects_table() {
        let policy = ValidationPolicy {
            strict_module_ids: true,
        };

        let err = PageTree::with_policy(documentation_pages(), policy).unwrap_err();

        assert!(matches!(
            err,
            TreeError::DuplicateModuleId { ref module_id, .. } if module_id == "DocNoMatch"
        ));
    }
}
