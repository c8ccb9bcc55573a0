//! Validated, immutable page tree.
//!
//! A [`PageTree`] is built once from a literal page table and then only
//! queried. Construction checks the authoring contract that resolution
//! relies on:
//!
//! - every page has a non-empty route, name and module identifier
//! - routes are unique
//! - pages nested below the root's children carry their parent's route as a
//!   prefix (the root itself is matched exactly and never used as a prefix)
//! - every page resolves to itself, i.e. no page is shadowed by an earlier
//!   sibling whose route is a prefix of its own
//!
//! Duplicate module identifiers are tolerated unless
//! [`ValidationPolicy::strict_module_ids`] is set.

use std::collections::{HashMap, HashSet};

use crate::error::TreeError;
use crate::page::{PageNode, Walk};
use crate::resolver::{self, NavInfo};

/// Rules applied when building a [`PageTree`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject tables where two pages share a module identifier.
    pub strict_module_ids: bool,
}

/// A module identifier used by more than one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedModule<'a> {
    /// The repeated identifier.
    pub module_id: &'a str,
    /// Routes of every page using it, in pre-order. The first one is what
    /// module lookups return.
    pub routes: Vec<&'a str>,
}

/// Immutable documentation page hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTree {
    root: PageNode,
}

impl PageTree {
    /// Build a tree with the default [`ValidationPolicy`].
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if the table breaks the authoring contract.
    pub fn new(root: PageNode) -> Result<Self, TreeError> {
        Self::with_policy(root, ValidationPolicy::default())
    }

    /// Build a tree, validating it against `policy`.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeError`] found, checking fields and route
    /// structure before reachability and module identifiers.
    pub fn with_policy(root: PageNode, policy: ValidationPolicy) -> Result<Self, TreeError> {
        validate_structure(&root)?;
        validate_reachability(&root)?;

        for shared in shared_modules(&root) {
            if policy.strict_module_ids {
                return Err(TreeError::DuplicateModuleId {
                    module_id: shared.module_id.to_owned(),
                    first: shared.routes[0].to_owned(),
                    second: shared.routes[1].to_owned(),
                });
            }
            tracing::warn!(
                module = %shared.module_id,
                routes = %shared.routes.join(", "),
                "Module identifier shared by several pages, lookups resolve to the first"
            );
        }

        let tree = Self { root };
        tracing::debug!(
            root = %tree.root.route,
            pages = tree.page_count(),
            "Page tree built"
        );
        Ok(tree)
    }

    /// The root (index) page.
    #[must_use]
    pub fn root(&self) -> &PageNode {
        &self.root
    }

    /// Resolve a location path to its navigation context.
    ///
    /// # Arguments
    ///
    /// * `path` - Current location, compared literally against routes
    ///   (e.g., "/documentation/overview")
    ///
    /// # Returns
    ///
    /// `None` when no page matches; callers should render no footer.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<NavInfo<'_>> {
        let nav = resolver::resolve(&self.root, path);
        if nav.is_none() {
            tracing::debug!(path = %path, "No page matches path");
        }
        nav
    }

    /// Find a page by module identifier, first match in pre-order.
    #[must_use]
    pub fn find_by_module_id(&self, module_id: &str) -> Option<&PageNode> {
        let page = resolver::find_by_module_id(&self.root, module_id);
        if page.is_none() {
            tracing::debug!(module = %module_id, "No page has module identifier");
        }
        page
    }

    /// Walk all pages in pre-order with their depth (root is 0).
    pub fn walk(&self) -> Walk<'_> {
        self.root.walk()
    }

    /// All pages in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &PageNode> {
        self.walk().map(|(_, page)| page)
    }

    /// All routes in pre-order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|page| page.route.as_str())
    }

    /// Number of pages, root included.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.walk().count()
    }

    /// Module identifiers used by more than one page with all their routes,
    /// ordered by first use in pre-order.
    #[must_use]
    pub fn shared_modules(&self) -> Vec<SharedModule<'_>> {
        shared_modules(&self.root)
    }

    /// Module identifiers used by more than one page, ordered by first use.
    #[must_use]
    pub fn duplicate_module_ids(&self) -> Vec<&str> {
        self.shared_modules()
            .into_iter()
            .map(|shared| shared.module_id)
            .collect()
    }
}

/// Check fields, route uniqueness and route nesting.
fn validate_structure(root: &PageNode) -> Result<(), TreeError> {
    let mut routes = HashSet::new();
    check_fields(root, &mut routes)?;

    // The root is matched exactly, so its children need not extend its route
    for child in &root.children {
        validate_subtree(child, &mut routes)?;
    }
    Ok(())
}

fn validate_subtree<'a>(
    node: &'a PageNode,
    routes: &mut HashSet<&'a str>,
) -> Result<(), TreeError> {
    check_fields(node, routes)?;

    for child in &node.children {
        if !child.route.starts_with(node.route.as_str()) {
            return Err(TreeError::NotUnderParent {
                route: child.route.clone(),
                parent: node.route.clone(),
            });
        }
        validate_subtree(child, routes)?;
    }
    Ok(())
}

fn check_fields<'a>(node: &'a PageNode, routes: &mut HashSet<&'a str>) -> Result<(), TreeError> {
    if node.route.is_empty() {
        return Err(TreeError::EmptyRoute {
            name: node.name.clone(),
        });
    }
    if node.name.is_empty() {
        return Err(TreeError::EmptyName {
            route: node.route.clone(),
        });
    }
    if node.module_id.is_empty() {
        return Err(TreeError::EmptyModuleId {
            route: node.route.clone(),
        });
    }
    if !routes.insert(node.route.as_str()) {
        return Err(TreeError::DuplicateRoute {
            route: node.route.clone(),
        });
    }
    Ok(())
}

/// Every page must resolve to itself.
fn validate_reachability(root: &PageNode) -> Result<(), TreeError> {
    for (_, page) in root.walk() {
        let resolved = resolver::resolve(root, &page.route);
        if !resolved.is_some_and(|nav| std::ptr::eq(nav.current, page)) {
            return Err(TreeError::Unreachable {
                route: page.route.clone(),
                shadowed_by: shadowing_page(root, page).map(|shadow| shadow.route.clone()),
            });
        }
    }
    Ok(())
}

/// The page whose route captures the descent towards `page` without
/// containing it, following the resolver's first-prefix rule.
fn shadowing_page<'a>(root: &'a PageNode, page: &PageNode) -> Option<&'a PageNode> {
    let mut level = root;
    loop {
        let taken = level
            .children
            .iter()
            .find(|child| page.route.starts_with(child.route.as_str()))?;
        if std::ptr::eq(taken, page) {
            return None;
        }
        if !taken.walk().any(|(_, node)| std::ptr::eq(node, page)) {
            return Some(taken);
        }
        level = taken;
    }
}

fn shared_modules(root: &PageNode) -> Vec<SharedModule<'_>> {
    let mut by_module: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<SharedModule<'_>> = Vec::new();

    for (_, page) in root.walk() {
        let module_id = page.module_id.as_str();
        if let Some(&index) = by_module.get(module_id) {
            groups[index].routes.push(&page.route);
        } else {
            by_module.insert(module_id, groups.len());
            groups.push(SharedModule {
                module_id,
                routes: vec![&page.route],
            });
        }
    }

    groups.retain(|group| group.routes.len() > 1);
    groups
}
