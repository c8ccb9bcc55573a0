//! Page table validation errors.

/// A page table that breaks the authoring contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A page has an empty route.
    #[error("Page '{name}' has an empty route")]
    EmptyRoute {
        /// Display name of the offending page.
        name: String,
    },
    /// A page has an empty display name.
    #[error("Page {route} has an empty name")]
    EmptyName {
        /// Route of the offending page.
        route: String,
    },
    /// A page has an empty module identifier.
    #[error("Page {route} has an empty module identifier")]
    EmptyModuleId {
        /// Route of the offending page.
        route: String,
    },
    /// Two pages share a route.
    #[error("Duplicate route: {route}")]
    DuplicateRoute {
        /// The repeated route.
        route: String,
    },
    /// A nested page's route is not prefixed by its parent's route.
    #[error("Route {route} is not under its parent route {parent}")]
    NotUnderParent {
        /// Route of the nested page.
        route: String,
        /// Route of its parent.
        parent: String,
    },
    /// A page cannot be resolved by its own route.
    #[error(
        "Route {route} is shadowed by {} and cannot be resolved",
        shadowed_by.as_deref().unwrap_or("an earlier page")
    )]
    Unreachable {
        /// Route of the unreachable page.
        route: String,
        /// Route of the earlier page whose prefix captures the lookup.
        shadowed_by: Option<String>,
    },
    /// Two pages share a module identifier (strict policy only).
    #[error("Module '{module_id}' is used by both {first} and {second}")]
    DuplicateModuleId {
        /// The repeated identifier.
        module_id: String,
        /// Route of the page visited first in pre-order.
        first: String,
        /// Route of the later page.
        second: String,
    },
}
