//! Footer and cross-reference links derived from the page tree.
//!
//! These are the values the page layer renders: the up/previous/next
//! footer for the current page, and links to other pages by module
//! identifier.

use std::fmt;

use serde::Serialize;

use crate::page::PageNode;
use crate::resolver::NavInfo;
use crate::tree::PageTree;

/// Position of a footer link relative to the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Parent page.
    Up,
    /// Preceding sibling.
    Previous,
    /// Following sibling.
    Next,
}

impl Direction {
    /// Short label for text output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Previous => "PREV",
            Self::Next => "NEXT",
        }
    }
}

/// A single footer link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    /// Where the target sits relative to the current page.
    pub direction: Direction,
    /// Upper-cased page name.
    pub label: String,
    /// Route to navigate to.
    pub target: String,
}

impl FooterLink {
    fn new(direction: Direction, page: &PageNode) -> Self {
        Self {
            direction,
            label: page.name.to_uppercase(),
            target: page.route.clone(),
        }
    }
}

/// Footer navigation for a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Link to the parent page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<FooterLink>,
    /// Link to the preceding sibling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<FooterLink>,
    /// Link to the following sibling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<FooterLink>,
}

impl Footer {
    /// Build the footer for a resolved page.
    #[must_use]
    pub fn from_nav(nav: &NavInfo<'_>) -> Self {
        Self {
            up: nav.up.map(|page| FooterLink::new(Direction::Up, page)),
            previous: nav
                .previous
                .map(|page| FooterLink::new(Direction::Previous, page)),
            next: nav.next.map(|page| FooterLink::new(Direction::Next, page)),
        }
    }

    /// Build the footer for a location path.
    ///
    /// Returns `None` if the path does not resolve, in which case no footer
    /// is shown.
    #[must_use]
    pub fn for_path(tree: &PageTree, path: &str) -> Option<Self> {
        tree.resolve(path).map(|nav| Self::from_nav(&nav))
    }

    /// Links in display order: up, previous, next.
    pub fn links(&self) -> impl Iterator<Item = &FooterLink> {
        [&self.up, &self.previous, &self.next]
            .into_iter()
            .flatten()
    }
}

/// Link to a page referenced by module identifier from page content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ModuleLink {
    /// The module was found.
    Resolved {
        /// Page name as authored.
        label: String,
        /// Route of the page.
        target: String,
    },
    /// No page has this module identifier.
    Missing {
        /// The identifier that was looked up.
        module_id: String,
    },
}

impl ModuleLink {
    /// Look up `module_id` in the tree.
    #[must_use]
    pub fn lookup(tree: &PageTree, module_id: &str) -> Self {
        match tree.find_by_module_id(module_id) {
            Some(page) => Self::Resolved {
                label: page.name.clone(),
                target: page.route.clone(),
            },
            None => Self::Missing {
                module_id: module_id.to_owned(),
            },
        }
    }

    /// Whether the module was found.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

impl fmt::Display for ModuleLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved { label, target } => write!(f, "{label} ({target})"),
            Self::Missing { module_id } => write!(f, "Error: module not found: {module_id}"),
        }
    }
}
