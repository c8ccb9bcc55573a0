//! Documentation navigation for the LVtk site.
//!
//! This crate provides:
//! - [`PageTree`]: the validated, immutable hierarchy of documentation pages
//! - Prev/next/up resolution for a location path ([`PageTree::resolve`])
//! - Lookup by module identifier for cross references
//! - [`Footer`] and [`ModuleLink`] values for the page layer to render
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lvtk_nav::{Footer, PageTree, documentation_pages};
//!
//! let tree = PageTree::new(documentation_pages())?;
//!
//! let nav = tree.resolve("/documentation/overview").expect("known page");
//! assert_eq!(nav.up.map(|p| p.name.as_str()), Some("Index"));
//!
//! let footer = Footer::from_nav(&nav);
//! assert_eq!(footer.next.unwrap().label, "GETTING STARTED");
//! # Ok(())
//! # }
//! ```

mod documentation;
mod error;
mod footer;
mod page;
mod resolver;
mod tree;

pub use documentation::{DOCUMENTATION_INDEX_ROUTE, documentation_pages};
pub use error::TreeError;
pub use footer::{Direction, Footer, FooterLink, ModuleLink};
pub use page::{PageNode, Walk};
pub use resolver::{NavInfo, find_by_module_id, resolve};
pub use tree::{PageTree, SharedModule, ValidationPolicy};
