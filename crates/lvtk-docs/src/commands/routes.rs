//! `lvtk-docs routes` command implementation.

use clap::Args;
use lvtk_nav::PageTree;

use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Also print each page's name and module identifier.
    #[arg(short, long)]
    long: bool,
}

impl RoutesArgs {
    /// Execute the routes command.
    pub(crate) fn execute(self, tree: &PageTree, output: &Output) {
        for line in route_lines(tree, self.long) {
            output.line(&line);
        }
    }
}

/// One line per page in pre-order, indented two spaces per level.
fn route_lines(tree: &PageTree, long: bool) -> Vec<String> {
    tree.walk()
        .map(|(depth, page)| {
            let indent = "  ".repeat(depth);
            if long {
                format!("{indent}{}  {} [{}]", page.route, page.name, page.module_id)
            } else {
                format!("{indent}{}", page.route)
            }
        })
        .collect()
}
