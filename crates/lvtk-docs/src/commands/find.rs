//! `lvtk-docs find` command implementation.

use clap::Args;
use lvtk_nav::{ModuleLink, PageTree};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the find command.
#[derive(Args)]
pub(crate) struct FindArgs {
    /// Module identifier (e.g., `DocOverview`).
    module: String,

    /// Print the link as JSON.
    #[arg(long)]
    json: bool,
}

impl FindArgs {
    /// Execute the find command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::ModuleNotFound` if no page has the identifier.
    pub(crate) fn execute(self, tree: &PageTree, output: &Output) -> Result<(), CliError> {
        let link = ModuleLink::lookup(tree, &self.module);

        if self.json {
            output.line(&serde_json::to_string_pretty(&link)?);
        } else if link.is_resolved() {
            output.line(&link.to_string());
        }

        require_resolved(link).map(|_| ())
    }
}

/// A missing module fails the command even after its JSON was printed.
fn require_resolved(link: ModuleLink) -> Result<ModuleLink, CliError> {
    match link {
        ModuleLink::Missing { module_id } => Err(CliError::ModuleNotFound(module_id)),
        resolved @ ModuleLink::Resolved { .. } => Ok(resolved),
    }
}
