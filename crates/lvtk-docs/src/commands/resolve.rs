//! `lvtk-docs resolve` command implementation.

use clap::Args;
use lvtk_nav::{Footer, PageTree};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Location path (e.g., /documentation/overview).
    path: String,

    /// Print the footer as JSON (`null` when the path is unknown).
    #[arg(long)]
    json: bool,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// An unknown path is not an error: it simply has no footer.
    pub(crate) fn execute(self, tree: &PageTree, output: &Output) -> Result<(), CliError> {
        if self.json {
            output.line(&footer_json(tree, &self.path)?);
            return Ok(());
        }

        let Some(nav) = tree.resolve(&self.path) else {
            output.warning(&format!("No navigation for {}", self.path));
            return Ok(());
        };

        output.highlight(&nav.current.name);
        if nav.is_root() {
            output.info("Index page: no up, previous or next links");
        }
        for line in footer_lines(&Footer::from_nav(&nav)) {
            output.line(&line);
        }
        Ok(())
    }
}

/// Pretty JSON for the footer at `path`, `null` when nothing matches.
fn footer_json(tree: &PageTree, path: &str) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&Footer::for_path(tree, path))?)
}

/// Format footer links one per line as `DIRECTION  LABEL  ROUTE`.
fn footer_lines(footer: &Footer) -> Vec<String> {
    footer
        .links()
        .map(|link| {
            format!(
                "{:<4}  {}  {}",
                link.direction.as_str(),
                link.label,
                link.target
            )
        })
        .collect()
}
