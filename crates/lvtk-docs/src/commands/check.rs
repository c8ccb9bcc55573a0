//! `lvtk-docs check` command implementation.
//!
//! The page table is validated while it is loaded; this command reports
//! where it came from and anything worth fixing that validation tolerates.

use clap::Args;
use lvtk_config::Config;
use lvtk_nav::PageTree;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Fail when pages share a module identifier.
    #[arg(long)]
    deny_warnings: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Check` if `--deny-warnings` is set and warnings
    /// were reported.
    pub(crate) fn execute(
        self,
        config: &Config,
        tree: &PageTree,
        output: &Output,
    ) -> Result<(), CliError> {
        let report = CheckReport::new(config, tree);

        output.info(&report.source);
        output.success(&report.summary);
        for warning in &report.warnings {
            output.warning(warning);
        }

        report.verdict(self.deny_warnings)
    }
}

/// Lines printed by `check`, and whether they fail the run.
#[derive(Debug)]
struct CheckReport {
    source: String,
    summary: String,
    warnings: Vec<String>,
}

impl CheckReport {
    fn new(config: &Config, tree: &PageTree) -> Self {
        let source = match &config.config_path {
            Some(path) if !config.uses_builtin_pages() => {
                format!("Page table: {}", path.display())
            }
            _ => "Page table: built-in documentation index".to_owned(),
        };

        let summary = format!(
            "Page table is valid: {} pages under {}",
            tree.page_count(),
            tree.root().route
        );

        let warnings = tree
            .shared_modules()
            .into_iter()
            .map(|shared| {
                format!(
                    "Module '{}' is shared by {}; lookups resolve to {}",
                    shared.module_id,
                    shared.routes.join(", "),
                    shared.routes[0]
                )
            })
            .collect();

        Self {
            source,
            summary,
            warnings,
        }
    }

    /// Warnings only fail the run when `deny_warnings` is set.
    fn verdict(&self, deny_warnings: bool) -> Result<(), CliError> {
        if deny_warnings && !self.warnings.is_empty() {
            return Err(CliError::Check(format!(
                "{} shared module identifier(s)",
                self.warnings.len()
            )));
        }
        Ok(())
    }
}
