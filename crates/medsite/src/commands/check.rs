//! `medsite check` command implementation.

use std::path::PathBuf;

use clap::Args;
use medsite_build::{BuildConfig, SiteBuilder};
use medsite_render::group_by_category;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Host document containing the medicine dataset (default: index.html).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let mut config = BuildConfig::default();
        if let Some(source) = self.source {
            config.source = source;
        }
        output.info(&format!("Source: {}", config.source.display()));

        let dataset = SiteBuilder::new(config).load()?;
        let groups = group_by_category(dataset.entries());

        for group in &groups {
            output.info(&format!("  {}: {}", group.label, group.entries.len()));
        }
        output.success(&format!(
            "Found {} medicines in {} categories",
            dataset.len(),
            groups.len()
        ));
        Ok(())
    }
}
