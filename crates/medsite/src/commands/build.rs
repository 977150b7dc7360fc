//! `medsite build` command implementation.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use medsite_build::{BuildConfig, SiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args, Default)]
pub(crate) struct BuildArgs {
    /// Host document containing the medicine dataset (default: index.html).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Directory for generated medicine pages (default: medicines/).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Sitemap output path (default: sitemap.xml).
    #[arg(long)]
    sitemap: Option<PathBuf>,

    /// Date written as lastmod in the sitemap, YYYY-MM-DD (default: today).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    /// Apply command-line overrides to the default configuration.
    fn into_config(self) -> BuildConfig {
        let mut config = BuildConfig::default();
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(sitemap) = self.sitemap {
            config.sitemap = sitemap;
        }
        if let Some(date) = self.date {
            config.run_date = date;
        }
        config
    }

    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = self.into_config();

        output.info(&format!("Source: {}", config.source.display()));
        output.info(&format!("Output: {}", config.output_dir.display()));

        let report = SiteBuilder::new(config).build()?;

        output.success(&format!(
            "Generated {} medicine pages in {} categories",
            report.pages_written, report.categories
        ));
        output.info(&format!("Index: {}", report.index_path.display()));
        output.info(&format!("Sitemap: {}", report.sitemap_path.display()));
        Ok(())
    }
}
