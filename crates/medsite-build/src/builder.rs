//! Site builder: the only part of medsite that touches the filesystem.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use medsite_dataset::{Dataset, DatasetError, load_dataset};
use medsite_render::{
    SitemapError, build_sitemap, group_by_category, page_file_name, render_index_page,
    render_medicine_page,
};

use crate::config::BuildConfig;

/// Error returned by the site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to read {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Dataset(#[from] DatasetError),

    #[error("{0}")]
    Sitemap(#[from] SitemapError),
}

/// Summary of a completed build.
#[derive(Debug)]
pub struct BuildReport {
    /// Records loaded from the host document.
    pub records: usize,
    /// Distinct detail page files left on disk. Less than `records` when
    /// slugs collide or a slug shares its file with the index page.
    pub pages_written: usize,
    /// Distinct categories on the index page.
    pub categories: usize,
    pub index_path: PathBuf,
    pub sitemap_path: PathBuf,
}

/// Builds the static medicine pages described by a [`BuildConfig`].
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Read the host document and load its dataset without writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ReadSource`] if the host document cannot be
    /// read and [`BuildError::Dataset`] if the dataset cannot be loaded.
    pub fn load(&self) -> Result<Dataset, BuildError> {
        let path = &self.config.source;
        let text = fs::read_to_string(path).map_err(|source| BuildError::ReadSource {
            path: path.clone(),
            source,
        })?;
        let dataset = load_dataset(&text, &self.config.marker)?;
        tracing::info!(records = dataset.len(), source = %path.display(), "Loaded dataset");
        Ok(dataset)
    }

    /// Run the full build.
    ///
    /// The dataset is loaded completely before the first write, so a
    /// missing marker or malformed literal leaves the filesystem untouched.
    /// Writes are not transactional: a failure while writing pages keeps
    /// the pages already written and skips the index and sitemap.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] encountered.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let dataset = self.load()?;
        self.write_site(&dataset)
    }

    /// Write pages, index and sitemap for an already loaded dataset.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] encountered.
    pub fn write_site(&self, dataset: &Dataset) -> Result<BuildReport, BuildError> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| BuildError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        let index_path = self.config.index_path();
        let mut page_paths = HashSet::new();
        for entry in dataset.entries() {
            let path = output_dir.join(page_file_name(&entry.slug));
            if path == index_path {
                tracing::warn!(
                    brand = %entry.record.brand,
                    path = %path.display(),
                    "Detail page will be overwritten by the index page"
                );
            }
            write_file(&path, &render_medicine_page(entry))?;
            page_paths.insert(path);
        }
        let pages_written = page_paths.len() - usize::from(page_paths.contains(&index_path));
        tracing::info!(
            pages = pages_written,
            records = dataset.len(),
            dir = %output_dir.display(),
            "Wrote medicine pages"
        );

        write_file(&index_path, &render_index_page(dataset.entries()))?;
        let categories = group_by_category(dataset.entries()).len();
        tracing::info!(categories, path = %index_path.display(), "Wrote index page");

        let sitemap_path = self.config.sitemap.clone();
        let sitemap = build_sitemap(&dataset.slugs(), self.config.run_date)?;
        write_file(&sitemap_path, &sitemap)?;
        tracing::info!(
            urls = dataset.len() + 3,
            path = %sitemap_path.display(),
            "Wrote sitemap"
        );

        Ok(BuildReport {
            records: dataset.len(),
            pages_written,
            categories,
            index_path,
            sitemap_path,
        })
    }
}

/// Write `content` to `path`, replacing any existing file.
fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    fs::write(path, content).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}
