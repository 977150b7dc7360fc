//! Build configuration.
//!
//! The build reads no configuration file; [`BuildConfig::default`] is the
//! fixed project layout and callers override individual fields.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

/// Marker comment that precedes the dataset literal in the host document.
pub const DEFAULT_MARKER: &str = "// MEDICINE_DATABASE";

/// Paths and run parameters for one build.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Host document containing the dataset literal.
    pub source: PathBuf,
    /// Marker preceding the dataset literal.
    pub marker: String,
    /// Directory receiving one page per medicine and the index page.
    pub output_dir: PathBuf,
    /// Index page file name, relative to `output_dir`.
    pub index_file: String,
    /// Sitemap path.
    pub sitemap: PathBuf,
    /// Date written as `lastmod` for every sitemap entry.
    pub run_date: NaiveDate,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("index.html"),
            marker: DEFAULT_MARKER.to_owned(),
            output_dir: PathBuf::from("medicines"),
            index_file: "index.html".to_owned(),
            sitemap: PathBuf::from("sitemap.xml"),
            run_date: Local::now().date_naive(),
        }
    }
}

impl BuildConfig {
    /// Full path of the index page.
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(&self.index_file)
    }
}
