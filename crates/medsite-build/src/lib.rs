//! Static site build pipeline for medsite.
//!
//! [`SiteBuilder`] runs the whole batch: read the host document, load the
//! dataset, write one page per medicine, the category index, and finally
//! the sitemap. Any fatal error stops the run before the next write.

mod builder;
mod config;

pub use builder::{BuildError, BuildReport, SiteBuilder};
pub use config::{BuildConfig, DEFAULT_MARKER};
