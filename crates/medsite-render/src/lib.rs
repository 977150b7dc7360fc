//! HTML and sitemap rendering for medsite.
//!
//! Every function here is a pure transformation from derived dataset
//! entries to document text; writing files is left to the caller.
//!
//! - [`render_medicine_page`]: one standalone detail page per entry
//! - [`render_index_page`]: category-grouped browse page
//! - [`build_sitemap`]: sitemap XML for all generated URLs

pub mod assets;
mod html;
mod index;
mod page;
mod sitemap;

pub use assets::{page_file_name, page_url};
pub use index::{CategoryGroup, group_by_category, render_index_page};
pub use page::render_medicine_page;
pub use sitemap::{SitemapError, build_sitemap};
