//! Sitemap generation.
//!
//! Emits a `urlset` document in the sitemaps.org 0.9 namespace: three fixed
//! entries for the static pages followed by one entry per detail page, all
//! stamped with the same run date.

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::assets::{SITE_BASE, page_url};

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Static pages as (path, changefreq, priority).
const STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("/", "weekly", "1.0"),
    ("/about.html", "monthly", "0.5"),
    ("/privacy.html", "yearly", "0.3"),
];

const MEDICINE_CHANGEFREQ: &str = "monthly";
const MEDICINE_PRIORITY: &str = "0.9";

/// Error writing sitemap XML.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    #[error("failed to write sitemap XML")]
    Write(#[from] std::io::Error),

    #[error("sitemap XML is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

struct UrlEntry<'a> {
    loc: String,
    changefreq: &'a str,
    priority: &'a str,
}

/// Build the sitemap for the given detail page slugs.
///
/// `run_date` is written as `lastmod` on every entry, so the caller decides
/// the timestamp once per run.
///
/// # Errors
///
/// Returns [`SitemapError`] if the XML writer fails.
pub fn build_sitemap(slugs: &[&str], run_date: NaiveDate) -> Result<String, SitemapError> {
    let lastmod = run_date.format("%Y-%m-%d").to_string();

    let static_entries = STATIC_PAGES
        .iter()
        .map(|&(path, changefreq, priority)| UrlEntry {
            loc: format!("{SITE_BASE}{path}"),
            changefreq,
            priority,
        });
    let medicine_entries = slugs.iter().map(|slug| UrlEntry {
        loc: page_url(slug),
        changefreq: MEDICINE_CHANGEFREQ,
        priority: MEDICINE_PRIORITY,
    });

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer.write_event(Event::Start(urlset))?;

    for entry in static_entries.chain(medicine_entries) {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.loc)?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        write_text_element(&mut writer, "changefreq", entry.changefreq)?;
        write_text_element(&mut writer, "priority", entry.priority)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

/// Write `<name>text</name>` with the text escaped.
fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
