//! Category-grouped index page.

use std::collections::HashMap;
use std::fmt::Write;

use medsite_dataset::Entry;

use crate::assets::{ANALYTICS_LOADER, PAGE_STYLE, SITE_NAME, index_url, page_file_name};
use crate::html::escape;
use crate::page::{category_anchor, category_name};

/// Entries sharing one category label.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    /// Display label of the category.
    pub label: &'a str,
    /// Entries in source order.
    pub entries: Vec<&'a Entry>,
}

/// Group entries by category label.
///
/// Groups appear in the order their category is first seen while scanning
/// `entries`; within a group, entries keep source order.
pub fn group_by_category(entries: &[Entry]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let label = category_name(entry);
        let position = *positions.entry(label).or_insert_with(|| {
            groups.push(CategoryGroup {
                label,
                entries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].entries.push(entry);
    }

    groups
}

/// Render the browse page listing every entry under its category.
///
/// Links are relative to the index file, which lives next to the detail
/// pages.
pub fn render_index_page(entries: &[Entry]) -> String {
    let groups = group_by_category(entries);
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        html,
        "<title>All Medicines - Compare Prices &amp; Generic Alternatives | {}</title>",
        escape(SITE_NAME)
    );
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"Browse {} medicines by category and find cheaper generic alternatives.\">",
        entries.len()
    );
    let _ = writeln!(
        html,
        "<link rel=\"canonical\" href=\"{}\">",
        escape(&index_url())
    );
    html.push_str(PAGE_STYLE);
    html.push_str(ANALYTICS_LOADER);
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");

    html.push_str("<header class=\"site-header\">\n");
    let _ = writeln!(
        html,
        "<a class=\"logo\" href=\"/\">{}</a>",
        escape(SITE_NAME)
    );
    html.push_str("</header>\n");

    html.push_str("<h1>All Medicines</h1>\n");
    let _ = writeln!(
        html,
        "<p class=\"usage\">{} medicines with cheaper generic alternatives.</p>",
        entries.len()
    );

    for group in &groups {
        let _ = writeln!(
            html,
            "<section class=\"category\" id=\"{}\">",
            escape(&category_anchor(group.label))
        );
        let _ = writeln!(html, "<h2>{}</h2>", escape(group.label));
        html.push_str("<div class=\"chips\">\n");
        for entry in &group.entries {
            let _ = writeln!(
                html,
                "<a class=\"chip\" href=\"{}\">{}</a>",
                escape(&page_file_name(&entry.slug)),
                escape(&entry.record.brand)
            );
        }
        html.push_str("</div>\n</section>\n");
    }

    html.push_str("<div class=\"card cta\">\n");
    html.push_str("<a class=\"btn\" href=\"/\">Back to search</a>\n");
    html.push_str("</div>\n");
    html.push_str("</div>\n</body>\n</html>\n");
    html
}
