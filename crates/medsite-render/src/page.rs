//! Medicine detail page template.
//!
//! Produces a complete standalone HTML document for one dataset entry:
//! SEO head (title, description, canonical, Open Graph, JSON-LD), header
//! card, optional savings banner, alternatives table, pharmacy links, FAQ
//! and a call to action back to the site root.

use std::fmt::Write;

use medsite_dataset::{Entry, encode_for_url, slugify, strip_parenthetical};
use serde_json::json;

use crate::assets::{
    ADS_LOADER, ALTERNATIVE_SEARCH_URL, ANALYTICS_LOADER, DEFAULT_TITLE_SAVINGS, PAGE_STYLE,
    PHARMACIES, SITE_BASE, SITE_NAME, index_url, page_url, search_url,
};
use crate::html::{escape, escape_script_json};

/// Heading used for entries without a category.
pub(crate) const UNCATEGORIZED: &str = "Other";

/// Text fields shared by the `<head>` tags and the JSON-LD block.
struct PageMeta {
    title: String,
    description: String,
    canonical: String,
}

impl PageMeta {
    fn new(entry: &Entry) -> Self {
        Self {
            title: page_title(entry),
            description: page_description(entry),
            canonical: page_url(&entry.slug),
        }
    }
}

/// Render the detail page for one entry.
pub fn render_medicine_page(entry: &Entry) -> String {
    let meta = PageMeta::new(entry);
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    render_head(&mut html, entry, &meta);
    render_structured_data(&mut html, entry, &meta);
    html.push_str(PAGE_STYLE);
    html.push_str(ANALYTICS_LOADER);
    html.push_str(ADS_LOADER);
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");

    render_site_header(&mut html);
    render_header_card(&mut html, entry);
    render_savings_banner(&mut html, entry);
    render_comparison(&mut html, entry);
    render_pharmacy_links(&mut html, entry);
    render_faq(&mut html, entry);
    render_call_to_action(&mut html);

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Category heading for an entry, with a fallback for empty codes.
pub(crate) fn category_name(entry: &Entry) -> &str {
    if entry.category_label.is_empty() {
        UNCATEGORIZED
    } else {
        &entry.category_label
    }
}

/// Fragment id of a category heading on the index page.
pub(crate) fn category_anchor(name: &str) -> String {
    let anchor = slugify(name);
    if anchor.is_empty() {
        slugify(UNCATEGORIZED)
    } else {
        anchor
    }
}

fn page_title(entry: &Entry) -> String {
    let record = &entry.record;
    // Presentation default only; the entry keeps its computed 0.
    let shown = if entry.savings_percent > 0 {
        entry.savings_percent
    } else {
        DEFAULT_TITLE_SAVINGS
    };
    format!(
        "{} ({}) Price & Generic Alternatives - Save up to {shown}% | {SITE_NAME}",
        record.brand, record.generic
    )
}

fn page_description(entry: &Entry) -> String {
    let record = &entry.record;
    let mut description = format!("{} ({})", record.brand, record.generic);
    if record.price_range.is_empty() {
        description.push('.');
    } else {
        let _ = write!(description, " costs {}.", record.price_range);
    }
    if let Some(alt) = entry.cheapest() {
        if alt.price.is_empty() {
            let _ = write!(description, " Cheapest alternative: {}.", alt.name);
        } else {
            let _ = write!(
                description,
                " Cheapest alternative: {} at {}.",
                alt.name, alt.price
            );
        }
    }
    description.push_str(" Compare prices across online pharmacies.");
    description
}

fn page_keywords(entry: &Entry) -> String {
    let brand = &entry.record.brand;
    let generic = &entry.record.generic;
    format!(
        "{brand}, {generic}, {brand} price, {brand} alternative, {generic} generic, cheaper medicine"
    )
}

fn render_head(html: &mut String, entry: &Entry, meta: &PageMeta) {
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(&meta.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape(&meta.description)
    );
    let _ = writeln!(
        html,
        "<meta name=\"keywords\" content=\"{}\">",
        escape(&page_keywords(entry))
    );
    let _ = writeln!(
        html,
        "<link rel=\"canonical\" href=\"{}\">",
        escape(&meta.canonical)
    );

    html.push_str("<meta property=\"og:type\" content=\"article\">\n");
    let _ = writeln!(
        html,
        "<meta property=\"og:title\" content=\"{}\">",
        escape(&meta.title)
    );
    let _ = writeln!(
        html,
        "<meta property=\"og:description\" content=\"{}\">",
        escape(&meta.description)
    );
    let _ = writeln!(
        html,
        "<meta property=\"og:url\" content=\"{}\">",
        escape(&meta.canonical)
    );
    let _ = writeln!(
        html,
        "<meta property=\"og:site_name\" content=\"{}\">",
        escape(SITE_NAME)
    );
}

/// JSON-LD: a medical web page about the drug, with a Home > category >
/// record breadcrumb trail.
fn render_structured_data(html: &mut String, entry: &Entry, meta: &PageMeta) {
    let record = &entry.record;
    let category = category_name(entry);
    let category_url = format!("{}#{}", index_url(), category_anchor(category));

    let data = json!({
        "@context": "https://schema.org",
        "@type": "MedicalWebPage",
        "name": meta.title,
        "description": meta.description,
        "url": meta.canonical,
        "about": {
            "@type": "Drug",
            "name": record.brand,
            "nonProprietaryName": record.generic,
        },
        "breadcrumb": {
            "@type": "BreadcrumbList",
            "itemListElement": [
                {
                    "@type": "ListItem",
                    "position": 1,
                    "name": "Home",
                    "item": format!("{SITE_BASE}/"),
                },
                {
                    "@type": "ListItem",
                    "position": 2,
                    "name": category,
                    "item": category_url,
                },
                {
                    "@type": "ListItem",
                    "position": 3,
                    "name": record.brand,
                    "item": meta.canonical,
                },
            ],
        },
    });

    let _ = writeln!(
        html,
        "<script type=\"application/ld+json\">\n{}\n</script>",
        escape_script_json(&data.to_string())
    );
}

fn render_site_header(html: &mut String) {
    html.push_str("<header class=\"site-header\">\n");
    let _ = writeln!(
        html,
        "<a class=\"logo\" href=\"/\">{}</a>",
        escape(SITE_NAME)
    );
    html.push_str("<a href=\"index.html\">All medicines</a>\n");
    html.push_str("</header>\n");
}

fn render_header_card(html: &mut String, entry: &Entry) {
    let record = &entry.record;
    html.push_str("<div class=\"card\">\n");
    if !entry.category_label.is_empty() {
        let _ = writeln!(
            html,
            "<span class=\"badge badge-category\">{}</span>",
            escape(&entry.category_label)
        );
    }
    let _ = writeln!(html, "<h1>{}</h1>", escape(&record.brand));
    let _ = writeln!(
        html,
        "<span class=\"badge badge-generic\">Generic: {}</span>",
        escape(&record.generic)
    );
    if !record.usage.is_empty() {
        let _ = writeln!(html, "<p class=\"usage\">{}</p>", escape(&record.usage));
    }
    if !record.price_range.is_empty() {
        html.push_str("<div class=\"price-box\">\n");
        html.push_str("<span class=\"label\">Brand price</span>\n");
        let _ = writeln!(
            html,
            "<span class=\"value\">{}</span>",
            escape(&record.price_range)
        );
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
}

fn render_savings_banner(html: &mut String, entry: &Entry) {
    if entry.savings_percent == 0 {
        return;
    }
    let _ = write!(
        html,
        "<div class=\"savings-banner\">Save <strong>{}%</strong>",
        entry.savings_percent
    );
    if let Some(alt) = entry.cheapest() {
        let _ = write!(html, " by switching to {}", escape(&alt.name));
        if !alt.price.is_empty() {
            let _ = write!(html, " at {}", escape(&alt.price));
        }
    }
    html.push_str("</div>\n");
}

fn render_comparison(html: &mut String, entry: &Entry) {
    let alternatives = &entry.record.alternatives;
    if alternatives.is_empty() {
        return;
    }
    html.push_str("<div class=\"card\">\n");
    let _ = writeln!(
        html,
        "<h2>Cheaper alternatives to {}</h2>",
        escape(&entry.record.brand)
    );
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Medicine</th><th>Price</th><th></th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for alt in alternatives {
        let url = search_url(
            ALTERNATIVE_SEARCH_URL,
            &encode_for_url(strip_parenthetical(&alt.name)),
        );
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td><a class=\"btn\" href=\"{}\" \
             target=\"_blank\" rel=\"nofollow noopener\">Check price</a></td></tr>",
            escape(&alt.name),
            escape(&alt.price),
            escape(&url),
        );
    }
    html.push_str("</tbody>\n</table>\n</div>\n");
}

fn render_pharmacy_links(html: &mut String, entry: &Entry) {
    let brand = &entry.record.brand;
    let query = encode_for_url(brand);
    html.push_str("<div class=\"card\">\n");
    let _ = writeln!(html, "<h2>Buy {} online</h2>", escape(brand));
    html.push_str("<div class=\"pharmacy-grid\">\n");
    for pharmacy in PHARMACIES {
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"nofollow noopener\">{}</a>",
            escape(&search_url(pharmacy.search_url, &query)),
            escape(pharmacy.name),
        );
    }
    html.push_str("</div>\n</div>\n");
}

/// Question and answer pairs for the FAQ block, in display order.
fn faq_entries(entry: &Entry) -> Vec<(String, String)> {
    let record = &entry.record;
    let brand = &record.brand;
    let generic = &record.generic;
    let mut faq = Vec::with_capacity(5);

    let uses = if record.usage.is_empty() {
        format!("{brand} contains {generic}. Ask your doctor or pharmacist about its uses.")
    } else {
        record.usage.clone()
    };
    faq.push((format!("What is {brand} used for?"), uses));

    faq.push((
        format!("What is the generic name of {brand}?"),
        format!(
            "The active ingredient in {brand} is {generic}. Medicines with the same \
             ingredient, strength and dosage form work the same way."
        ),
    ));

    let cost = if record.price_range.is_empty() {
        format!("The price of {brand} varies between pharmacies. Use the links above to compare.")
    } else {
        format!(
            "{brand} typically costs {}. Prices vary slightly between pharmacies.",
            record.price_range
        )
    };
    faq.push((format!("How much does {brand} cost?"), cost));

    if let Some(alt) = entry.cheapest() {
        let mut answer = if alt.price.is_empty() {
            format!("{} is a cheaper alternative containing {generic}", alt.name)
        } else {
            format!("{} is available for {}", alt.name, alt.price)
        };
        if entry.savings_percent > 0 {
            let _ = write!(
                answer,
                ", about {}% less than {brand}.",
                entry.savings_percent
            );
        } else {
            answer.push('.');
        }
        faq.push((
            format!("What is the cheapest alternative to {brand}?"),
            answer,
        ));
    }

    faq.push((
        "Are generic medicines as effective as branded ones?".to_owned(),
        "Yes. Generic medicines contain the same active ingredient in the same \
         strength and must meet the same quality standards as branded medicines."
            .to_owned(),
    ));

    faq
}

fn render_faq(html: &mut String, entry: &Entry) {
    html.push_str("<div class=\"card\">\n");
    html.push_str("<h2>Frequently asked questions</h2>\n");
    for (question, answer) in faq_entries(entry) {
        html.push_str("<div class=\"faq-item\">\n");
        let _ = writeln!(html, "<h3>{}</h3>", escape(&question));
        let _ = writeln!(html, "<p>{}</p>", escape(&answer));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
}

fn render_call_to_action(html: &mut String) {
    html.push_str("<div class=\"card cta\">\n");
    html.push_str("<h2>Looking for another medicine?</h2>\n");
    html.push_str("<a class=\"btn\" href=\"/\">Search all medicines</a>\n");
    html.push_str("</div>\n");
    html.push_str(
        "<p class=\"disclaimer\">Prices are indicative. Always consult a doctor \
         before switching medicines.</p>\n",
    );
}

#[cfg(test)]
mod tests {
    use medsite_dataset::{Alternative, MedicineRecord};
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(brand: &str, price_range: &str, alternatives: &[(&str, &str)]) -> Entry {
        Entry::derive(MedicineRecord {
            brand: brand.to_owned(),
            generic: "Paracetamol".to_owned(),
            category: "fever-pain".to_owned(),
            usage: "Fever and mild to moderate pain".to_owned(),
            price_range: price_range.to_owned(),
            alternatives: alternatives
                .iter()
                .map(|(name, price)| Alternative {
                    name: (*name).to_owned(),
                    price: (*price).to_owned(),
                })
                .collect(),
        })
    }

    fn dolo() -> Entry {
        entry(
            "Dolo 650",
            "₹100–₹120",
            &[("Paracetamol 650 (Jan Aushadhi)", "₹40"), ("Calpol 650", "₹60")],
        )
    }

    fn structured_data(html: &str) -> serde_json::Value {
        let start = html.find("<script type=\"application/ld+json\">").unwrap();
        let body = &html[start..];
        let open = body.find('\n').unwrap() + 1;
        let close = body.find("</script>").unwrap();
        serde_json::from_str(&body[open..close]).unwrap()
    }

    #[test]
    fn render_page_is_complete_document() {
        let html = render_medicine_page(&dolo());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("<h1>Dolo 650</h1>"));
        assert!(html.contains("Generic: Paracetamol"));
        assert!(html.contains("<span class=\"badge badge-category\">Fever &amp; Pain</span>"));
        assert!(html.contains("<span class=\"value\">₹100–₹120</span>"));
        assert!(html.contains(PAGE_STYLE));
        assert!(html.contains(ANALYTICS_LOADER));
    }

    #[test]
    fn render_page_title_uses_computed_savings() {
        let html = render_medicine_page(&dolo());
        assert!(html.contains(
            "<title>Dolo 650 (Paracetamol) Price &amp; Generic Alternatives - Save up to 60% | MedSaver</title>"
        ));
    }

    #[test]
    fn render_page_title_defaults_savings_display() {
        let page = entry("Crocin", "₹30", &[]);
        assert_eq!(page.savings_percent, 0);
        let html = render_medicine_page(&page);
        assert!(html.contains("Save up to 70% | MedSaver</title>"));
    }

    #[test]
    fn render_page_meta_tags() {
        let html = render_medicine_page(&dolo());
        assert!(html.contains(
            "<meta name=\"description\" content=\"Dolo 650 (Paracetamol) costs ₹100–₹120. \
             Cheapest alternative: Paracetamol 650 (Jan Aushadhi) at ₹40. \
             Compare prices across online pharmacies.\">"
        ));
        assert!(html.contains(
            "<link rel=\"canonical\" href=\"https://medsaver.in/medicines/dolo-650.html\">"
        ));
        assert!(html.contains(
            "<meta property=\"og:url\" content=\"https://medsaver.in/medicines/dolo-650.html\">"
        ));
        assert!(html.contains("<meta name=\"keywords\" content=\"Dolo 650, Paracetamol,"));
    }

    #[test]
    fn render_page_description_without_alternative() {
        let html = render_medicine_page(&entry("Crocin", "₹30", &[]));
        assert!(html.contains(
            "content=\"Crocin (Paracetamol) costs ₹30. Compare prices across online pharmacies.\""
        ));
    }

    #[test]
    fn render_page_structured_data() {
        let data = structured_data(&render_medicine_page(&dolo()));
        assert_eq!(data["@type"], "MedicalWebPage");
        assert_eq!(data["about"]["name"], "Dolo 650");
        assert_eq!(data["about"]["nonProprietaryName"], "Paracetamol");

        let crumbs = data["breadcrumb"]["itemListElement"].as_array().unwrap();
        let names: Vec<_> = crumbs.iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Home", "Fever & Pain", "Dolo 650"]);
        assert_eq!(crumbs[0]["item"], "https://medsaver.in/");
        assert_eq!(crumbs[1]["item"], "https://medsaver.in/medicines/#fever-pain");
        assert_eq!(
            crumbs[2]["item"],
            "https://medsaver.in/medicines/dolo-650.html"
        );
    }

    #[test]
    fn render_page_structured_data_cannot_close_script() {
        let html = render_medicine_page(&entry("</script><b>x", "₹30", &[]));
        let data = structured_data(&html);
        assert_eq!(data["about"]["name"], "</script><b>x");
    }

    #[test]
    fn render_page_savings_banner_names_cheapest() {
        let html = render_medicine_page(&dolo());
        assert!(html.contains(
            "<div class=\"savings-banner\">Save <strong>60%</strong> by switching to \
             Paracetamol 650 (Jan Aushadhi) at ₹40</div>"
        ));
    }

    #[test]
    fn render_page_no_banner_without_savings() {
        let html = render_medicine_page(&entry("Brand", "₹10", &[("Pricier", "₹50")]));
        assert!(!html.contains("savings-banner\">"));
    }

    #[test]
    fn render_page_comparison_rows() {
        let html = render_medicine_page(&dolo());
        assert!(html.contains("<h2>Cheaper alternatives to Dolo 650</h2>"));
        assert!(html.contains(
            "<tr><td>Paracetamol 650 (Jan Aushadhi)</td><td>₹40</td><td><a class=\"btn\" \
             href=\"https://www.1mg.com/search/all?name=Paracetamol%20650\""
        ));
        assert!(html.contains(
            "<tr><td>Calpol 650</td><td>₹60</td><td><a class=\"btn\" \
             href=\"https://www.1mg.com/search/all?name=Calpol%20650\""
        ));
        assert_eq!(html.matches("<tr><td>").count(), 2);
    }

    #[test]
    fn render_page_without_alternatives() {
        let html = render_medicine_page(&entry("Crocin", "₹30", &[]));
        assert!(!html.contains("<tbody>"));
        assert!(!html.contains("Cheaper alternatives to"));
        assert!(!html.contains("What is the cheapest alternative"));
        assert!(!html.contains("savings-banner\">"));
        assert!(html.contains("What is Crocin used for?"));
    }

    #[test]
    fn render_page_pharmacy_links_encode_brand() {
        let html = render_medicine_page(&entry("Combiflam & Co", "₹30", &[]));
        for pharmacy in PHARMACIES {
            let url = search_url(pharmacy.search_url, "Combiflam%20%26%20Co");
            assert!(html.contains(&format!("<a href=\"{}\"", escape(&url))));
        }
    }

    #[test]
    fn render_page_faq() {
        let html = render_medicine_page(&dolo());
        assert!(html.contains("<h3>What is Dolo 650 used for?</h3>\n<p>Fever and mild to moderate pain</p>"));
        assert!(html.contains("<h3>How much does Dolo 650 cost?</h3>\n<p>Dolo 650 typically costs ₹100–₹120."));
        assert!(html.contains(
            "<h3>What is the cheapest alternative to Dolo 650?</h3>\n\
             <p>Paracetamol 650 (Jan Aushadhi) is available for ₹40, about 60% less than Dolo 650.</p>"
        ));
        assert_eq!(html.matches("<div class=\"faq-item\">").count(), 5);
    }

    #[test]
    fn render_page_optional_fields_omitted() {
        let mut record = dolo().record;
        record.category = String::new();
        record.usage = String::new();
        record.price_range = String::new();
        let html = render_medicine_page(&Entry::derive(record));
        assert!(!html.contains("badge-category\">"));
        assert!(!html.contains("<p class=\"usage\">"));
        assert!(!html.contains("<div class=\"price-box\">"));
        assert!(html.contains("https://medsaver.in/medicines/#other"));
    }

    #[test]
    fn render_page_escapes_record_text() {
        let html = render_medicine_page(&entry("<Brand>", "₹30", &[]));
        assert!(html.contains("<h1>&lt;Brand&gt;</h1>"));
        assert!(html.contains("<title>&lt;Brand&gt; (Paracetamol)"));
        assert!(!html.contains("<h1><Brand>"));
    }

    #[test]
    fn render_page_ends_with_call_to_action() {
        let html = render_medicine_page(&dolo());
        let cta = html.find("<a class=\"btn\" href=\"/\">").unwrap();
        let faq = html.find("Frequently asked questions").unwrap();
        assert!(cta > faq);
    }

    #[test]
    fn render_page_is_deterministic() {
        assert_eq!(render_medicine_page(&dolo()), render_medicine_page(&dolo()));
    }
}
