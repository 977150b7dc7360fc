//! Fixed site fragments interpolated into generated pages.
//!
//! These are inserted as-is: the renderers never inspect them beyond
//! substituting `{query}` in pharmacy search URLs.

/// Public base URL of the site, without trailing slash.
pub const SITE_BASE: &str = "https://medsaver.in";

/// Site name used in titles and Open Graph tags.
pub const SITE_NAME: &str = "MedSaver";

/// URL path under which detail pages are published.
pub const MEDICINES_PATH: &str = "/medicines/";

/// File extension of generated pages.
pub const PAGE_EXTENSION: &str = "html";

/// Savings shown in the page title when a record has no computable saving.
pub const DEFAULT_TITLE_SAVINGS: u32 = 70;

/// Placeholder replaced by the percent-encoded search term.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// An online pharmacy with a search endpoint.
pub struct Pharmacy {
    pub name: &'static str,
    /// Search URL containing [`QUERY_PLACEHOLDER`].
    pub search_url: &'static str,
}

/// Pharmacies linked from every detail page, in display order.
pub const PHARMACIES: &[Pharmacy] = &[
    Pharmacy {
        name: "Tata 1mg",
        search_url: "https://www.1mg.com/search/all?name={query}",
    },
    Pharmacy {
        name: "PharmEasy",
        search_url: "https://pharmeasy.in/search/all?name={query}",
    },
    Pharmacy {
        name: "Netmeds",
        search_url: "https://www.netmeds.com/catalogsearch/result?q={query}",
    },
    Pharmacy {
        name: "Apollo Pharmacy",
        search_url: "https://www.apollopharmacy.in/search-medicines/{query}",
    },
    Pharmacy {
        name: "Truemeds",
        search_url: "https://www.truemeds.in/search/{query}",
    },
];

/// Search endpoint used for each row of the comparison table.
pub const ALTERNATIVE_SEARCH_URL: &str = "https://www.1mg.com/search/all?name={query}";

/// Google Analytics loader, placed at the top of `<head>`.
pub const ANALYTICS_LOADER: &str = r#"<script async src="https://www.googletagmanager.com/gtag/js?id=G-MS7K2Q9PLX"></script>
<script>
window.dataLayer = window.dataLayer || [];
function gtag(){dataLayer.push(arguments);}
gtag('js', new Date());
gtag('config', 'G-MS7K2Q9PLX');
</script>
"#;

/// AdSense loader, placed at the end of `<head>`.
pub const ADS_LOADER: &str = r#"<script async src="https://pagead2.googlesyndication.com/pagead/js/adsbygoogle.js?client=ca-pub-4417206153826390" crossorigin="anonymous"></script>
"#;

/// Stylesheet shared by detail and index pages.
pub const PAGE_STYLE: &str = r"<style>
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:system-ui,-apple-system,'Segoe UI',Roboto,sans-serif;background:#f4f7fb;color:#1f2937;line-height:1.6}
a{color:#0f766e}
.container{max-width:880px;margin:0 auto;padding:24px 16px 48px}
.site-header{display:flex;justify-content:space-between;align-items:center;margin-bottom:20px}
.site-header .logo{font-weight:700;font-size:1.25rem;text-decoration:none;color:#0f766e}
.card{background:#fff;border-radius:14px;box-shadow:0 2px 10px rgba(15,23,42,.06);padding:24px;margin-bottom:20px}
.badge{display:inline-block;font-size:.75rem;font-weight:600;padding:3px 10px;border-radius:999px;margin-right:6px}
.badge-category{background:#e0f2fe;color:#0369a1}
.badge-generic{background:#ecfdf5;color:#047857}
h1{font-size:1.9rem;margin:10px 0 6px}
h2{font-size:1.3rem;margin-bottom:12px}
.usage{color:#4b5563;margin:10px 0 16px}
.price-box{display:inline-block;background:#fff7ed;border:1px solid #fed7aa;border-radius:10px;padding:10px 16px}
.price-box .label{font-size:.75rem;text-transform:uppercase;color:#9a3412;display:block}
.price-box .value{font-size:1.35rem;font-weight:700;color:#c2410c}
.savings-banner{background:linear-gradient(90deg,#059669,#10b981);color:#fff;border-radius:14px;padding:18px 24px;margin-bottom:20px;font-size:1.05rem}
.savings-banner strong{font-size:1.4rem}
table{width:100%;border-collapse:collapse}
th,td{text-align:left;padding:10px 8px;border-bottom:1px solid #e5e7eb}
th{font-size:.8rem;text-transform:uppercase;color:#6b7280}
.btn{display:inline-block;background:#0f766e;color:#fff;text-decoration:none;border-radius:8px;padding:6px 14px;font-size:.85rem}
.pharmacy-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(160px,1fr));gap:12px}
.pharmacy-grid a{display:block;text-align:center;border:1px solid #d1d5db;border-radius:10px;padding:12px;text-decoration:none;font-weight:600}
.faq-item{border-bottom:1px solid #e5e7eb;padding:12px 0}
.faq-item:last-child{border-bottom:none}
.faq-item h3{font-size:1rem;margin-bottom:4px}
.cta{text-align:center}
.cta .btn{font-size:1rem;padding:12px 24px}
.category{margin-bottom:28px}
.chips{display:flex;flex-wrap:wrap;gap:8px}
.chip{display:inline-block;background:#fff;border:1px solid #cbd5e1;border-radius:999px;padding:6px 14px;text-decoration:none;font-size:.9rem}
.chip:hover{border-color:#0f766e}
.disclaimer{font-size:.8rem;color:#6b7280;margin-top:24px;text-align:center}
</style>
";

/// File name of the detail page for `slug`.
///
/// # Examples
///
/// ```
/// use medsite_render::page_file_name;
///
/// assert_eq!(page_file_name("dolo-650"), "dolo-650.html");
/// ```
pub fn page_file_name(slug: &str) -> String {
    format!("{slug}.{PAGE_EXTENSION}")
}

/// Absolute public URL of the detail page for `slug`.
pub fn page_url(slug: &str) -> String {
    format!("{SITE_BASE}{MEDICINES_PATH}{}", page_file_name(slug))
}

/// Absolute public URL of the category index page.
pub fn index_url() -> String {
    format!("{SITE_BASE}{MEDICINES_PATH}")
}

/// Fill a search URL template with an already-encoded query.
pub(crate) fn search_url(template: &str, encoded_query: &str) -> String {
    template.replace(QUERY_PLACEHOLDER, encoded_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("dolo-650"), "https://medsaver.in/medicines/dolo-650.html");
    }

    #[test]
    fn test_search_url_substitutes_query() {
        assert_eq!(
            search_url(ALTERNATIVE_SEARCH_URL, "Dolo%20650"),
            "https://www.1mg.com/search/all?name=Dolo%20650"
        );
    }

    #[test]
    fn test_every_pharmacy_template_has_placeholder() {
        for pharmacy in PHARMACIES {
            assert!(
                pharmacy.search_url.contains(QUERY_PLACEHOLDER),
                "{} has no query placeholder",
                pharmacy.name
            );
        }
    }
}
