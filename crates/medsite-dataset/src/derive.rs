//! Derived per-record values.
//!
//! Pure functions with no I/O. They are applied once per record when the
//! dataset is built (see [`Entry`](crate::Entry)) and reused by the
//! renderers for URL building.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Characters `encodeURIComponent` leaves untouched: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// First digit run directly after the rupee sign.
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"₹(\d+)").unwrap());

/// Build a URL slug from a brand name.
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into one hyphen and trims hyphens from both ends.
///
/// # Examples
///
/// ```
/// use medsite_dataset::slugify;
///
/// assert_eq!(slugify("Dolo 650"), "dolo-650");
/// assert_eq!(slugify("  A--B  "), "a-b");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(brand: &str) -> String {
    let mut slug = String::with_capacity(brand.len());
    let mut pending_hyphen = false;

    for c in brand.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Percent-encode text for use as a query-string component.
pub fn encode_for_url(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT_ENCODE_SET).to_string()
}

/// Extract the integer amount from a price string such as `"₹120–₹150"`.
///
/// Takes the first digit run immediately preceded by `₹`. Returns 0 when
/// there is none or it does not fit in a `u64`.
pub fn extract_price(text: &str) -> u64 {
    PRICE_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Percentage saved by buying the alternative instead of the brand.
///
/// Zero unless both prices are positive and the brand costs more; otherwise
/// `(brand - alt) / brand * 100`, rounded half up.
///
/// # Examples
///
/// ```
/// use medsite_dataset::savings_percent;
///
/// assert_eq!(savings_percent(100, 40), 60);
/// assert_eq!(savings_percent(40, 100), 0);
/// assert_eq!(savings_percent(0, 40), 0);
/// ```
pub fn savings_percent(brand_price: u64, alt_price: u64) -> u32 {
    if brand_price == 0 || alt_price == 0 || brand_price <= alt_price {
        return 0;
    }
    let saved = u128::from(brand_price - alt_price);
    let brand = u128::from(brand_price);
    // round(saved * 100 / brand) in integer arithmetic
    let percent = (saved * 200 + brand) / (brand * 2);
    u32::try_from(percent).unwrap_or(100)
}

/// Drop a trailing parenthetical suffix from an alternative's name.
///
/// `"Paracetamol 650 (Jan Aushadhi)"` becomes `"Paracetamol 650"`. Names
/// that do not end in `)` are returned trimmed but otherwise unchanged.
pub fn strip_parenthetical(name: &str) -> &str {
    let trimmed = name.trim();
    if !trimmed.ends_with(')') {
        return trimmed;
    }
    match trimmed.find('(') {
        Some(open) => trimmed[..open].trim_end(),
        None => trimmed,
    }
}
