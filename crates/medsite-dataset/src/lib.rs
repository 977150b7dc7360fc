//! Medicine dataset loading for medsite.
//!
//! The dataset lives as an array literal inside a host document, right after
//! a marker comment. Loading happens in three stages, each usable on its own:
//!
//! 1. [`locate_literal`] isolates the literal's text span by bracket depth
//! 2. [`normalize_literal`] rewrites the lenient literal into strict JSON
//! 3. [`parse_records`] deserializes the JSON into [`MedicineRecord`]s
//!
//! [`load_dataset`] runs all three and attaches the derived fields
//! (slug, category label, prices, savings) to every record.

mod category;
mod derive;
mod error;
mod extract;
mod normalize;
mod record;

pub use category::category_label;
pub use derive::{encode_for_url, extract_price, savings_percent, slugify, strip_parenthetical};
pub use error::DatasetError;
pub use extract::locate_literal;
pub use normalize::{normalize_literal, parse_records};
pub use record::{Alternative, Dataset, Entry, MedicineRecord};

/// Extract, normalize, parse and derive the dataset embedded in `text`.
///
/// # Errors
///
/// Returns [`DatasetError::MissingMarker`] if `marker` does not occur in
/// `text`, [`DatasetError::MissingLiteral`] or
/// [`DatasetError::UnbalancedLiteral`] if no complete literal follows it, and
/// [`DatasetError::MalformedLiteral`] if the normalized literal is not valid
/// JSON.
pub fn load_dataset(text: &str, marker: &str) -> Result<Dataset, DatasetError> {
    let span = locate_literal(text, marker)?;
    let json = normalize_literal(span);
    let records = parse_records(&json)?;
    Ok(Dataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = r#"<script>
// MEDICINE_DATABASE
const medicines = [
  // fever
  { brand: "Dolo 650", generic: "Paracetamol", category: "fever-pain",
    usage: "Fever and mild pain", priceRange: "₹30–₹35",
    alternatives: [ { name: "Paracetamol 650 (Jan Aushadhi)", price: "₹10" }, ], },
  { brand: "Crocin", generic: "Paracetamol", category: "fever-pain", usage: "Fever" },
];
renderAll(medicines);
</script>"#;

    #[test]
    fn test_load_dataset_end_to_end() {
        let dataset = load_dataset(HOST, "// MEDICINE_DATABASE").unwrap();
        assert_eq!(dataset.len(), 2);

        let dolo = &dataset.entries()[0];
        assert_eq!(dolo.slug, "dolo-650");
        assert_eq!(dolo.category_label, "Fever & Pain");
        assert_eq!(dolo.brand_price, 30);
        assert_eq!(dolo.cheapest_price, 10);
        assert_eq!(dolo.savings_percent, 67);

        let crocin = &dataset.entries()[1];
        assert!(crocin.record.alternatives.is_empty());
        assert_eq!(crocin.savings_percent, 0);
    }

    #[test]
    fn test_load_dataset_missing_marker() {
        let err = load_dataset("const medicines = [];", "// MEDICINE_DATABASE").unwrap_err();
        assert!(matches!(err, DatasetError::MissingMarker { .. }));
    }

    #[test]
    fn test_load_dataset_malformed_literal() {
        let host = "// MEDICINE_DATABASE\nconst m = [{ brand: 'single quotes' }];";
        let err = load_dataset(host, "// MEDICINE_DATABASE").unwrap_err();
        assert!(matches!(err, DatasetError::MalformedLiteral(_)));
        assert!(err.to_string().starts_with("malformed data literal"));
    }
}
