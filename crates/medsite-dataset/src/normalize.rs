//! Lenient-to-strict rewriting of the extracted literal.
//!
//! The host document declares its records as a script literal: line
//! comments, trailing commas and unquoted keys are all allowed there but
//! not in JSON. [`normalize_literal`] removes exactly those three
//! differences; anything else (single-quoted strings, computed values) is
//! left for [`parse_records`] to reject.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DatasetError;
use crate::record::MedicineRecord;

/// `//` to end of line.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());

/// A comma followed only by whitespace before `]` or `}`.
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[\]}])").unwrap());

/// An identifier in key position: after `{` or `,`, directly before `:`.
static BARE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([{,]\s*)([A-Za-z_$][A-Za-z0-9_$]*)(\s*:)").unwrap()
});

/// Rewrite a script array literal into strict JSON text.
///
/// Applies three global passes, in order:
/// 1. strip line comments (`//` through end of line)
/// 2. drop commas that directly precede `]` or `}`
/// 3. quote bare identifier keys
///
/// Each pass runs over the output of the previous one. No pass looks at
/// string boundaries: `//` inside a value (a URL, say) truncates that line,
/// and `, word:` inside a value gets quoted like a key, which leaves the
/// text invalid for [`parse_records`].
///
/// # Examples
///
/// ```
/// use medsite_dataset::normalize_literal;
///
/// let json = normalize_literal("[{ brand: \"Dolo\", }, ] // end");
/// assert_eq!(json, "[{ \"brand\": \"Dolo\" } ] ");
/// ```
pub fn normalize_literal(span: &str) -> String {
    let without_comments = LINE_COMMENT.replace_all(span, "");
    let without_trailing = TRAILING_COMMA.replace_all(&without_comments, "${1}");
    BARE_KEY
        .replace_all(&without_trailing, "${1}\"${2}\"${3}")
        .into_owned()
}

/// Parse normalized JSON text into records, in source order.
///
/// # Errors
///
/// Returns [`DatasetError::MalformedLiteral`] with the parser's diagnostic
/// if the text is not a JSON array of record objects.
pub fn parse_records(json: &str) -> Result<Vec<MedicineRecord>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_strips_line_comments() {
        let input = "[\n  // first record\n  {\"a\": 1} // trailing note\n]";
        assert_eq!(normalize_literal(input), "[\n  \n  {\"a\": 1} \n]");
    }

    #[test]
    fn test_normalize_removes_trailing_commas() {
        assert_eq!(
            normalize_literal("[{\"a\": [1, 2,],}, ]"),
            "[{\"a\": [1, 2]} ]"
        );
    }

    #[test]
    fn test_normalize_removes_trailing_comma_across_lines() {
        assert_eq!(
            normalize_literal("[\n  {\"a\": 1},\n]"),
            "[\n  {\"a\": 1}\n]"
        );
    }

    #[test]
    fn test_normalize_quotes_bare_keys() {
        assert_eq!(
            normalize_literal("[{ brand: \"X\", priceRange: \"₹5\" }]"),
            "[{ \"brand\": \"X\", \"priceRange\": \"₹5\" }]"
        );
    }

    #[test]
    fn test_normalize_quotes_keys_on_new_lines() {
        assert_eq!(
            normalize_literal("{\n  name: \"A\",\n  price: \"₹1\"\n}"),
            "{\n  \"name\": \"A\",\n  \"price\": \"₹1\"\n}"
        );
    }

    #[test]
    fn test_normalize_leaves_quoted_keys_alone() {
        let input = "[{\"brand\": \"X\"}]";
        assert_eq!(normalize_literal(input), input);
    }

    #[test]
    fn test_normalize_comment_pass_runs_first() {
        // The comma before the comment becomes trailing once the comment is gone.
        assert_eq!(
            normalize_literal("[{ a: 1 }, // last\n]"),
            "[{ \"a\": 1 } \n]"
        );
    }

    #[test]
    fn test_normalize_quotes_key_like_text_inside_strings() {
        let json = normalize_literal("[{ usage: \"Fever, cold: mild\" }]");
        assert_eq!(json, "[{ \"usage\": \"Fever, \"cold\": mild\" }]");
        assert!(matches!(
            parse_records(&json),
            Err(DatasetError::MalformedLiteral(_))
        ));
    }

    #[test]
    fn test_parse_records_defaults_optional_fields() {
        let records = parse_records(r#"[{"brand": "Dolo 650", "generic": "Paracetamol"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].brand, "Dolo 650");
        assert!(records[0].category.is_empty());
        assert!(records[0].price_range.is_empty());
        assert!(records[0].alternatives.is_empty());
    }

    #[test]
    fn test_parse_records_keeps_alternative_order() {
        let json = r#"[{"brand": "B", "generic": "G", "alternatives": [
            {"name": "Pricier", "price": "₹50"},
            {"name": "Cheaper", "price": "₹5"}
        ]}]"#;
        let records = parse_records(json).unwrap();
        let names: Vec<_> = records[0].alternatives.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Pricier", "Cheaper"]);
    }

    #[test]
    fn test_parse_records_rejects_missing_brand() {
        let err = parse_records(r#"[{"generic": "G"}]"#).unwrap_err();
        assert!(err.to_string().contains("brand"));
    }

    #[test]
    fn test_parse_records_rejects_invalid_json() {
        assert!(matches!(
            parse_records("[{brand: 1}]"),
            Err(DatasetError::MalformedLiteral(_))
        ));
    }
}
