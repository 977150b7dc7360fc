//! Category code to display label lookup.

/// Known category codes and their display labels.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("fever-pain", "Fever & Pain"),
    ("antibiotics", "Antibiotics"),
    ("diabetes", "Diabetes"),
    ("blood-pressure", "Blood Pressure"),
    ("heart", "Heart Health"),
    ("cholesterol", "Cholesterol"),
    ("acidity", "Acidity & Gastric"),
    ("allergy", "Allergy"),
    ("cough-cold", "Cough & Cold"),
    ("asthma", "Asthma & Respiratory"),
    ("thyroid", "Thyroid"),
    ("vitamins", "Vitamins & Supplements"),
    ("skin", "Skin Care"),
    ("mental-health", "Mental Health"),
    ("antifungal", "Antifungal"),
    ("antiviral", "Antiviral"),
    ("womens-health", "Women's Health"),
    ("eye-care", "Eye Care"),
    ("kidney", "Kidney & Urinary"),
    ("liver", "Liver Health"),
];

/// Display label for a category code.
///
/// Codes missing from the table are returned unchanged.
///
/// # Examples
///
/// ```
/// use medsite_dataset::category_label;
///
/// assert_eq!(category_label("fever-pain"), "Fever & Pain");
/// assert_eq!(category_label("unknown-code"), "unknown-code");
/// ```
pub fn category_label(code: &str) -> &str {
    CATEGORY_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(code, |&(_, label)| label)
}
