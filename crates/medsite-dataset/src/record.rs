//! Medicine records and their derived values.

use serde::Deserialize;

use crate::category::category_label;
use crate::derive::{extract_price, savings_percent, slugify};

/// One medicine entry as written in the host document.
///
/// Keys are camelCase in the source (`priceRange`). Only `brand` and
/// `generic` are required; missing optional fields default to empty.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    /// Brand name shown as the page heading.
    pub brand: String,
    /// Active ingredient.
    pub generic: String,
    /// Short category code, see [`category_label`].
    #[serde(default)]
    pub category: String,
    /// Free-text description of what the medicine treats.
    #[serde(default)]
    pub usage: String,
    /// Free-text price, e.g. `"₹120–₹150"`.
    #[serde(default)]
    pub price_range: String,
    /// Cheaper substitutes. The first one is the representative cheapest
    /// option; the list is never re-sorted.
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

/// A cheaper substitute for a branded medicine.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Alternative {
    pub name: String,
    #[serde(default)]
    pub price: String,
}

/// A record together with its derived fields.
///
/// Built once by [`Entry::derive`] and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Entry {
    pub record: MedicineRecord,
    /// URL slug derived from the brand name.
    pub slug: String,
    /// Display label for the record's category.
    pub category_label: String,
    /// Amount extracted from `price_range`, 0 if none.
    pub brand_price: u64,
    /// Amount extracted from the first alternative's price, 0 if none.
    pub cheapest_price: u64,
    /// Savings of the first alternative over the brand, 0 if not cheaper.
    pub savings_percent: u32,
}

impl Entry {
    /// Compute derived fields for a record.
    pub fn derive(record: MedicineRecord) -> Self {
        let slug = slugify(&record.brand);
        let category_label = category_label(&record.category).to_owned();
        let brand_price = extract_price(&record.price_range);
        let cheapest_price = record
            .alternatives
            .first()
            .map_or(0, |alt| extract_price(&alt.price));
        let savings_percent = savings_percent(brand_price, cheapest_price);

        Self {
            record,
            slug,
            category_label,
            brand_price,
            cheapest_price,
            savings_percent,
        }
    }

    /// The representative cheapest alternative, if any.
    pub fn cheapest(&self) -> Option<&Alternative> {
        self.record.alternatives.first()
    }
}

/// All entries of a run, in source order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    /// Derive entries for every record.
    ///
    /// Every record is kept. A brand with no ASCII letters or digits gets an
    /// empty slug and is logged at warn level; its page is still written,
    /// as `.html`. Distinct brands with the same slug are both kept; the
    /// later one overwrites the earlier one's page when written.
    pub fn from_records(records: Vec<MedicineRecord>) -> Self {
        let entries = records
            .into_iter()
            .map(Entry::derive)
            .inspect(|entry| {
                if entry.slug.is_empty() {
                    tracing::warn!(brand = %entry.record.brand, "Record has an empty slug");
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slugs of all entries, in source order.
    pub fn slugs(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.slug.as_str()).collect()
    }
}
