//! Single-pass descriptive statistics over the full record set.

use super::store::{CATEGORY_FIELD, RATING_FIELD, Record, VALUE_FIELD};
use serde::Serialize;
use service_core::error::AppError;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, PartialEq)]
pub struct StatsSummary {
    pub total_records: usize,
    pub categories: BTreeMap<String, usize>,
    pub total_value_usd: f64,
    pub average_rating: f64,
}

/// Compute per-category counts, total value and average rating.
///
/// Numeric fields are parsed strictly here: a malformed value in a stored
/// record fails the whole call. This is deliberately stricter than the
/// query filter, which treats unparseable ratings as 0; the source table is
/// expected to be numerically clean, and silently skewed totals would be
/// worse than a visible error.
pub fn stats(records: &[Record]) -> Result<StatsSummary, AppError> {
    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_value = 0f64;
    let mut rating_sum = 0i64;

    for record in records {
        let category = record
            .get(CATEGORY_FIELD)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());
        *categories.entry(category).or_insert(0) += 1;

        total_value += parse_field::<f64>(record, VALUE_FIELD)?;
        rating_sum += parse_field::<i64>(record, RATING_FIELD)?;
    }

    let average_rating = if records.is_empty() {
        0.0
    } else {
        round2(rating_sum as f64 / records.len() as f64)
    };

    Ok(StatsSummary {
        total_records: records.len(),
        categories,
        total_value_usd: round2(total_value),
        average_rating,
    })
}

/// Parse a numeric field strictly; a missing column counts as zero.
fn parse_field<T>(record: &Record, field: &str) -> Result<T, AppError>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    match record.get(field) {
        None => Ok(T::default()),
        Some(raw) => raw.parse().map_err(|err| {
            AppError::InternalError(anyhow::anyhow!(
                "Malformed {} value {:?}: {}",
                field,
                raw,
                err
            ))
        }),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
