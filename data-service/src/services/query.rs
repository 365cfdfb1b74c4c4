//! Filtered, limited views over the record store.

use super::store::{CATEGORY_FIELD, RATING_FIELD, Record};

pub const DEFAULT_LIMIT: usize = 100;

/// Raw query parameters as received on the wire.
///
/// Numeric fields stay strings here: a value that fails to parse is
/// silently ignored rather than rejected with a 400.
#[derive(Debug, Default)]
pub struct QueryParams {
    pub category: Option<String>,
    pub min_rating: Option<String>,
    pub limit: Option<String>,
}

/// Filter records by category (case-insensitive) and minimum rating, then
/// truncate to the first `limit` matches in store order.
pub fn query<'a>(records: &'a [Record], params: &QueryParams) -> Vec<&'a Record> {
    let category = params
        .category
        .as_deref()
        .filter(|value| !value.is_empty());
    let min_rating = params
        .min_rating
        .as_deref()
        .and_then(|value| value.parse::<i64>().ok());
    let limit = params
        .limit
        .as_deref()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(DEFAULT_LIMIT);

    records
        .iter()
        .filter(|record| match category {
            Some(wanted) => record
                .get(CATEGORY_FIELD)
                .is_some_and(|value| value.eq_ignore_ascii_case(wanted)),
            None => true,
        })
        .filter(|record| match min_rating {
            Some(min) => rating_of(record) >= min,
            None => true,
        })
        .take(limit)
        .collect()
}

/// Rating of a record; missing or unparseable values count as 0.
fn rating_of(record: &Record) -> i64 {
    record
        .get(RATING_FIELD)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
