//! Derivations over the full, unfiltered collections: distinct filter
//! options, summary-card counts, and chart data. All pure functions,
//! recomputed on every render — the collections are small enough that
//! incremental maintenance would buy nothing.

use std::collections::BTreeMap;

use crate::models::filter::Record;
use crate::models::status::RegistrationStatus;

/// Chart display labels longer than this are shortened for axis legibility.
/// Only the label is touched; the underlying filter value never is.
const CHART_LABEL_MAX: usize = 10;

/// Most slices a chart shows before the long tail is cut off.
const CHART_MAX_SLICES: usize = 10;

/// Counts for the summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    /// Number of distinct categories across the collection.
    pub categories: usize,
}

pub fn status_counts<R: Record>(records: &[R]) -> StatusCounts {
    StatusCounts {
        total: records.len(),
        pending: records
            .iter()
            .filter(|r| r.status() == RegistrationStatus::Pending)
            .count(),
        approved: records
            .iter()
            .filter(|r| r.status() == RegistrationStatus::Approved)
            .count(),
        categories: distinct_categories(records).len(),
    }
}

/// Distinct category values, sorted. The UI offers these under an "All"
/// option that encodes no constraint.
pub fn distinct_categories<R: Record>(records: &[R]) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .flat_map(|r| r.category_values())
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Distinct job-location values, sorted.
pub fn distinct_locations<R: Record>(records: &[R]) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|r| r.location())
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// One bar of the category chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    /// Possibly shortened, for the chart axis only.
    pub label: String,
    /// The untouched category value.
    pub value: String,
    pub count: usize,
    /// Bar width relative to the largest slice, 0–100.
    pub pct: u32,
}

/// Category histogram, largest first. Records with no category values
/// contribute nothing.
pub fn category_histogram<R: Record>(records: &[R]) -> Vec<CategorySlice> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        for category in record.category_values() {
            *counts.entry(category).or_insert(0) += 1;
        }
    }

    let mut slices: Vec<(&str, usize)> = counts.into_iter().collect();
    slices.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    slices.truncate(CHART_MAX_SLICES);

    let max = slices.first().map(|(_, n)| *n).unwrap_or(0);
    slices
        .into_iter()
        .map(|(value, count)| CategorySlice {
            label: truncate_label(value),
            value: value.to_string(),
            count,
            pct: pct_of(count, max),
        })
        .collect()
}

/// One slice of the registration-status chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSlice {
    pub label: &'static str,
    pub class: &'static str,
    pub count: usize,
    /// Share of the whole collection, 0–100.
    pub pct: u32,
}

pub fn status_breakdown<R: Record>(records: &[R]) -> Vec<StatusSlice> {
    let total = records.len();
    RegistrationStatus::ALL
        .iter()
        .map(|&status| {
            let count = records.iter().filter(|r| r.status() == status).count();
            StatusSlice {
                label: status.label(),
                class: status.as_str(),
                count,
                pct: pct_of(count, total),
            }
        })
        .collect()
}

fn pct_of(count: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        ((count * 100) / whole) as u32
    }
}

/// Shorten a chart label to [`CHART_LABEL_MAX`] characters plus an ellipsis.
fn truncate_label(name: &str) -> String {
    if name.chars().count() > CHART_LABEL_MAX {
        let head: String = name.chars().take(CHART_LABEL_MAX).collect();
        format!("{head}…")
    } else {
        name.to_string()
    }
}
