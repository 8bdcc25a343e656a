use chrono::{DateTime, Days, Local, Months, NaiveDate, Utc};
use serde::Deserialize;

use crate::models::status::RegistrationStatus;

/// The pieces of a record the filter engine looks at. Both entity kinds
/// implement this, so the engine itself is written once.
pub trait Record {
    /// Fields the free-text search runs over; absent optional fields are
    /// simply not included.
    fn search_fields(&self) -> Vec<&str>;
    /// All category values the record carries (one for candidates, the
    /// normalized list for companies).
    fn category_values(&self) -> Vec<&str>;
    fn location(&self) -> Option<&str>;
    fn status(&self) -> RegistrationStatus;
    fn registered_at(&self) -> DateTime<Utc>;

    fn matches_category(&self, category: &str) -> bool {
        self.category_values().iter().any(|c| *c == category)
    }
}

/// A constraint that is either absent or a concrete value.
///
/// "No constraint" is its own variant rather than a magic string, so a real
/// field value that happens to be the literal `"all"` filters like any other
/// value. The query string encodes `All` as an empty parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("") => Selection::All,
            Some(v) => Selection::Value(v.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The query-string encoding of this selection.
    pub fn param(&self) -> &str {
        match self {
            Selection::All => "",
            Selection::Value(v) => v,
        }
    }

    pub fn is(&self, value: &str) -> bool {
        matches!(self, Selection::Value(v) if v == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("today") => DateRange::Today,
            Some("week") => DateRange::Week,
            Some("month") => DateRange::Month,
            _ => DateRange::All,
        }
    }

    pub fn param(self) -> &'static str {
        match self {
            DateRange::All => "",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        }
    }
}

/// Which collection the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    #[default]
    Candidates,
    Companies,
}

impl EntityKind {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("companies") => EntityKind::Companies,
            _ => EntityKind::Candidates,
        }
    }

    pub fn param(self) -> &'static str {
        match self {
            EntityKind::Candidates => "candidates",
            EntityKind::Companies => "companies",
        }
    }

    pub fn is_candidates(self) -> bool {
        self == EntityKind::Candidates
    }

    pub fn is_companies(self) -> bool {
        self == EntityKind::Companies
    }
}

/// The user-configurable constraints applied to a collection before display.
/// Lives in the dashboard query string; shared across entity kinds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub search: String,
    pub category: Selection,
    pub location: Selection,
    pub status: Selection,
    pub range: DateRange,
}

/// Raw dashboard/export query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub kind: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub range: Option<String>,
}

impl FilterSpec {
    pub fn from_query(query: &FilterQuery) -> Self {
        FilterSpec {
            search: query.search.clone().unwrap_or_default(),
            category: Selection::from_param(query.category.as_deref()),
            location: Selection::from_param(query.location.as_deref()),
            status: Selection::from_param(query.status.as_deref()),
            range: DateRange::from_param(query.range.as_deref()),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == FilterSpec::default()
    }

    // Template helpers: current parameter values and selected-state checks.

    pub fn category_is(&self, value: &str) -> bool {
        self.category.is(value)
    }

    pub fn location_is(&self, value: &str) -> bool {
        self.location.is(value)
    }

    pub fn status_is(&self, value: &str) -> bool {
        self.status.is(value)
    }

    pub fn range_is(&self, key: &str) -> bool {
        self.range.param() == key
    }
}

/// Filter with the real clock. Order-preserving and non-mutating.
pub fn filter_records<'a, R: Record>(records: &'a [R], spec: &FilterSpec) -> Vec<&'a R> {
    filter_records_at(records, spec, Utc::now())
}

/// Filter against an explicit "now", so the date-range clauses are
/// deterministic under test.
pub fn filter_records_at<'a, R: Record>(
    records: &'a [R],
    spec: &FilterSpec,
    now: DateTime<Utc>,
) -> Vec<&'a R> {
    let today = now.with_timezone(&Local).date_naive();
    records
        .iter()
        .filter(|r| matches(*r, spec, today))
        .collect()
}

fn matches<R: Record>(record: &R, spec: &FilterSpec, today: NaiveDate) -> bool {
    matches_search(record, &spec.search)
        && selection_passes(&spec.category, |v| record.matches_category(v))
        && selection_passes(&spec.location, |v| record.location() == Some(v))
        && selection_passes(&spec.status, |v| record.status().as_str() == v)
        && matches_range(record, spec.range, today)
}

fn selection_passes(selection: &Selection, pred: impl FnOnce(&str) -> bool) -> bool {
    match selection {
        Selection::All => true,
        Selection::Value(v) => pred(v),
    }
}

fn matches_search<R: Record>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_range<R: Record>(record: &R, range: DateRange, today: NaiveDate) -> bool {
    if range == DateRange::All {
        return true;
    }
    // Registration instants compare at day granularity, in local time.
    let day = record.registered_at().with_timezone(&Local).date_naive();
    match range {
        DateRange::All => true,
        DateRange::Today => day == today,
        DateRange::Week => day >= today.checked_sub_days(Days::new(7)).unwrap_or(today),
        // One calendar month back, clamped to the last valid day of the
        // target month (Mar 31 -> Feb 28/29).
        DateRange::Month => day >= today.checked_sub_months(Months::new(1)).unwrap_or(today),
    }
}
