use askama::Template;

use super::PageContext;
use crate::models::candidate::Candidate;
use crate::models::company::Company;
use crate::models::filter::{EntityKind, FilterSpec};
use crate::models::stats::{CategorySlice, StatusCounts, StatusSlice};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub kind: EntityKind,
    pub spec: FilterSpec,
    /// Per-collection load failures from the concurrent initial fetch.
    pub notices: Vec<String>,
    // Derived from the full (unfiltered) active collection.
    pub counts: StatusCounts,
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub histogram: Vec<CategorySlice>,
    pub status_slices: Vec<StatusSlice>,
    // The filtered rows; only the active kind's vec is populated.
    pub candidates: Vec<Candidate>,
    pub companies: Vec<Company>,
    pub filtered_total: usize,
    /// Where row actions return to, preserving the filter query string.
    pub redirect_to: String,
}
