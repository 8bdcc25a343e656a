//! In-memory mirror of the remote collections.
//!
//! Both collections are fetched once per process (concurrently, on the first
//! authenticated page) and then mutated optimistically after successful
//! writes. Nothing here refreshes in the background; a collection that failed
//! to load is retried on the next page view.
//!
//! Two rapid actions on the same record are not serialized against each
//! other; the last response to land wins. Acceptable for a single-operator
//! tool, and called out rather than papered over.

use std::future::Future;

use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::models::company::Company;
use crate::models::status::RegistrationStatus;

#[derive(Debug)]
pub struct Collection<T> {
    pub records: Vec<T>,
    pub loaded: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection {
            records: Vec::new(),
            loaded: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    pub candidates: Collection<Candidate>,
    pub companies: Collection<Company>,
}

pub type SharedStore = RwLock<Store>;

impl Store {
    /// Drop the candidate with the given id. Returns whether anything
    /// was removed; relative order of the rest is untouched.
    pub fn remove_candidate(&mut self, id: &str) -> bool {
        let before = self.candidates.records.len();
        self.candidates.records.retain(|c| c.id != id);
        self.candidates.records.len() != before
    }

    pub fn remove_company(&mut self, id: &str) -> bool {
        let before = self.companies.records.len();
        self.companies.records.retain(|c| c.id != id);
        self.companies.records.len() != before
    }

    /// Rewrite one candidate's registration status in place.
    pub fn set_candidate_status(&mut self, id: &str, status: RegistrationStatus) -> bool {
        match self.candidates.records.iter_mut().find(|c| c.id == id) {
            Some(candidate) => {
                candidate.registration_status = status;
                true
            }
            None => false,
        }
    }

    pub fn set_company_status(&mut self, id: &str, status: RegistrationStatus) -> bool {
        match self.companies.records.iter_mut().find(|c| c.id == id) {
            Some(company) => {
                company.registration_status = status;
                true
            }
            None => false,
        }
    }
}

async fn fetch_if<T>(
    needed: bool,
    fut: impl Future<Output = Result<Vec<T>, ApiError>>,
) -> Option<Result<Vec<T>, ApiError>> {
    if needed { Some(fut.await) } else { None }
}

/// Fetch whichever collections are not yet in memory, both at once.
///
/// The two fetches are joined but their outcomes are reported separately: if
/// one side fails, the other still lands and the failure comes back as a
/// user-visible notice instead of being swallowed. A rejected identity
/// short-circuits the whole page as usual.
pub async fn ensure_loaded(
    store: &SharedStore,
    api: &ApiClient,
    admin_id: &str,
) -> Result<Vec<String>, AppError> {
    let (need_candidates, need_companies) = {
        let s = store.read().await;
        (!s.candidates.loaded, !s.companies.loaded)
    };
    if !need_candidates && !need_companies {
        return Ok(Vec::new());
    }

    let (candidates, companies) = tokio::join!(
        fetch_if(need_candidates, api.list_candidates(admin_id)),
        fetch_if(need_companies, api.list_companies(admin_id)),
    );

    let mut notices = Vec::new();
    let mut s = store.write().await;

    match candidates {
        Some(Ok(records)) => {
            s.candidates.records = records;
            s.candidates.loaded = true;
        }
        Some(Err(ApiError::Unauthorized)) => return Err(AppError::Unauthorized),
        Some(Err(e)) => {
            log::error!("loading candidates failed: {e}");
            notices.push("Candidates could not be loaded from the registry service. Reload to retry.".to_string());
        }
        None => {}
    }

    match companies {
        Some(Ok(records)) => {
            s.companies.records = records;
            s.companies.loaded = true;
        }
        Some(Err(ApiError::Unauthorized)) => return Err(AppError::Unauthorized),
        Some(Err(e)) => {
            log::error!("loading companies failed: {e}");
            notices.push("Companies could not be loaded from the registry service. Reload to retry.".to_string());
        }
        None => {}
    }

    Ok(notices)
}
