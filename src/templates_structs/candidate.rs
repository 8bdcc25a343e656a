use askama::Template;

use super::PageContext;
use crate::models::candidate::Candidate;

#[derive(Template)]
#[template(path = "candidates/detail.html")]
pub struct CandidateDetailTemplate {
    pub ctx: PageContext,
    pub candidate: Candidate,
    pub photo_url: Option<String>,
}
