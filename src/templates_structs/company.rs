use askama::Template;

use super::PageContext;
use crate::models::company::Company;

#[derive(Template)]
#[template(path = "companies/detail.html")]
pub struct CompanyDetailTemplate {
    pub ctx: PageContext,
    pub company: Company,
    pub document_url: Option<String>,
}
