use askama::Template;

use super::PageContext;
use crate::models::admin::AdminAccount;

#[derive(Template)]
#[template(path = "admins/list.html")]
pub struct AdminListTemplate {
    pub ctx: PageContext,
    pub admins: Vec<AdminAccount>,
    /// Set when the account list itself could not be fetched.
    pub load_error: Option<String>,
}
