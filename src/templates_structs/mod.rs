// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::auth::capability::Capabilities;
use crate::auth::csrf;
use crate::auth::session::{require_admin, take_flash};
use crate::errors::AppError;

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.admin_name`, `ctx.caps.can_moderate`, etc.
pub struct PageContext {
    pub admin_id: String,
    pub admin_name: String,
    pub avatar_initial: String,
    pub role_label: &'static str,
    pub caps: Capabilities,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let admin = require_admin(session)?;
        let caps = Capabilities::for_role(admin.role);
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let avatar_initial = admin
            .name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        Ok(Self {
            admin_id: admin.id,
            admin_name: admin.name,
            avatar_initial,
            role_label: admin.role.label(),
            caps,
            flash,
            csrf_token,
        })
    }
}

mod admin;
mod candidate;
mod common;
mod company;
mod dashboard;

pub use self::admin::AdminListTemplate;
pub use self::candidate::CandidateDetailTemplate;
pub use self::common::LoginTemplate;
pub use self::company::CompanyDetailTemplate;
pub use self::dashboard::DashboardTemplate;
