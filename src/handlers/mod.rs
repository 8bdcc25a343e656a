pub mod admin_handlers;
pub mod auth_handlers;
pub mod candidate_handlers;
pub mod company_handlers;
pub mod dashboard;
pub mod export_handlers;
