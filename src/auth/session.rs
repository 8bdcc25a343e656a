use actix_session::Session;

use crate::auth::capability::Role;
use crate::errors::AppError;
use crate::models::admin::Admin;

const ADMIN_ID: &str = "admin_id";
const ADMIN_NAME: &str = "admin_name";
const ADMIN_ROLE: &str = "admin_role";

/// Read the signed-in admin back out of the session. Any missing or
/// unreadable value means logged-out; a corrupt cookie never escalates.
pub fn current_admin(session: &Session) -> Option<Admin> {
    let id = session.get::<String>(ADMIN_ID).unwrap_or(None)?;
    let name = session.get::<String>(ADMIN_NAME).unwrap_or(None)?;
    let role = session.get::<String>(ADMIN_ROLE).unwrap_or(None)?;
    let role = Role::parse(&role)?;
    Some(Admin { id, name, role })
}

pub fn require_admin(session: &Session) -> Result<Admin, AppError> {
    current_admin(session).ok_or_else(|| AppError::Session("Not signed in".to_string()))
}

pub fn store_admin(session: &Session, admin: &Admin) {
    let _ = session.insert(ADMIN_ID, &admin.id);
    let _ = session.insert(ADMIN_NAME, &admin.name);
    let _ = session.insert(ADMIN_ROLE, admin.role.as_str());
}

pub fn flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
