use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::auth::{csrf, session};
use crate::errors::{AppError, render};
use crate::handlers::auth_handlers::CsrfOnly;
use crate::models::admin::NewAdmin;
use crate::templates_structs::{AdminListTemplate, PageContext};

#[derive(Deserialize)]
pub struct CreateAdminForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct ToggleActiveForm {
    pub active: bool,
    pub csrf_token: String,
}

fn back_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/admins"))
        .finish()
}

/// The account list is never cached; every view re-reads it from the
/// service, as the management panel always did.
pub async fn list(api: web::Data<ApiClient>, session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    ctx.caps.require_manage()?;

    let (admins, load_error) = match api.list_admins(&ctx.admin_id).await {
        Ok(admins) => (admins, None),
        Err(ApiError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(e) => {
            log::warn!("listing admin accounts failed: {e}");
            (Vec::new(), Some(format!("Failed to load admins: {e}")))
        }
    };

    render(AdminListTemplate {
        ctx,
        admins,
        load_error,
    })
}

pub async fn create(
    api: web::Data<ApiClient>,
    session: Session,
    form: web::Form<CreateAdminForm>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    ctx.caps.require_manage()?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let form = form.into_inner();
    let new_admin = NewAdmin {
        name: form.name,
        email: form.email,
        password: form.password,
    };

    match api.create_admin(&ctx.admin_id, &new_admin).await {
        Ok(()) => session::flash(&session, "Admin created successfully"),
        Err(ApiError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(e) => {
            log::warn!("creating admin failed: {e}");
            session::flash(&session, &format!("Failed to create admin: {e}"));
        }
    }
    Ok(back_to_list())
}

pub async fn toggle_active(
    api: web::Data<ApiClient>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<ToggleActiveForm>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    ctx.caps.require_manage()?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    match api.set_admin_active(&ctx.admin_id, &id, !form.active).await {
        Ok(()) => session::flash(&session, "Admin status updated"),
        Err(ApiError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(e) => {
            log::warn!("updating admin {id} failed: {e}");
            session::flash(&session, &format!("Failed to update admin: {e}"));
        }
    }
    Ok(back_to_list())
}

pub async fn delete(
    api: web::Data<ApiClient>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    ctx.caps.require_manage()?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    match api.delete_admin(&ctx.admin_id, &id).await {
        Ok(()) => session::flash(&session, "Admin deleted successfully"),
        Err(ApiError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(e) => {
            log::warn!("deleting admin {id} failed: {e}");
            session::flash(&session, &format!("Failed to delete admin: {e}"));
        }
    }
    Ok(back_to_list())
}
