use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::auth::{csrf, session};
use crate::errors::{AppError, render};
use crate::models::status::RegistrationStatus;
use crate::state::{SharedStore, ensure_loaded};
use crate::templates_structs::{CandidateDetailTemplate, PageContext};

#[derive(Deserialize)]
pub struct StatusForm {
    pub status: String,
    pub csrf_token: String,
    pub redirect_to: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteForm {
    pub csrf_token: String,
    pub redirect_to: Option<String>,
}

fn back(form_redirect: Option<&str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", form_redirect.unwrap_or("/dashboard").to_string()))
        .finish()
}

pub async fn detail(
    api: web::Data<ApiClient>,
    store: web::Data<SharedStore>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    ctx.caps.require_moderate()?;

    let id = path.into_inner();
    ensure_loaded(&store, &api, &ctx.admin_id).await?;

    let s = store.read().await;
    let candidate = s
        .candidates
        .records
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or(AppError::NotFound)?;
    drop(s);

    let photo_url = candidate.photo.as_deref().map(|f| api.candidate_photo_url(f));
    render(CandidateDetailTemplate {
        ctx,
        candidate,
        photo_url,
    })
}

pub async fn update_status(
    api: web::Data<ApiClient>,
    store: web::Data<SharedStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<StatusForm>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    ctx.caps.require_moderate()?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let Some(status) = RegistrationStatus::parse(&form.status) else {
        session::flash(&session, "Unknown status value");
        return Ok(back(form.redirect_to.as_deref()));
    };

    match api.update_candidate_status(&ctx.admin_id, &id, status).await {
        Ok(()) => {
            store.write().await.set_candidate_status(&id, status);
            session::flash(&session, &format!("Candidate marked {}", status.as_str()));
        }
        Err(ApiError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(e) => {
            log::warn!("status update for candidate {id} failed: {e}");
            session::flash(&session, &format!("Failed to update status: {e}"));
        }
    }
    Ok(back(form.redirect_to.as_deref()))
}

pub async fn delete(
    api: web::Data<ApiClient>,
    store: web::Data<SharedStore>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session)?;
    ctx.caps.require_moderate()?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    match api.delete_candidate(&ctx.admin_id, &id).await {
        Ok(()) => {
            store.write().await.remove_candidate(&id);
            session::flash(&session, "Candidate deleted");
        }
        Err(ApiError::Unauthorized) => return Err(AppError::Unauthorized),
        Err(e) => {
            log::warn!("deleting candidate {id} failed: {e}");
            session::flash(&session, &format!("Failed to delete candidate: {e}"));
        }
    }
    Ok(back(form.redirect_to.as_deref()))
}
