use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::auth::{csrf, session};
use crate::errors::{AppError, render};
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // If already signed in, go straight to the dashboard
    if session::current_admin(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    render(LoginTemplate {
        error: None,
        csrf_token,
    })
}

pub async fn login_submit(
    api: web::Data<ApiClient>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    match api.login(&form.email, &form.password).await {
        Ok(admin) => {
            session::store_admin(&session, &admin);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish())
        }
        // A 401 here means bad credentials, not an expired session, so it
        // stays on the form instead of going through the global handler.
        Err(ApiError::Unauthorized) => {
            let csrf_token = csrf::get_or_create_token(&session);
            render(LoginTemplate {
                error: Some("Invalid email or password".to_string()),
                csrf_token,
            })
        }
        Err(ApiError::Remote { message, .. }) => {
            let csrf_token = csrf::get_or_create_token(&session);
            render(LoginTemplate {
                error: Some(message),
                csrf_token,
            })
        }
        Err(e) => {
            log::warn!("login request failed: {e}");
            let csrf_token = csrf::get_or_create_token(&session);
            render(LoginTemplate {
                error: Some("Could not reach the registry service. Please try again.".to_string()),
                csrf_token,
            })
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
