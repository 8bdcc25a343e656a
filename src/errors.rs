use actix_web::cookie::{Cookie, time::Duration};
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::api::ApiError;

#[derive(Debug)]
pub enum AppError {
    Api(ApiError),
    Template(askama::Error),
    Export(rust_xlsxwriter::XlsxError),
    Session(String),
    PermissionDenied(String),
    Csrf,
    /// The remote service rejected our identity. Handled globally: the
    /// session cookie is dropped and the browser is sent back to /login.
    Unauthorized,
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "Registry service error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Export(e) => write!(f, "Export error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::PermissionDenied(what) => write!(f, "Permission denied: {what}"),
            AppError::Csrf => write!(f, "Invalid or missing CSRF token"),
            AppError::Unauthorized => write!(f, "Not authorized by the registry service"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            AppError::PermissionDenied(_) => HttpResponse::Forbidden().body("Forbidden"),
            AppError::Csrf => HttpResponse::Forbidden().body("Invalid or missing CSRF token"),
            // Expire the session cookie and force re-authentication. Every
            // call path funnels through here, so no handler special-cases a
            // rejected identity.
            AppError::Unauthorized => {
                let expired = Cookie::build("id", "")
                    .path("/")
                    .max_age(Duration::ZERO)
                    .finish();
                HttpResponse::SeeOther()
                    .insert_header(("Location", "/login"))
                    .cookie(expired)
                    .finish()
            }
            AppError::Session(_) => HttpResponse::SeeOther()
                .insert_header(("Location", "/login"))
                .finish(),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Unauthorized => AppError::Unauthorized,
            other => AppError::Api(other),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e)
    }
}

/// Render an Askama template into a 200 HTML response.
pub fn render<T: askama::Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
