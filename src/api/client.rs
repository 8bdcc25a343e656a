use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::models::admin::{Admin, AdminAccount, NewAdmin};
use crate::models::candidate::Candidate;
use crate::models::company::Company;
use crate::models::status::RegistrationStatus;

pub type ApiResult<T> = Result<T, ApiError>;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the acting admin's id on authenticated calls.
const ADMIN_ID_HEADER: &str = "admin-id";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct LoginEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    admin: Option<Admin>,
}

#[derive(Deserialize)]
struct AdminListEnvelope {
    admins: Vec<AdminAccount>,
}

#[derive(Deserialize)]
struct CandidateListEnvelope {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct CompanyListEnvelope {
    companies: Vec<Company>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self { http, base_url }
    }

    fn request(&self, method: Method, path: &str, admin_id: Option<&str>) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(id) = admin_id {
            req = req.header(ADMIN_ID_HEADER, id);
        }
        req
    }

    /// Map error statuses to [`ApiError`]; a 401 always becomes
    /// `Unauthorized` no matter which call produced it.
    async fn check(res: Response) -> ApiResult<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let message = res
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Err(ApiError::Remote {
            status: status.as_u16(),
            message,
        })
    }

    async fn send(&self, req: RequestBuilder) -> ApiResult<Response> {
        let res = req.send().await.map_err(ApiError::Http)?;
        Self::check(res).await
    }

    /// Fire a request and discard the response body. Used for mutations
    /// whose envelope carries nothing we act on.
    async fn send_unit(&self, req: RequestBuilder) -> ApiResult<()> {
        self.send(req).await.map(|_| ())
    }

    // ---------- Admin auth & accounts ----------

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Admin> {
        let body = serde_json::json!({ "email": email, "password": password });
        let res = self
            .send(self.request(Method::POST, "/admin/login", None).json(&body))
            .await?;
        let envelope = res.json::<LoginEnvelope>().await.map_err(ApiError::Parse)?;
        match envelope.admin {
            Some(admin) if envelope.success => Ok(admin),
            _ => Err(ApiError::Remote {
                status: 200,
                message: envelope
                    .message
                    .unwrap_or_else(|| "Login failed".to_string()),
            }),
        }
    }

    pub async fn list_admins(&self, admin_id: &str) -> ApiResult<Vec<AdminAccount>> {
        let res = self
            .send(self.request(Method::GET, "/admin", Some(admin_id)))
            .await?;
        let envelope = res
            .json::<AdminListEnvelope>()
            .await
            .map_err(ApiError::Parse)?;
        Ok(envelope.admins)
    }

    pub async fn create_admin(&self, admin_id: &str, new_admin: &NewAdmin) -> ApiResult<()> {
        self.send_unit(
            self.request(Method::POST, "/admin/create", Some(admin_id))
                .json(new_admin),
        )
        .await
    }

    pub async fn set_admin_active(&self, admin_id: &str, id: &str, active: bool) -> ApiResult<()> {
        let body = serde_json::json!({ "isActive": active });
        self.send_unit(
            self.request(Method::PUT, &format!("/admin/{id}"), Some(admin_id))
                .json(&body),
        )
        .await
    }

    pub async fn delete_admin(&self, admin_id: &str, id: &str) -> ApiResult<()> {
        self.send_unit(self.request(Method::DELETE, &format!("/admin/{id}"), Some(admin_id)))
            .await
    }

    // ---------- Candidates ----------

    pub async fn list_candidates(&self, admin_id: &str) -> ApiResult<Vec<Candidate>> {
        let res = self
            .send(self.request(Method::GET, "/candidates", Some(admin_id)))
            .await?;
        let envelope = res
            .json::<CandidateListEnvelope>()
            .await
            .map_err(ApiError::Parse)?;
        Ok(envelope.candidates)
    }

    pub async fn delete_candidate(&self, admin_id: &str, id: &str) -> ApiResult<()> {
        self.send_unit(self.request(Method::DELETE, &format!("/candidates/{id}"), Some(admin_id)))
            .await
    }

    pub async fn update_candidate_status(
        &self,
        admin_id: &str,
        id: &str,
        status: RegistrationStatus,
    ) -> ApiResult<()> {
        let body = serde_json::json!({ "registrationStatus": status });
        self.send_unit(
            self.request(Method::PUT, &format!("/candidates/{id}/status"), Some(admin_id))
                .json(&body),
        )
        .await
    }

    // ---------- Companies ----------

    pub async fn list_companies(&self, admin_id: &str) -> ApiResult<Vec<Company>> {
        let res = self
            .send(self.request(Method::GET, "/companies", Some(admin_id)))
            .await?;
        let envelope = res
            .json::<CompanyListEnvelope>()
            .await
            .map_err(ApiError::Parse)?;
        Ok(envelope.companies)
    }

    pub async fn delete_company(&self, admin_id: &str, id: &str) -> ApiResult<()> {
        self.send_unit(self.request(Method::DELETE, &format!("/companies/{id}"), Some(admin_id)))
            .await
    }

    pub async fn update_company_status(
        &self,
        admin_id: &str,
        id: &str,
        status: RegistrationStatus,
    ) -> ApiResult<()> {
        let body = serde_json::json!({ "registrationStatus": status });
        self.send_unit(
            self.request(Method::PUT, &format!("/companies/{id}/status"), Some(admin_id))
                .json(&body),
        )
        .await
    }

    /// Absolute URL for a candidate photo stored by the remote service.
    pub fn candidate_photo_url(&self, file: &str) -> String {
        if file.starts_with("http") {
            return file.to_string();
        }
        format!("{}/uploads/candidates/{file}", self.origin())
    }

    /// Absolute URL for a company's uploaded business document.
    pub fn company_document_url(&self, file: &str) -> String {
        if file.starts_with("http") {
            return file.to_string();
        }
        format!("{}/uploads/companies/{file}", self.origin())
    }

    /// The service origin with any `/api` suffix removed; uploads are served
    /// from the root, not the API prefix.
    fn origin(&self) -> &str {
        self.base_url.strip_suffix("/api").unwrap_or(&self.base_url)
    }
}
