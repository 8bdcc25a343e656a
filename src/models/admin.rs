use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::capability::Role;

/// The authenticated admin's identity as returned by the login endpoint and
/// held in the session for the life of the sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// A managed admin account as listed by the account-management endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl AdminAccount {
    pub fn created_label(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// Payload for creating a new admin account. New accounts always get the
/// reduced role; the service enforces this too.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}
