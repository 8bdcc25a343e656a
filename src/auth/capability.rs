use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Access level granted by the remote service at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::SuperAdmin => "Super Admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "super_admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }
}

/// What the signed-in admin may do. Resolved from the role exactly once;
/// views and handlers branch on these flags and never on the role string,
/// so the gating rules live in one place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    /// See mobile numbers and email addresses in tables and detail views.
    pub can_view_contact: bool,
    /// Open record detail, change registration status, delete records.
    pub can_moderate: bool,
    /// Manage other admin accounts.
    pub can_manage: bool,
}

impl Capabilities {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Capabilities {
                can_view_contact: false,
                can_moderate: false,
                can_manage: false,
            },
            Role::SuperAdmin => Capabilities {
                can_view_contact: true,
                can_moderate: true,
                can_manage: true,
            },
        }
    }

    pub fn require_moderate(&self) -> Result<(), AppError> {
        if self.can_moderate {
            Ok(())
        } else {
            Err(AppError::PermissionDenied("moderate records".to_string()))
        }
    }

    pub fn require_manage(&self) -> Result<(), AppError> {
        if self.can_manage {
            Ok(())
        } else {
            Err(AppError::PermissionDenied("manage admin accounts".to_string()))
        }
    }
}
