use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

use crate::models::filter::Record;
use crate::models::status::RegistrationStatus;

/// A registered job candidate, exactly as the registry service sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(alias = "_id")]
    pub id: String,
    pub full_name: String,
    pub mobile: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: CandidateAddress,
    pub category: String,
    pub job_location_city: String,
    #[serde(default)]
    pub custom_city: Option<String>,
    #[serde(default)]
    pub registration_status: RegistrationStatus,
    pub registration_date: DateTime<Utc>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub registration_fee: Option<f64>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub upi_transaction_id: Option<String>,
    #[serde(default)]
    pub uid_number: Option<String>,
    #[serde(default)]
    pub is_mobile_verified: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAddress {
    #[serde(default)]
    pub village_town_city: String,
    #[serde(default)]
    pub landmark: Option<String>,
    #[serde(default)]
    pub pincode: String,
}

impl Candidate {
    /// Compact date for table rows, e.g. "Mar 4, 2025".
    pub fn registered_label(&self) -> String {
        self.registration_date
            .with_timezone(&Local)
            .format("%b %-d, %Y")
            .to_string()
    }

    /// Full timestamp for the detail view.
    pub fn registered_full(&self) -> String {
        self.registration_date
            .with_timezone(&Local)
            .format("%B %-d, %Y %H:%M")
            .to_string()
    }

    pub fn fee_label(&self) -> String {
        format!("{:.2}", self.registration_fee.unwrap_or(500.0))
    }
}

impl Record for Candidate {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.full_name.as_str(), self.mobile.as_str()];
        if let Some(email) = self.email.as_deref() {
            fields.push(email);
        }
        fields
    }

    fn category_values(&self) -> Vec<&str> {
        vec![&self.category]
    }

    fn location(&self) -> Option<&str> {
        Some(&self.job_location_city)
    }

    fn status(&self) -> RegistrationStatus {
        self.registration_status
    }

    fn registered_at(&self) -> DateTime<Utc> {
        self.registration_date
    }
}
