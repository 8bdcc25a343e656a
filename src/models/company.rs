use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Deserializer};

use crate::models::filter::Record;
use crate::models::status::RegistrationStatus;

/// A registered employer, exactly as the registry service sends it.
///
/// `categories` is normalized at this boundary: older records arrive as a
/// JSON-encoded string (or a bare category string) instead of a list, and
/// nothing downstream should ever have to re-parse that.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(alias = "_id")]
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    pub mobile: String,
    pub email: String,
    #[serde(default)]
    pub address: CompanyAddress,
    #[serde(default, deserialize_with = "normalize_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub candidate_quantity: i64,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub job_location: JobLocation,
    #[serde(default)]
    pub registration_status: RegistrationStatus,
    pub registration_date: DateTime<Utc>,
    #[serde(default)]
    pub business_document: Option<String>,
    #[serde(default)]
    pub is_mobile_verified: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub years: i64,
    #[serde(default)]
    pub months: i64,
    #[serde(default)]
    pub days: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLocation {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

fn normalize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Many(Vec<String>),
        One(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(Raw::Many(list)) => Ok(list),
        Some(Raw::One(s)) => match serde_json::from_str::<Vec<String>>(&s) {
            Ok(list) => Ok(list),
            Err(_) => Ok(vec![s]),
        },
    }
}

impl Company {
    pub fn categories_label(&self) -> String {
        self.categories.join(", ")
    }

    pub fn experience_label(&self) -> String {
        format!(
            "{}y {}m {}d",
            self.experience.years, self.experience.months, self.experience.days
        )
    }

    pub fn registered_label(&self) -> String {
        self.registration_date
            .with_timezone(&Local)
            .format("%b %-d, %Y")
            .to_string()
    }

    pub fn registered_full(&self) -> String {
        self.registration_date
            .with_timezone(&Local)
            .format("%B %-d, %Y %H:%M")
            .to_string()
    }
}

impl Record for Company {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.company_name.as_str(),
            self.contact_person.as_str(),
            self.mobile.as_str(),
            self.email.as_str(),
        ]
    }

    fn category_values(&self) -> Vec<&str> {
        self.categories.iter().map(String::as_str).collect()
    }

    fn location(&self) -> Option<&str> {
        if self.job_location.city.is_empty() {
            None
        } else {
            Some(&self.job_location.city)
        }
    }

    fn status(&self) -> RegistrationStatus {
        self.registration_status
    }

    fn registered_at(&self) -> DateTime<Utc> {
        self.registration_date
    }
}
