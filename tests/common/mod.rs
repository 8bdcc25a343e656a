//! Shared test fixtures: sample records and a fixed reference clock.
//!
//! Date-range tests build their timestamps through the local timezone so the
//! day-granularity assertions hold no matter where the suite runs.

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use staffdesk::models::candidate::{Candidate, CandidateAddress};
use staffdesk::models::company::{Company, CompanyAddress, Experience, JobLocation};
use staffdesk::models::status::RegistrationStatus;

/// An arbitrary fixed day for clock-sensitive tests.
pub fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

/// Midday on the given local date, as the UTC instant records carry.
pub fn local_midday(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_hms_opt(12, 0, 0).expect("valid time");
    Local
        .from_local_datetime(&naive)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

pub fn candidate(
    id: &str,
    name: &str,
    category: &str,
    city: &str,
    status: RegistrationStatus,
) -> Candidate {
    Candidate {
        id: id.to_string(),
        full_name: name.to_string(),
        mobile: "9876543210".to_string(),
        email: Some(format!("{id}@example.com")),
        address: CandidateAddress {
            village_town_city: "Pune".to_string(),
            landmark: None,
            pincode: "411001".to_string(),
        },
        category: category.to_string(),
        job_location_city: city.to_string(),
        custom_city: None,
        registration_status: status,
        registration_date: local_midday(reference_day()),
        photo: None,
        registration_fee: None,
        payment_status: None,
        upi_transaction_id: None,
        uid_number: None,
        is_mobile_verified: true,
    }
}

pub fn company(
    id: &str,
    name: &str,
    categories: &[&str],
    city: &str,
    status: RegistrationStatus,
) -> Company {
    Company {
        id: id.to_string(),
        company_name: name.to_string(),
        contact_person: "Asha Rao".to_string(),
        mobile: "9123456780".to_string(),
        email: format!("{id}@corp.example.com"),
        address: CompanyAddress {
            street: "14 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "411001".to_string(),
        },
        categories: categories.iter().map(|c| c.to_string()).collect(),
        candidate_quantity: 5,
        experience: Experience {
            years: 1,
            months: 6,
            days: 0,
        },
        job_location: JobLocation {
            city: city.to_string(),
            state: "Maharashtra".to_string(),
        },
        registration_status: status,
        registration_date: local_midday(reference_day()),
        business_document: None,
        is_mobile_verified: true,
    }
}
