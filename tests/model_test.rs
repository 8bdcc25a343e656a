//! Wire-decoding tests — camelCase field names, id aliases, category
//! normalization, and the unknown-status fallback.

use staffdesk::models::candidate::Candidate;
use staffdesk::models::company::Company;
use staffdesk::models::status::RegistrationStatus;

const CANDIDATE_JSON: &str = r#"{
    "_id": "665f1c2a9b3e4d0012ab34cd",
    "fullName": "John Smith",
    "mobile": "9876543210",
    "email": "john@example.com",
    "address": { "villageTownCity": "Pune", "pincode": "411001" },
    "category": "driver",
    "jobLocationCity": "Pune",
    "registrationStatus": "approved",
    "registrationDate": "2025-05-01T09:30:00.000Z",
    "isMobileVerified": true
}"#;

#[test]
fn candidate_decodes_from_service_json() {
    let c: Candidate = serde_json::from_str(CANDIDATE_JSON).expect("candidate should decode");

    assert_eq!(c.id, "665f1c2a9b3e4d0012ab34cd");
    assert_eq!(c.full_name, "John Smith");
    assert_eq!(c.registration_status, RegistrationStatus::Approved);
    assert_eq!(c.address.village_town_city, "Pune");
    assert!(c.address.landmark.is_none());
    assert!(c.photo.is_none());
}

#[test]
fn unknown_registration_status_falls_back_to_pending() {
    let json = CANDIDATE_JSON.replace("approved", "on-hold");

    let c: Candidate = serde_json::from_str(&json).expect("candidate should decode");

    assert_eq!(c.registration_status, RegistrationStatus::Pending);
}

fn company_json(categories: &str) -> String {
    format!(
        r#"{{
            "id": "77aa",
            "companyName": "Crestline Services",
            "contactPerson": "Asha Rao",
            "mobile": "9123456780",
            "email": "ops@crestline.example.com",
            "address": {{ "street": "14 MG Road", "city": "Pune", "state": "MH", "pincode": "411001" }},
            "categories": {categories},
            "candidateQuantity": 5,
            "experience": {{ "years": 1, "months": 6, "days": 0 }},
            "jobLocation": {{ "city": "Pune", "state": "MH" }},
            "registrationStatus": "pending",
            "registrationDate": "2025-05-01T09:30:00.000Z"
        }}"#
    )
}

#[test]
fn company_categories_decode_from_a_genuine_list() {
    let c: Company =
        serde_json::from_str(&company_json(r#"["driver", "cook"]"#)).expect("company should decode");

    assert_eq!(c.categories, vec!["driver", "cook"]);
}

// Older records carry the list JSON-encoded inside a string.
#[test]
fn company_categories_decode_from_a_json_encoded_string() {
    let c: Company = serde_json::from_str(&company_json(r#""[\"driver\", \"cook\"]""#))
        .expect("company should decode");

    assert_eq!(c.categories, vec!["driver", "cook"]);
}

#[test]
fn company_categories_decode_from_a_bare_string() {
    let c: Company =
        serde_json::from_str(&company_json(r#""driver""#)).expect("company should decode");

    assert_eq!(c.categories, vec!["driver"]);
}

#[test]
fn company_categories_default_to_empty_when_missing() {
    let json = company_json("null");

    let c: Company = serde_json::from_str(&json).expect("company should decode");

    assert!(c.categories.is_empty());
}
