//! Export tests — workbook generation and the dated download filename.

mod common;

use chrono::NaiveDate;

use common::*;
use staffdesk::export::{candidates_workbook, companies_workbook, export_filename};
use staffdesk::models::status::RegistrationStatus;

#[test]
fn candidates_workbook_produces_an_xlsx_buffer() {
    let records = vec![
        candidate("c1", "John Smith", "driver", "Pune", RegistrationStatus::Pending),
        candidate("c2", "Priya Patel", "cook", "Mumbai", RegistrationStatus::Approved),
    ];
    let rows: Vec<&_> = records.iter().collect();

    let buffer = candidates_workbook(&rows).expect("workbook should serialize");

    // XLSX is a zip container; check the magic bytes.
    assert!(buffer.len() > 4);
    assert_eq!(&buffer[..2], b"PK");
}

#[test]
fn companies_workbook_handles_an_empty_filtered_view() {
    let rows: Vec<&staffdesk::models::company::Company> = Vec::new();

    let buffer = companies_workbook(&rows).expect("workbook should serialize");

    assert_eq!(&buffer[..2], b"PK");
}

#[test]
fn companies_workbook_flattens_nested_fields() {
    let records = vec![company(
        "k1",
        "Crestline Services",
        &["driver", "cook"],
        "Pune",
        RegistrationStatus::Pending,
    )];
    let rows: Vec<&_> = records.iter().collect();

    // The joined category list and flattened experience feed the sheet.
    assert_eq!(records[0].categories_label(), "driver, cook");
    assert_eq!(records[0].experience_label(), "1y 6m 0d");
    assert!(companies_workbook(&rows).is_ok());
}

#[test]
fn export_filename_carries_the_export_date() {
    let name = export_filename("workforce_candidates");

    let date_part = name
        .strip_prefix("workforce_candidates_")
        .and_then(|rest| rest.strip_suffix(".xlsx"))
        .expect("filename should be base_date.xlsx");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").expect("date part should be ISO");
}
