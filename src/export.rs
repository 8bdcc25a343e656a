//! Spreadsheet export of the currently filtered view. Nested fields are
//! flattened into fixed columns per entity kind; the result is a single-sheet
//! XLSX buffer handed to the browser as a download.

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::models::candidate::Candidate;
use crate::models::company::Company;

const CANDIDATE_COLUMNS: &[(&str, f64)] = &[
    ("ID", 26.0),
    ("Full Name", 22.0),
    ("Mobile", 15.0),
    ("Email", 26.0),
    ("Village/Town/City", 20.0),
    ("Landmark", 18.0),
    ("PIN Code", 10.0),
    ("Category", 16.0),
    ("Job Location", 16.0),
    ("Status", 11.0),
    ("Payment Status", 14.0),
    ("Registration Date", 17.0),
];

const COMPANY_COLUMNS: &[(&str, f64)] = &[
    ("ID", 26.0),
    ("Company Name", 24.0),
    ("Contact Person", 20.0),
    ("Mobile", 15.0),
    ("Email", 26.0),
    ("Street", 22.0),
    ("City", 14.0),
    ("State", 14.0),
    ("PIN Code", 10.0),
    ("Categories", 26.0),
    ("Required Candidates", 12.0),
    ("Experience", 12.0),
    ("Job Location City", 16.0),
    ("Job Location State", 16.0),
    ("Status", 11.0),
    ("Registration Date", 17.0),
];

/// `{base}_{date-of-export}.xlsx`
pub fn export_filename(base: &str) -> String {
    format!("{base}_{}.xlsx", Local::now().format("%Y-%m-%d"))
}

fn sheet_with_header(
    workbook: &mut Workbook,
    name: &str,
    columns: &[(&str, f64)],
) -> Result<(), XlsxError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x1E293B))
        .set_border(FormatBorder::Thin);

    for (i, (label, width)) in columns.iter().enumerate() {
        worksheet.set_column_width(i as u16, *width)?;
        worksheet.write_string_with_format(0, i as u16, *label, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_row(worksheet: &mut Worksheet, row: u32, cells: &[String]) -> Result<(), XlsxError> {
    for (col, cell) in cells.iter().enumerate() {
        worksheet.write_string(row, col as u16, cell)?;
    }
    Ok(())
}

pub fn candidates_workbook(rows: &[&Candidate]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    sheet_with_header(&mut workbook, "Candidates", CANDIDATE_COLUMNS)?;
    let worksheet = workbook.worksheet_from_index(0)?;

    for (idx, c) in rows.iter().enumerate() {
        let cells = [
            c.id.clone(),
            c.full_name.clone(),
            c.mobile.clone(),
            c.email.clone().unwrap_or_else(|| "N/A".to_string()),
            c.address.village_town_city.clone(),
            c.address.landmark.clone().unwrap_or_default(),
            c.address.pincode.clone(),
            c.category.clone(),
            c.job_location_city.clone(),
            c.registration_status.label().to_string(),
            c.payment_status.clone().unwrap_or_else(|| "pending".to_string()),
            c.registered_label(),
        ];
        write_row(worksheet, idx as u32 + 1, &cells)?;
    }

    if !rows.is_empty() {
        worksheet.autofilter(0, 0, rows.len() as u32, CANDIDATE_COLUMNS.len() as u16 - 1)?;
    }
    workbook.save_to_buffer()
}

pub fn companies_workbook(rows: &[&Company]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    sheet_with_header(&mut workbook, "Companies", COMPANY_COLUMNS)?;
    let worksheet = workbook.worksheet_from_index(0)?;

    for (idx, c) in rows.iter().enumerate() {
        let cells = [
            c.id.clone(),
            c.company_name.clone(),
            c.contact_person.clone(),
            c.mobile.clone(),
            c.email.clone(),
            c.address.street.clone(),
            c.address.city.clone(),
            c.address.state.clone(),
            c.address.pincode.clone(),
            c.categories_label(),
            c.candidate_quantity.to_string(),
            c.experience_label(),
            c.job_location.city.clone(),
            c.job_location.state.clone(),
            c.registration_status.label().to_string(),
            c.registered_label(),
        ];
        write_row(worksheet, idx as u32 + 1, &cells)?;
    }

    if !rows.is_empty() {
        worksheet.autofilter(0, 0, rows.len() as u32, COMPANY_COLUMNS.len() as u16 - 1)?;
    }
    workbook.save_to_buffer()
}
