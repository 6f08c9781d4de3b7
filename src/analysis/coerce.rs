//! Per-cell coercion into typed dates and sales values.
//!
//! Coercion fails per cell, never per table: a failure here only drops the row.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::Cell;

/// Largest valid Excel serial day (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Coerce a cell to a calendar date.
///
/// Already-typed date cells are taken as-is (time of day is discarded). Text
/// gets a best-effort parse over a small set of common formats. Plain numbers
/// are read as Excel serial day numbers, which is what an unformatted date
/// column looks like in a workbook.
pub fn coerce_date(cell: &Cell) -> Result<NaiveDate, String> {
    match cell {
        Cell::DateTime(dt) => Ok(dt.date()),
        Cell::Text(s) => parse_date(s),
        Cell::Number(v) => excel_serial_to_date(*v)
            .ok_or_else(|| format!("Number {v} is not a valid spreadsheet date.")),
        Cell::Empty => Err("Missing date.".to_string()),
        Cell::Bool(_) => Err("Boolean is not a date.".to_string()),
        Cell::Error(e) => Err(format!("Date cell holds an error value ({e}).")),
    }
}

/// Coerce a cell to a finite sales amount. Anything else is "missing".
pub fn coerce_sales(cell: &Cell) -> Result<f64, String> {
    let value = match cell {
        Cell::Number(v) => *v,
        Cell::Text(s) => parse_amount(s).ok_or_else(|| format!("Sales value '{s}' is not numeric."))?,
        Cell::Empty => return Err("Missing sales value.".to_string()),
        Cell::Bool(_) => return Err("Boolean is not a sales value.".to_string()),
        Cell::DateTime(_) => return Err("Date is not a sales value.".to_string()),
        Cell::Error(e) => return Err(format!("Sales cell holds an error value ({e}).")),
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err("Non-finite sales value.".to_string())
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    // ISO first. Ambiguous numeric dates read month-first (`05/01/2023` is
    // May 1); day-first is only tried when month-first cannot parse.
    const DATE_FMTS: [&str; 8] = [
        "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%m-%d-%Y", "%d-%m-%Y", "%m.%d.%Y", "%d.%m.%Y",
    ];
    const DATETIME_FMTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    let s = s.trim();
    for fmt in DATE_FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    for fmt in DATETIME_FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(format!(
        "Invalid date '{s}'. Expected one of: YYYY-MM-DD, YYYY/MM/DD, MM/DD/YYYY, DD/MM/YYYY, \
         MM-DD-YYYY, DD-MM-YYYY, MM.DD.YYYY, DD.MM.YYYY, YYYY-MM-DD HH:MM[:SS], YYYY-MM-DDTHH:MM:SS."
    ))
}

fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Excel 1900 date system. Counting from 1899-12-30 matches Excel for every
/// serial after its fictitious 1900-02-29 (serial 60).
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.floor() as i64))
}
