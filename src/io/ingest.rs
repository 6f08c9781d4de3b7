//! Table ingest: raw bytes in, [`RawTable`] out.
//!
//! This module only turns bytes into rows of typed cells. It does no
//! validation beyond "is this readable at all"; column counting, coercion and
//! row dropping live in `analysis`.
//!
//! Supported inputs:
//! - **Workbooks** (xlsx/xlsm/xlsb/xls/ods), detected by content, read with `calamine`.
//!   Only the first worksheet is used.
//! - **CSV** for anything else that is valid UTF-8.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::domain::{Cell, RawTable};
use crate::error::LoadError;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Container format, decided from the leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Workbook,
    Csv,
}

impl TableFormat {
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(OLE_MAGIC) {
            TableFormat::Workbook
        } else {
            TableFormat::Csv
        }
    }
}

/// Parse raw bytes into a table.
pub fn parse_table(bytes: &[u8]) -> Result<RawTable, LoadError> {
    let format = TableFormat::sniff(bytes);
    debug!(?format, len = bytes.len(), "parsing sales table");
    match format {
        TableFormat::Workbook => read_workbook(bytes),
        TableFormat::Csv => read_csv(bytes),
    }
}

/// Read the first worksheet of a workbook held in memory.
pub fn read_workbook(bytes: &[u8]) -> Result<RawTable, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| LoadError::parse(format!("failed to open workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::parse("workbook has no worksheets"))?
        .map_err(|e| LoadError::parse(format!("failed to read first worksheet: {e}")))?;

    Ok(table_from_range(&range))
}

/// Convert a worksheet range into a table. The first row is the header row.
pub fn table_from_range(range: &Range<Data>) -> RawTable {
    let mut rows = range.rows();

    let Some(header) = rows.next() else {
        return RawTable::default();
    };
    let headers = header.iter().map(|c| c.to_string()).collect();
    let rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    RawTable { headers, rows }
}

/// Map a `calamine` cell onto our cell type.
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Bool(b) => Cell::Bool(*b),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::from_text(s),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => Cell::DateTime(value),
            None => Cell::Error("unreadable date-time cell".to_string()),
        },
        // ODS stores dates as ISO text.
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::from_text(s)),
        other => Cell::Error(other.to_string()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| s.parse::<NaiveDate>().ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Read CSV text. A UTF-8 BOM is tolerated; any other non-UTF-8 input is rejected.
pub fn read_csv(bytes: &[u8]) -> Result<RawTable, LoadError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| LoadError::parse(format!("input is neither a workbook nor UTF-8 text: {e}")))?;
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| LoadError::parse(format!("failed to read CSV headers: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: header is line 1 and lines are 1-based.
        let record =
            result.map_err(|e| LoadError::parse(format!("CSV parse error on line {}: {e}", idx + 2)))?;
        rows.push(record.iter().map(Cell::from_text).collect());
    }

    Ok(RawTable { headers, rows })
}
