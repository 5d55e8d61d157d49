//! Retroplanning sheet decoding
//!
//! The sheet is the planning workbook itself (first worksheet, headers on
//! the first row) or a JSON export of it: an array with one object per row,
//! keyed by the column headers.

mod cell;
mod row;
mod workbook;

use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

use promo_common::{AppError, AppResult};
use promo_core::Promo;

pub use cell::{cell_date, cell_text};
pub use row::{columns, SheetRow};

/// Promos built from a sheet, plus the number of rows dropped for bad dates
#[derive(Debug, Clone, Default)]
pub struct PromoBatch {
    pub promos: Vec<Promo>,
    pub skipped: usize,
}

/// File format of a downloaded sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// `.xlsx`, `.xls`, `.xlsb` or `.ods` workbook
    Workbook,
    /// JSON export
    Json,
}

impl SheetFormat {
    /// Format implied by the file extension; anything but `.json` is read as
    /// a workbook
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Workbook,
        }
    }
}

/// Decode a sheet into rows
pub fn decode_sheet(bytes: &[u8], format: SheetFormat) -> AppResult<Vec<SheetRow>> {
    match format {
        SheetFormat::Workbook => Ok(workbook::workbook_records(bytes)?
            .iter()
            .map(SheetRow::from_record)
            .collect()),
        SheetFormat::Json => decode_json(bytes),
    }
}

fn decode_json(bytes: &[u8]) -> AppResult<Vec<SheetRow>> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::invalid_input(format!("sheet is not valid JSON: {e}")))?;

    let Value::Array(records) = document else {
        return Err(AppError::invalid_input("sheet must be an array of rows"));
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| match record {
            Value::Object(fields) => Ok(SheetRow::from_record(fields)),
            _ => Err(AppError::invalid_input(format!(
                "row {index} is not an object"
            ))),
        })
        .collect()
}

/// Turn rows into promos as of `today`, dropping rows without usable dates
pub fn build_promos(rows: Vec<SheetRow>, today: NaiveDate) -> PromoBatch {
    let mut batch = PromoBatch::default();

    for (index, row) in rows.into_iter().enumerate() {
        match row.into_promo(today) {
            Some(promo) => batch.promos.push(promo),
            None => {
                debug!(row = index, "Skipping row without valid dates");
                batch.skipped += 1;
            }
        }
    }

    batch
}
