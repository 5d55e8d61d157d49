//! Workbook reading
//!
//! The first worksheet is read; its first row holds the column headers.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use serde_json::{Map, Number, Value};

use promo_common::{AppError, AppResult};

use super::cell::cell_text;

/// Records of the first worksheet, keyed by header
pub fn workbook_records(bytes: &[u8]) -> AppResult<Vec<Map<String, Value>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AppError::invalid_input(format!("sheet is not a readable workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::invalid_input("workbook has no worksheet"))?
        .map_err(|e| AppError::invalid_input(format!("cannot read first worksheet: {e}")))?;

    Ok(range_records(&range))
}

/// Turn a worksheet range into header-keyed records
///
/// Columns with a blank header are dropped; a repeated header keeps its
/// first column.
pub fn range_records(range: &Range<Data>) -> Vec<Map<String, Value>> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<Option<String>> = header_row
        .iter()
        .map(|cell| cell_text(&cell_value(cell)))
        .collect();

    rows.map(|row| {
        let mut record = Map::new();
        for (header, cell) in headers.iter().zip(row) {
            if let Some(header) = header {
                record
                    .entry(header.clone())
                    .or_insert_with(|| cell_value(cell));
            }
        }
        record
    })
    .collect()
}

/// A cell as the value an exported record would carry
///
/// Date cells become spreadsheet serial numbers, which `cell_date` accepts.
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_value(*f),
        Data::String(s) | Data::DateTimeIso(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => float_value(dt.as_f64()),
        Data::DurationIso(_) | Data::Error(_) | Data::Empty => Value::Null,
    }
}

fn float_value(f: f64) -> Value {
    Number::from_f64(f).map_or(Value::Null, Value::Number)
}
