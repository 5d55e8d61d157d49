//! One row of the retroplanning sheet

use chrono::NaiveDate;
use serde_json::{Map, Value};

use promo_core::Promo;

use super::cell::{cell_date, cell_text};

/// Column headers of the retroplanning sheet
pub mod columns {
    pub const DATE_CLOTURE_GAME: &str = "Clôture GAME \nEnvoi Supply";
    pub const BCP: &str = "N°BCP";
    pub const END_DATE: &str = "FERMETURE ENGAGEMENT niveau magasin";
    pub const START_DATE: &str = "OUVERTURE ENGAGEMENT";
    pub const TITLE: &str = "CATALOGUES / COLLECTIONS";
    pub const YEAR: &str = "Année";
}

/// The columns of a sheet row the workflow uses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    pub title: Option<String>,
    pub year: Option<String>,
    pub bcp: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub date_cloture_game: Option<NaiveDate>,
}

impl SheetRow {
    /// Pick the known columns out of an exported record
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let get = |header: &str| lookup(record, header).unwrap_or(&Value::Null);

        Self {
            title: cell_text(get(columns::TITLE)),
            year: cell_text(get(columns::YEAR)),
            bcp: cell_text(get(columns::BCP)),
            start_date: cell_date(get(columns::START_DATE)),
            end_date: cell_date(get(columns::END_DATE)),
            date_cloture_game: cell_date(get(columns::DATE_CLOTURE_GAME)),
        }
    }

    /// Build the promo for this row, or `None` if any of its dates is missing
    pub fn into_promo(self, today: NaiveDate) -> Option<Promo> {
        let (start, end, cloture) = (self.start_date?, self.end_date?, self.date_cloture_game?);
        let code = Promo::compose_code(
            self.year.as_deref().unwrap_or_default(),
            self.bcp.as_deref().unwrap_or_default(),
        );

        Some(Promo::new(self.title, code, start, end, cloture, today))
    }
}

/// Find a column by exact header, then by header with whitespace collapsed.
///
/// Multi-line headers come out of exports with `\n`, `\r\n` or a plain space
/// depending on the tool.
fn lookup<'a>(record: &'a Map<String, Value>, header: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(header) {
        return Some(value);
    }

    let wanted = collapse_whitespace(header);
    record
        .iter()
        .find(|(key, _)| collapse_whitespace(key) == wanted)
        .map(|(_, value)| value)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
