use csv::StringRecord;

use crate::model::{PueEntry, TableKind};
use crate::registry::TableParser;

use super::schema::pue_columns as col;
use super::{optional_text, parse_finite};

pub struct PueTableParser;

impl Default for PueTableParser {
    fn default() -> Self {
        Self
    }
}

impl TableParser for PueTableParser {
    type Row = PueEntry;

    fn kind(&self) -> TableKind {
        TableKind::Pue
    }

    fn parse_row(&self, record: &StringRecord) -> Option<PueEntry> {
        let pue = parse_finite(record.get(col::PUE))?;

        Some(PueEntry {
            provider: optional_text(record, col::PROVIDER),
            pue,
        })
    }
}
