use csv::StringRecord;

use crate::model::{Location, TableKind};
use crate::registry::TableParser;

use super::schema::location_columns as col;
use super::{optional_text, parse_finite};

pub struct LocationTableParser;

impl Default for LocationTableParser {
    fn default() -> Self {
        Self
    }
}

impl TableParser for LocationTableParser {
    type Row = Location;

    fn kind(&self) -> TableKind {
        TableKind::Location
    }

    fn parse_row(&self, record: &StringRecord) -> Option<Location> {
        let carbon_intensity = parse_finite(record.get(col::CARBON_INTENSITY))?;

        Some(Location {
            code: optional_text(record, col::CODE),
            continent: optional_text(record, col::CONTINENT),
            country: optional_text(record, col::COUNTRY),
            region: optional_text(record, col::REGION),
            carbon_intensity,
            kind: optional_text(record, col::KIND),
        })
    }
}
