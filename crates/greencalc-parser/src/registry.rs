use csv::StringRecord;

use crate::errors::ParserError;
use crate::formats::{
    is_placeholder_key, layout, read_records, CpuTableParser, GpuTableParser,
    LocationTableParser, PueTableParser,
};
use crate::model::{CpuSpec, GpuSpec, Location, PueEntry, TableKind};

/// Column mapping for one reference table.
///
/// `parse` drops leading header rows, short rows and placeholder keys according to
/// the table's [`layout`], then hands each remaining record to `parse_row`. Rows for
/// which `parse_row` returns `None` are skipped without error.
pub trait TableParser {
    type Row;

    fn kind(&self) -> TableKind;

    fn parse_row(&self, record: &StringRecord) -> Option<Self::Row>;

    fn parse(&self, content: &str) -> Result<Vec<Self::Row>, ParserError> {
        self.parse_bytes(content.as_bytes())
    }

    fn parse_bytes(&self, content: &[u8]) -> Result<Vec<Self::Row>, ParserError> {
        let kind = self.kind();
        let layout = layout(kind);
        let records = read_records(kind, content)?;

        Ok(records
            .iter()
            .skip(layout.skip_rows)
            .filter(|record| record.len() >= layout.min_columns)
            .filter(|record| !is_placeholder_key(record.get(0), layout.key_sentinels))
            .filter_map(|record| self.parse_row(record))
            .collect())
    }
}

pub fn parse_cpus(content: &str) -> Result<Vec<CpuSpec>, ParserError> {
    CpuTableParser.parse(content)
}

pub fn parse_gpus(content: &str) -> Result<Vec<GpuSpec>, ParserError> {
    GpuTableParser.parse(content)
}

pub fn parse_locations(content: &str) -> Result<Vec<Location>, ParserError> {
    LocationTableParser.parse(content)
}

pub fn parse_pues(content: &str) -> Result<Vec<PueEntry>, ParserError> {
    PueTableParser.parse(content)
}
