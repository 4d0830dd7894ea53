use csv::StringRecord;

use crate::model::{CpuSpec, TableKind};
use crate::registry::TableParser;

use super::schema::cpu_columns as col;
use super::{optional_text, parse_finite, parse_optional_year};

pub struct CpuTableParser;

impl Default for CpuTableParser {
    fn default() -> Self {
        Self
    }
}

impl TableParser for CpuTableParser {
    type Row = CpuSpec;

    fn kind(&self) -> TableKind {
        TableKind::Cpu
    }

    fn parse_row(&self, record: &StringRecord) -> Option<CpuSpec> {
        let tdp_watts = parse_finite(record.get(col::TDP))?;
        // Used as a divisor when scaling TDP to the requested core count.
        let cores = parse_finite(record.get(col::CORES)).filter(|cores| *cores > 0.0)?;

        Some(CpuSpec {
            model: optional_text(record, col::MODEL),
            manufacturer: optional_text(record, col::MANUFACTURER),
            tdp_watts,
            cores,
            release_year: parse_optional_year(record.get(col::RELEASE_YEAR)),
        })
    }
}
