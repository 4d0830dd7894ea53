use csv::StringRecord;

use crate::model::{GpuSpec, TableKind};
use crate::registry::TableParser;

use super::schema::gpu_columns as col;
use super::{optional_text, parse_finite, parse_optional_f64, parse_optional_year};

pub struct GpuTableParser;

impl Default for GpuTableParser {
    fn default() -> Self {
        Self
    }
}

impl TableParser for GpuTableParser {
    type Row = GpuSpec;

    fn kind(&self) -> TableKind {
        TableKind::Gpu
    }

    fn parse_row(&self, record: &StringRecord) -> Option<GpuSpec> {
        let tdp_watts = parse_finite(record.get(col::TDP))?;

        Some(GpuSpec {
            model: optional_text(record, col::MODEL),
            tdp_watts,
            cores: parse_optional_f64(record.get(col::CORES)),
            release_year: parse_optional_year(record.get(col::RELEASE_YEAR)),
            memory_gb: parse_optional_f64(record.get(col::MEMORY)),
        })
    }
}
