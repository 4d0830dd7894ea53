use crate::model::TableKind;

/// Row-level shape shared by every record of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Leading non-blank rows (titles, column names, summary rows) to discard.
    pub skip_rows: usize,
    /// Records with fewer fields are ignored.
    pub min_columns: usize,
    /// Primary-key values marking stray header or summary rows.
    pub key_sentinels: &'static [&'static str],
}

const HARDWARE_SENTINELS: &[&str] = &["model", "Average"];

pub fn layout(kind: TableKind) -> TableLayout {
    match kind {
        TableKind::Cpu => TableLayout {
            skip_rows: 3,
            min_columns: 5,
            key_sentinels: HARDWARE_SENTINELS,
        },
        TableKind::Gpu => TableLayout {
            skip_rows: 3,
            min_columns: 2,
            key_sentinels: HARDWARE_SENTINELS,
        },
        TableKind::Location => TableLayout {
            skip_rows: 2,
            min_columns: 6,
            key_sentinels: &[],
        },
        TableKind::Pue => TableLayout {
            skip_rows: 1,
            min_columns: 2,
            key_sentinels: &[],
        },
    }
}

pub(crate) mod cpu_columns {
    pub const MODEL: usize = 0;
    pub const MANUFACTURER: usize = 1;
    pub const TDP: usize = 2;
    pub const CORES: usize = 3;
    pub const RELEASE_YEAR: usize = 4;
}

pub(crate) mod gpu_columns {
    pub const MODEL: usize = 0;
    pub const TDP: usize = 1;
    pub const CORES: usize = 2;
    pub const RELEASE_YEAR: usize = 3;
    pub const MEMORY: usize = 6;
}

pub(crate) mod location_columns {
    pub const CODE: usize = 0;
    pub const CONTINENT: usize = 1;
    pub const COUNTRY: usize = 2;
    pub const REGION: usize = 3;
    pub const CARBON_INTENSITY: usize = 4;
    pub const KIND: usize = 5;
}

pub(crate) mod pue_columns {
    pub const PROVIDER: usize = 0;
    pub const PUE: usize = 1;
}
