use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Cpu,
    Gpu,
    Location,
    Pue,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::Cpu,
        TableKind::Gpu,
        TableKind::Location,
        TableKind::Pue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Cpu => "cpu",
            TableKind::Gpu => "gpu",
            TableKind::Location => "location",
            TableKind::Pue => "pue",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A processor model. `tdp_watts` is the whole package; divide by `cores` for a per-core draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuSpec {
    pub model: String,
    pub manufacturer: String,
    pub tdp_watts: f64,
    pub cores: f64,
    pub release_year: Option<i32>,
}

impl CpuSpec {
    pub fn tdp_per_core(&self) -> f64 {
        self.tdp_watts / self.cores
    }
}

/// A graphics card model. `tdp_watts` is already per device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuSpec {
    pub model: String,
    pub tdp_watts: f64,
    pub cores: Option<f64>,
    pub release_year: Option<i32>,
    pub memory_gb: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub code: String,
    pub continent: String,
    pub country: String,
    pub region: String,
    /// gCO2e per kWh.
    pub carbon_intensity: f64,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PueEntry {
    pub provider: String,
    pub pue: f64,
}
