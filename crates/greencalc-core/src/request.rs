use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::WORLD_LOCATION;
use crate::tables::ReferenceTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoreType {
    #[default]
    Cpu,
    Gpu,
}

impl CoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoreType::Cpu => "CPU",
            CoreType::Gpu => "GPU",
        }
    }
}

impl fmt::Display for CoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoreType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(CoreType::Cpu),
            "gpu" => Ok(CoreType::Gpu),
            other => Err(format!("unknown core type '{other}' (expected CPU or GPU)")),
        }
    }
}

/// Everything the calculator needs besides the reference tables.
///
/// Optional numeric overrides count as given only when present, non-zero and not NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    pub runtime_hours: f64,
    pub core_type: CoreType,
    pub num_cores: Option<i64>,
    pub num_gpus: Option<i64>,
    pub cpu_model: Option<String>,
    pub gpu_model: Option<String>,
    pub cpu_tdp_override: Option<f64>,
    pub gpu_tdp_override: Option<f64>,
    pub memory_gb: f64,
    pub platform: String,
    pub location: String,
    pub cpu_usage_factor: Option<f64>,
    pub gpu_usage_factor: Option<f64>,
    pub pue_override: Option<f64>,
    pub multiplicative_factor: f64,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        Self {
            runtime_hours: 12.0,
            core_type: CoreType::Cpu,
            num_cores: Some(12),
            num_gpus: Some(1),
            cpu_model: None,
            gpu_model: None,
            cpu_tdp_override: None,
            gpu_tdp_override: None,
            memory_gb: 64.0,
            platform: "Unknown".to_string(),
            location: WORLD_LOCATION.to_string(),
            cpu_usage_factor: Some(1.0),
            gpu_usage_factor: Some(1.0),
            pue_override: None,
            multiplicative_factor: 1.0,
        }
    }
}

impl CalculationRequest {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Requested cores or GPUs for the selected core type. Absent or non-positive means one.
    pub fn device_count(&self) -> f64 {
        let count = match self.core_type {
            CoreType::Cpu => self.num_cores,
            CoreType::Gpu => self.num_gpus,
        };
        match count {
            Some(n) if n > 0 => n as f64,
            _ => 1.0,
        }
    }

    pub fn model(&self) -> Option<&str> {
        let model = match self.core_type {
            CoreType::Cpu => self.cpu_model.as_deref(),
            CoreType::Gpu => self.gpu_model.as_deref(),
        };
        model.filter(|name| !name.is_empty())
    }

    pub fn explicit_tdp(&self) -> Option<f64> {
        given(match self.core_type {
            CoreType::Cpu => self.cpu_tdp_override,
            CoreType::Gpu => self.gpu_tdp_override,
        })
    }

    pub fn usage_factor(&self) -> f64 {
        let factor = match self.core_type {
            CoreType::Cpu => self.cpu_usage_factor,
            CoreType::Gpu => self.gpu_usage_factor,
        };
        factor.unwrap_or(1.0)
    }

    pub fn explicit_pue(&self) -> Option<f64> {
        given(self.pue_override)
    }

    /// Fills in the preset model for the selected core type when the request names
    /// neither a model nor an override wattage. Returns whether a model was filled.
    pub fn fill_default_model(&mut self, tables: &ReferenceTables) -> bool {
        if self.model().is_some() || self.explicit_tdp().is_some() {
            return false;
        }

        match self.core_type {
            CoreType::Cpu => match tables.default_cpu_model() {
                Some(cpu) => {
                    self.cpu_model = Some(cpu.model.clone());
                    true
                }
                None => false,
            },
            CoreType::Gpu => match tables.default_gpu_model() {
                Some(gpu) => {
                    self.gpu_model = Some(gpu.model.clone());
                    true
                }
                None => false,
            },
        }
    }
}

pub fn runtime_from_hours_minutes(hours: f64, minutes: f64) -> f64 {
    hours + minutes / 60.0
}

fn given(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
