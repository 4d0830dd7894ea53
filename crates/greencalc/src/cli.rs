use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use greencalc_core::{runtime_from_hours_minutes, CalculationRequest, CoreType};

#[derive(Parser, Debug)]
#[command(author, version, about = "Carbon footprint estimates for computations", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./greencalc.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate energy use and emissions of a computation
    Estimate(EstimateArgs),
    /// Print one of the loaded reference tables
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub struct EstimateArgs {
    /// Read the request from a TOML file; flags override its values
    #[arg(long)]
    pub request: Option<PathBuf>,
    /// Runtime, whole hours
    #[arg(long)]
    pub hours: Option<f64>,
    /// Runtime, additional minutes
    #[arg(long)]
    pub minutes: Option<f64>,
    /// CPU or GPU
    #[arg(long)]
    pub core_type: Option<CoreType>,
    /// Number of CPU cores used (non-positive counts as one)
    #[arg(long, allow_negative_numbers = true)]
    pub cores: Option<i64>,
    /// Number of GPUs used (non-positive counts as one)
    #[arg(long, allow_negative_numbers = true)]
    pub gpus: Option<i64>,
    #[arg(long)]
    pub cpu_model: Option<String>,
    #[arg(long)]
    pub gpu_model: Option<String>,
    /// Per-core TDP in watts, instead of a CPU model
    #[arg(long)]
    pub cpu_tdp: Option<f64>,
    /// Per-GPU TDP in watts, instead of a GPU model
    #[arg(long)]
    pub gpu_tdp: Option<f64>,
    /// Memory allocated, in GB
    #[arg(long)]
    pub memory_gb: Option<f64>,
    /// Computing platform or provider, used for the PUE lookup
    #[arg(long)]
    pub platform: Option<String>,
    /// Location code, e.g. FR or US-CA (WORLD for the world average)
    #[arg(long)]
    pub location: Option<String>,
    /// CPU usage factor between 0 and 1
    #[arg(long)]
    pub cpu_usage: Option<f64>,
    /// GPU usage factor between 0 and 1
    #[arg(long)]
    pub gpu_usage: Option<f64>,
    /// Explicit PUE, instead of the platform's
    #[arg(long)]
    pub pue: Option<f64>,
    /// Multiplicative factor, e.g. the number of runs
    #[arg(long)]
    pub factor: Option<f64>,
    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    pub fn build_request(&self) -> Result<CalculationRequest> {
        let base = match &self.request {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read request file {}", path.display()))?;
                CalculationRequest::from_toml_str(&content)
                    .with_context(|| format!("failed to parse request file {}", path.display()))?
            }
            None => CalculationRequest::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut request: CalculationRequest) -> CalculationRequest {
        if self.hours.is_some() || self.minutes.is_some() {
            request.runtime_hours = runtime_from_hours_minutes(
                self.hours.unwrap_or_default(),
                self.minutes.unwrap_or_default(),
            );
        }
        if let Some(core_type) = self.core_type {
            request.core_type = core_type;
        }
        if let Some(cores) = self.cores {
            request.num_cores = Some(cores);
        }
        if let Some(gpus) = self.gpus {
            request.num_gpus = Some(gpus);
        }
        if let Some(model) = &self.cpu_model {
            request.cpu_model = Some(model.clone());
        }
        if let Some(model) = &self.gpu_model {
            request.gpu_model = Some(model.clone());
        }
        if let Some(watts) = self.cpu_tdp {
            request.cpu_tdp_override = Some(watts);
        }
        if let Some(watts) = self.gpu_tdp {
            request.gpu_tdp_override = Some(watts);
        }
        if let Some(memory) = self.memory_gb {
            request.memory_gb = memory;
        }
        if let Some(platform) = &self.platform {
            request.platform = platform.clone();
        }
        if let Some(location) = &self.location {
            request.location = location.clone();
        }
        if let Some(usage) = self.cpu_usage {
            request.cpu_usage_factor = Some(usage);
        }
        if let Some(usage) = self.gpu_usage {
            request.gpu_usage_factor = Some(usage);
        }
        if let Some(pue) = self.pue {
            request.pue_override = Some(pue);
        }
        if let Some(factor) = self.factor {
            request.multiplicative_factor = factor;
        }
        request
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub table: ListTarget,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    Cpus,
    Gpus,
    Locations,
    Platforms,
}
