use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CAR_EMISSIONS_PER_KM_G, IDEAL_PUE, MEMORY_POWER_PER_GB, REFERENCE_FLIGHT_G,
    TREE_CO2_PER_MONTH_G, WH_PER_KWH, WORLD_CARBON_INTENSITY, WORLD_LOCATION,
};
use crate::request::{CalculationRequest, CoreType};
use crate::tables::ReferenceTables;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub energy_kwh: f64,
    pub carbon_gco2e: f64,
    pub tree_months: f64,
    pub car_km: f64,
    pub flight_percent: f64,
    pub compute_power_draw_w: f64,
    pub memory_power_draw_w: f64,
}

impl CalculationResult {
    pub fn total_power_draw_w(&self) -> f64 {
        self.compute_power_draw_w + self.memory_power_draw_w
    }

    pub fn compute_share_percent(&self) -> f64 {
        share_percent(self.compute_power_draw_w, self.total_power_draw_w())
    }

    pub fn memory_share_percent(&self) -> f64 {
        share_percent(self.memory_power_draw_w, self.total_power_draw_w())
    }
}

fn share_percent(part: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        return 0.0;
    }
    part / total * 100.0
}

/// Estimates energy use and emissions for one request.
///
/// Never fails: unknown models draw nothing, unknown platforms get an ideal PUE and
/// unknown locations use the world-average carbon intensity.
pub fn calculate(request: &CalculationRequest, tables: &ReferenceTables) -> CalculationResult {
    let compute_power_draw_w = compute_power_draw(request, tables);
    let memory_power_draw_w = memory_power_draw(request.memory_gb);
    let pue = effective_pue(request, tables);

    let energy_wh = request.runtime_hours
        * (compute_power_draw_w + memory_power_draw_w)
        * pue
        * request.multiplicative_factor;
    let energy_kwh = energy_wh / WH_PER_KWH;

    let carbon_gco2e = energy_kwh * carbon_intensity(&request.location, tables);

    CalculationResult {
        energy_kwh,
        carbon_gco2e,
        tree_months: carbon_gco2e / TREE_CO2_PER_MONTH_G,
        car_km: carbon_gco2e / CAR_EMISSIONS_PER_KM_G,
        flight_percent: carbon_gco2e / REFERENCE_FLIGHT_G * 100.0,
        compute_power_draw_w,
        memory_power_draw_w,
    }
}

/// Draw of the requested cores or GPUs, scaled by the usage factor, in watts.
pub fn compute_power_draw(request: &CalculationRequest, tables: &ReferenceTables) -> f64 {
    let count = request.device_count();

    let full_draw = if let Some(watts) = request.explicit_tdp() {
        watts * count
    } else if let Some(model) = request.model() {
        let resolved = match request.core_type {
            CoreType::Cpu => tables.cpu(model).map(|cpu| cpu.tdp_per_core() * count),
            CoreType::Gpu => tables.gpu(model).map(|gpu| gpu.tdp_watts * count),
        };
        resolved.unwrap_or_else(|| {
            debug!(core_type = %request.core_type, model, "Model not found in reference table");
            0.0
        })
    } else {
        0.0
    };

    full_draw * request.usage_factor()
}

pub fn memory_power_draw(memory_gb: f64) -> f64 {
    memory_gb * MEMORY_POWER_PER_GB
}

pub fn effective_pue(request: &CalculationRequest, tables: &ReferenceTables) -> f64 {
    request
        .explicit_pue()
        .or_else(|| tables.pue(&request.platform).map(|entry| entry.pue))
        .unwrap_or(IDEAL_PUE)
}

/// gCO2e per kWh for a location code.
pub fn carbon_intensity(location: &str, tables: &ReferenceTables) -> f64 {
    if location == WORLD_LOCATION {
        return WORLD_CARBON_INTENSITY;
    }
    tables
        .location(location)
        .map(|loc| loc.carbon_intensity)
        .unwrap_or(WORLD_CARBON_INTENSITY)
}
