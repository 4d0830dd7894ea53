use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use greencalc_core::{CalculationRequest, CalculationResult, ReferenceTables};
use serde::Serialize;

use crate::cli::ListTarget;

#[derive(Debug, Serialize)]
pub struct EstimateOutput<'a> {
    pub request: &'a CalculationRequest,
    pub result: &'a CalculationResult,
    pub pue: f64,
    /// gCO2e per kWh.
    pub carbon_intensity: f64,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table
}

pub fn estimate_table(output: &EstimateOutput<'_>) -> Table {
    let result = output.result;
    let request = output.request;

    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);

    let hardware = match request.model() {
        Some(model) => format!("{} ({model})", request.core_type),
        None => request.core_type.to_string(),
    };

    let rows = [
        ("Carbon footprint", format!("{:.2} gCO2e", result.carbon_gco2e)),
        ("Energy needed", format!("{:.2} kWh", result.energy_kwh)),
        ("Carbon sequestration", format!("{:.2} tree-months", result.tree_months)),
        ("In a passenger car", format!("{:.2} km", result.car_km)),
        ("Of a flight Paris-Dublin", format!("{:.2}%", result.flight_percent)),
        ("Hardware", hardware),
        (
            "Cores power draw",
            format!(
                "{:.2} W ({:.1}%)",
                result.compute_power_draw_w,
                result.compute_share_percent()
            ),
        ),
        (
            "Memory power draw",
            format!(
                "{:.2} W ({:.1}%)",
                result.memory_power_draw_w,
                result.memory_share_percent()
            ),
        ),
        ("Total power draw", format!("{:.2} W", result.total_power_draw_w())),
        ("PUE", format!("{:.2}", output.pue)),
        (
            "Carbon intensity",
            format!("{:.2} gCO2e/kWh ({})", output.carbon_intensity, request.location),
        ),
    ];

    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    table
}

pub fn list_table(target: ListTarget, tables: &ReferenceTables) -> Table {
    let mut table = new_table();
    match target {
        ListTarget::Cpus => {
            table.set_header(vec!["Model", "Manufacturer", "TDP (W)", "Cores", "Released"]);
            for cpu in tables.cpus() {
                table.add_row(vec![
                    cpu.model.clone(),
                    cpu.manufacturer.clone(),
                    cpu.tdp_watts.to_string(),
                    cpu.cores.to_string(),
                    optional(cpu.release_year),
                ]);
            }
        }
        ListTarget::Gpus => {
            table.set_header(vec!["Model", "TDP (W)", "Cores", "Released", "Memory (GB)"]);
            for gpu in tables.gpus() {
                table.add_row(vec![
                    gpu.model.clone(),
                    gpu.tdp_watts.to_string(),
                    optional(gpu.cores),
                    optional(gpu.release_year),
                    optional(gpu.memory_gb),
                ]);
            }
        }
        ListTarget::Locations => {
            table.set_header(vec!["Continent", "Country", "Region", "Code", "gCO2e/kWh"]);
            for continent in tables.locations_by_region() {
                for country in &continent.countries {
                    for location in &country.locations {
                        table.add_row(vec![
                            continent.continent.to_string(),
                            country.country.to_string(),
                            location.region.clone(),
                            location.code.clone(),
                            location.carbon_intensity.to_string(),
                        ]);
                    }
                }
            }
        }
        ListTarget::Platforms => {
            table.set_header(vec!["Provider", "PUE"]);
            for entry in tables.pues() {
                table.add_row(vec![entry.provider.clone(), entry.pue.to_string()]);
            }
        }
    }
    table
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
