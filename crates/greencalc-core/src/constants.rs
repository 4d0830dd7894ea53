//! Methodology constants (Green Algorithms).

/// Power draw of allocated memory, in W per GB.
pub const MEMORY_POWER_PER_GB: f64 = 0.3725;

/// CO2 sequestered by one mature tree in a year, in grams.
pub const TREE_CO2_PER_YEAR_G: f64 = 11_000.0;
pub const TREE_CO2_PER_MONTH_G: f64 = TREE_CO2_PER_YEAR_G / 12.0;

/// Average passenger car emissions, gCO2e per km.
pub const CAR_EMISSIONS_PER_KM_G: f64 = 175.0;

/// One passenger on a Paris to Dublin flight, gCO2e.
pub const REFERENCE_FLIGHT_G: f64 = 107_300.0;

/// World-average grid carbon intensity, gCO2e per kWh.
pub const WORLD_CARBON_INTENSITY: f64 = 475.0;
pub const WORLD_LOCATION: &str = "WORLD";

pub const IDEAL_PUE: f64 = 1.0;

pub const WH_PER_KWH: f64 = 1000.0;

pub const DEFAULT_CPU_MODEL_HINT: &str = "Core i7-4790";
pub const DEFAULT_GPU_MODEL_HINT: &str = "Tesla V100";
