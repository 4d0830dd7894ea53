pub mod calculator;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod request;
pub mod tables;

pub use calculator::{calculate, CalculationResult};
pub use config::GreencalcConfig;
pub use error::LoadError;
pub use greencalc_parser::{CpuSpec, GpuSpec, Location, PueEntry, TableKind};
pub use request::{runtime_from_hours_minutes, CalculationRequest, CoreType};
pub use tables::ReferenceTables;
