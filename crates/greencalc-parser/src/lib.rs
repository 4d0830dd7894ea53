pub mod errors;
pub mod formats;
pub mod model;
mod registry;

pub use errors::ParserError;
pub use formats::{
    layout, CpuTableParser, GpuTableParser, LocationTableParser, PueTableParser, TableLayout,
};
pub use model::{CpuSpec, GpuSpec, Location, PueEntry, TableKind};
pub use registry::{parse_cpus, parse_gpus, parse_locations, parse_pues, TableParser};
