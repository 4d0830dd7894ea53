mod common;
mod cpu;
mod gpu;
mod location;
mod pue;
pub(crate) mod schema;

pub use cpu::CpuTableParser;
pub use gpu::GpuTableParser;
pub use location::LocationTableParser;
pub use pue::PueTableParser;
pub use schema::{layout, TableLayout};

pub(crate) use common::{
    is_placeholder_key, optional_text, parse_finite, parse_optional_f64, parse_optional_year,
    read_records,
};
