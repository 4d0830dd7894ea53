// crates/greencalc-core/src/error.rs

use std::path::PathBuf;

use greencalc_parser::{ParserError, TableKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {table} table from {}: {source}", .path.display())]
    Io {
        table: TableKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reference table parsing failed: {0}")]
    Parse(#[from] ParserError),

    #[error("failed to read configuration file {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration TOML error: {0}")]
    ConfigToml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;
