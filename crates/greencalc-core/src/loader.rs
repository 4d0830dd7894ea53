#![cfg(feature = "runtime")]

use std::future::Future;

use greencalc_parser::{
    CpuTableParser, GpuTableParser, LocationTableParser, PueTableParser, TableKind, TableParser,
};
use tracing::{info, warn};

use crate::config::GreencalcConfig;
use crate::error::{LoadError, Result};
use crate::tables::ReferenceTables;

/// Supplies the raw bytes of a reference table.
pub trait TableSource {
    fn fetch(&self, table: TableKind) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

#[derive(Debug, Clone)]
pub struct FsTableSource {
    config: GreencalcConfig,
}

impl FsTableSource {
    pub fn new(config: GreencalcConfig) -> Self {
        Self { config }
    }
}

impl TableSource for FsTableSource {
    fn fetch(&self, table: TableKind) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let path = self.config.table_path(table);
        async move {
            tokio::fs::read(&path)
                .await
                .map_err(|source| LoadError::Io {
                    table,
                    path,
                    source,
                })
        }
    }
}

#[derive(Debug)]
pub struct TableFailure {
    pub table: TableKind,
    pub error: LoadError,
}

/// Tables that loaded, plus the ones that did not. Failed tables are present but empty.
#[derive(Debug, Default)]
pub struct LoadedTables {
    pub tables: ReferenceTables,
    pub failures: Vec<TableFailure>,
}

impl LoadedTables {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetches and parses all four tables concurrently. A table that cannot be fetched or
/// parsed is logged, recorded in `failures` and replaced by an empty table.
pub async fn load_tables<S: TableSource + Sync>(source: &S) -> LoadedTables {
    let (cpus, gpus, locations, pues) = tokio::join!(
        load_table(source, CpuTableParser),
        load_table(source, GpuTableParser),
        load_table(source, LocationTableParser),
        load_table(source, PueTableParser),
    );

    let mut failures = Vec::new();
    let cpus = settle(TableKind::Cpu, cpus, &mut failures);
    let gpus = settle(TableKind::Gpu, gpus, &mut failures);
    let locations = settle(TableKind::Location, locations, &mut failures);
    let pues = settle(TableKind::Pue, pues, &mut failures);

    LoadedTables {
        tables: ReferenceTables::new(cpus, gpus, locations, pues),
        failures,
    }
}

async fn load_table<S, P>(source: &S, parser: P) -> Result<Vec<P::Row>>
where
    S: TableSource + Sync,
    P: TableParser,
{
    let table = parser.kind();
    let content = source.fetch(table).await?;
    let rows = parser.parse_bytes(&content)?;
    info!(table = %table, rows = rows.len(), "Loaded reference table");
    Ok(rows)
}

fn settle<T>(
    table: TableKind,
    result: Result<Vec<T>>,
    failures: &mut Vec<TableFailure>,
) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(error) => {
            warn!(
                table = %table,
                error = %error,
                "Reference table unavailable; lookups will fall back to defaults"
            );
            failures.push(TableFailure { table, error });
            Vec::new()
        }
    }
}
