#![cfg(feature = "runtime")]

use std::future::Future;
use std::path::PathBuf;

use greencalc_core::calculate;
use greencalc_core::loader::{load_tables, FsTableSource, TableSource};
use greencalc_core::{CalculationRequest, GreencalcConfig, LoadError, TableKind};

fn fixture_config() -> GreencalcConfig {
    GreencalcConfig {
        data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../greencalc-parser/tests/data"),
        ..GreencalcConfig::default()
    }
}

struct StaticSource {
    pue: &'static [u8],
}

impl TableSource for StaticSource {
    fn fetch(
        &self,
        table: TableKind,
    ) -> impl Future<Output = greencalc_core::error::Result<Vec<u8>>> + Send {
        let pue = self.pue;
        async move {
            match table {
                TableKind::Pue => Ok(pue.to_vec()),
                TableKind::Location => Ok(b"h1\nh2\nFR,Europe,France,Any,51.1,country\n".to_vec()),
                other => Err(LoadError::Io {
                    table: other,
                    path: PathBuf::from(format!("memory://{other}")),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not stocked"),
                }),
            }
        }
    }
}

#[tokio::test]
async fn loads_all_tables_from_data_dir() {
    let loaded = load_tables(&FsTableSource::new(fixture_config())).await;

    assert!(loaded.is_complete(), "failures: {:?}", loaded.failures);
    assert_eq!(loaded.tables.cpus().len(), 5);
    assert_eq!(loaded.tables.gpus().len(), 4);
    assert_eq!(loaded.tables.locations().len(), 5);
    assert_eq!(loaded.tables.pues().len(), 4);
}

#[tokio::test]
async fn fixture_tables_drive_the_calculator() {
    let loaded = load_tables(&FsTableSource::new(fixture_config())).await;

    let request = CalculationRequest {
        runtime_hours: 1.0,
        num_cores: Some(4),
        cpu_model: Some("Core i7-4790".to_string()),
        memory_gb: 0.0,
        platform: "google cloud platform".to_string(),
        location: "FR".to_string(),
        ..CalculationRequest::default()
    };
    let result = calculate(&request, &loaded.tables);

    assert_eq!(result.compute_power_draw_w, 84.0);
    let energy = 84.0 * 1.1 / 1000.0;
    assert!((result.energy_kwh - energy).abs() < 1e-12);
    assert!((result.carbon_gco2e - energy * 51.1).abs() < 1e-9);
}

#[tokio::test]
async fn missing_directory_degrades_to_empty_tables() {
    let config = GreencalcConfig {
        data_dir: PathBuf::from("/nonexistent/greencalc-data"),
        ..GreencalcConfig::default()
    };
    let loaded = load_tables(&FsTableSource::new(config)).await;

    assert_eq!(loaded.failures.len(), 4);
    let mut failed: Vec<TableKind> = loaded.failures.iter().map(|f| f.table).collect();
    failed.sort_by_key(|table| table.as_str());
    assert_eq!(
        failed,
        [TableKind::Cpu, TableKind::Gpu, TableKind::Location, TableKind::Pue]
    );
    assert!(loaded
        .failures
        .iter()
        .all(|failure| matches!(failure.error, LoadError::Io { .. })));

    let result = calculate(&CalculationRequest::default(), &loaded.tables);
    assert_eq!(result.compute_power_draw_w, 0.0);
    assert!((result.memory_power_draw_w - 64.0 * 0.3725).abs() < 1e-9);
    let expected = 12.0 * 64.0 * 0.3725 / 1000.0 * 475.0;
    assert!((result.carbon_gco2e - expected).abs() < 1e-9);
}

#[tokio::test]
async fn partial_failures_keep_the_tables_that_loaded() {
    let source = StaticSource {
        pue: b"provider,PUE\nAWS,1.135\n",
    };
    let loaded = load_tables(&source).await;

    assert!(!loaded.is_complete());
    assert_eq!(loaded.failures.len(), 2);
    assert!(loaded.tables.cpus().is_empty());
    assert!(loaded.tables.gpus().is_empty());
    assert_eq!(loaded.tables.pue("aws").map(|entry| entry.pue), Some(1.135));
    assert_eq!(
        loaded.tables.location("FR").map(|loc| loc.carbon_intensity),
        Some(51.1)
    );
}

#[tokio::test]
async fn undecodable_table_is_reported_as_parse_failure() {
    let source = StaticSource {
        pue: b"provider,PUE\n\xff\xfe,1.2\n",
    };
    let loaded = load_tables(&source).await;

    let pue_failure = loaded
        .failures
        .iter()
        .find(|failure| failure.table == TableKind::Pue)
        .expect("PUE failure recorded");
    assert!(matches!(pue_failure.error, LoadError::Parse(_)));
    assert!(loaded.tables.pues().is_empty());
}
