use greencalc_core::{CpuSpec, Location, PueEntry, ReferenceTables};
use greencalc_parser::{parse_cpus, parse_gpus, parse_locations};

fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../greencalc-parser/tests/data")
        .join(name);
    std::fs::read_to_string(path).expect("read fixture")
}

fn cpu(model: &str, tdp_watts: f64) -> CpuSpec {
    CpuSpec {
        model: model.to_string(),
        manufacturer: "AMD".to_string(),
        tdp_watts,
        cores: 8.0,
        release_year: Some(2020),
    }
}

fn location(code: &str, continent: &str, country: &str) -> Location {
    Location {
        code: code.to_string(),
        continent: continent.to_string(),
        country: country.to_string(),
        region: "Any".to_string(),
        carbon_intensity: 100.0,
        kind: "country".to_string(),
    }
}

#[test]
fn first_duplicate_key_wins() {
    let tables = ReferenceTables::new(
        vec![cpu("Dup", 80.0), cpu("Other", 10.0), cpu("Dup", 160.0)],
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );

    assert_eq!(tables.cpus().len(), 3);
    assert_eq!(tables.cpu("Dup").map(|c| c.tdp_watts), Some(80.0));
    assert_eq!(tables.cpu("Other").map(|c| c.tdp_watts), Some(10.0));
    assert!(tables.cpu("dup").is_none());
}

#[test]
fn provider_lookup_is_case_insensitive() {
    let tables = ReferenceTables::new(
        Vec::new(),
        Vec::new(),
        Vec::new(),
        vec![PueEntry {
            provider: "Google Cloud Platform".to_string(),
            pue: 1.1,
        }],
    );

    for name in ["Google Cloud Platform", "google cloud platform", "GOOGLE CLOUD PLATFORM"] {
        assert_eq!(tables.pue(name).map(|entry| entry.pue), Some(1.1), "{name}");
    }
    assert!(tables.pue("Google").is_none());
}

#[test]
fn empty_tables_miss_every_lookup() {
    let tables = ReferenceTables::empty();
    assert!(tables.cpu("Core i7-4790").is_none());
    assert!(tables.gpu("Tesla V100").is_none());
    assert!(tables.location("FR").is_none());
    assert!(tables.pue("AWS").is_none());
    assert!(tables.default_cpu_model().is_none());
    assert!(tables.default_gpu_model().is_none());
    assert!(tables.locations_by_region().is_empty());
}

#[test]
fn default_models_come_from_loaded_tables() {
    let tables = ReferenceTables::new(
        parse_cpus(&fixture("CPUs-manual.csv")).expect("cpus"),
        parse_gpus(&fixture("GPUs-manual.csv")).expect("gpus"),
        Vec::new(),
        Vec::new(),
    );

    assert_eq!(
        tables.default_cpu_model().map(|cpu| cpu.model.as_str()),
        Some("Core i7-4790")
    );
    assert_eq!(
        tables.default_gpu_model().map(|gpu| gpu.model.as_str()),
        Some("Tesla V100")
    );
}

#[test]
fn locations_group_by_continent_then_country() {
    let tables = ReferenceTables::new(
        Vec::new(),
        Vec::new(),
        vec![
            location("US-CA", "North America", "United States"),
            location("FR", "Europe", "France"),
            location("US-NY", "North America", "United States"),
            location("CA-QC", "North America", "Canada"),
        ],
        Vec::new(),
    );

    let groups = tables.locations_by_region();
    let continents: Vec<&str> = groups.iter().map(|g| g.continent).collect();
    assert_eq!(continents, ["North America", "Europe"]);

    let north_america = &groups[0];
    let countries: Vec<&str> = north_america.countries.iter().map(|c| c.country).collect();
    assert_eq!(countries, ["United States", "Canada"]);

    let us_codes: Vec<&str> = north_america.countries[0]
        .locations
        .iter()
        .map(|loc| loc.code.as_str())
        .collect();
    assert_eq!(us_codes, ["US-CA", "US-NY"]);
}

#[test]
fn fixture_locations_are_indexed_by_code() {
    let tables = ReferenceTables::new(
        Vec::new(),
        Vec::new(),
        parse_locations(&fixture("CI-carbonfootprint-yearly_2023.csv")).expect("locations"),
        Vec::new(),
    );

    assert_eq!(tables.location("FR").map(|l| l.carbon_intensity), Some(51.1));
    assert!(tables.location("DE").is_none());
    assert_eq!(tables.locations_by_region().len(), 3);
}
