use std::collections::HashMap;

use greencalc_parser::{CpuSpec, GpuSpec, Location, PueEntry};

use crate::constants::{DEFAULT_CPU_MODEL_HINT, DEFAULT_GPU_MODEL_HINT};

/// The four reference tables, indexed by their natural keys.
///
/// Rows keep their load order. When a key appears more than once the first row wins.
/// Provider names are matched case-insensitively; every other key is matched exactly.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    cpus: Vec<CpuSpec>,
    gpus: Vec<GpuSpec>,
    locations: Vec<Location>,
    pues: Vec<PueEntry>,
    cpu_index: HashMap<String, usize>,
    gpu_index: HashMap<String, usize>,
    location_index: HashMap<String, usize>,
    pue_index: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinentGroup<'a> {
    pub continent: &'a str,
    pub countries: Vec<CountryGroup<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryGroup<'a> {
    pub country: &'a str,
    pub locations: Vec<&'a Location>,
}

impl ReferenceTables {
    pub fn new(
        cpus: Vec<CpuSpec>,
        gpus: Vec<GpuSpec>,
        locations: Vec<Location>,
        pues: Vec<PueEntry>,
    ) -> Self {
        let cpu_index = build_index(cpus.iter().map(|cpu| cpu.model.clone()));
        let gpu_index = build_index(gpus.iter().map(|gpu| gpu.model.clone()));
        let location_index = build_index(locations.iter().map(|loc| loc.code.clone()));
        let pue_index = build_index(pues.iter().map(|entry| provider_key(&entry.provider)));

        Self {
            cpus,
            gpus,
            locations,
            pues,
            cpu_index,
            gpu_index,
            location_index,
            pue_index,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cpus(&self) -> &[CpuSpec] {
        &self.cpus
    }

    pub fn gpus(&self) -> &[GpuSpec] {
        &self.gpus
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn pues(&self) -> &[PueEntry] {
        &self.pues
    }

    pub fn cpu(&self, model: &str) -> Option<&CpuSpec> {
        self.cpu_index.get(model).map(|&idx| &self.cpus[idx])
    }

    pub fn gpu(&self, model: &str) -> Option<&GpuSpec> {
        self.gpu_index.get(model).map(|&idx| &self.gpus[idx])
    }

    pub fn location(&self, code: &str) -> Option<&Location> {
        self.location_index.get(code).map(|&idx| &self.locations[idx])
    }

    pub fn pue(&self, provider: &str) -> Option<&PueEntry> {
        self.pue_index
            .get(&provider_key(provider))
            .map(|&idx| &self.pues[idx])
    }

    /// First CPU whose model name contains the preset hint, if any.
    pub fn default_cpu_model(&self) -> Option<&CpuSpec> {
        self.cpus
            .iter()
            .find(|cpu| cpu.model.contains(DEFAULT_CPU_MODEL_HINT))
    }

    pub fn default_gpu_model(&self) -> Option<&GpuSpec> {
        self.gpus
            .iter()
            .find(|gpu| gpu.model.contains(DEFAULT_GPU_MODEL_HINT))
    }

    /// Locations grouped by continent, then country, in first-seen order.
    pub fn locations_by_region(&self) -> Vec<ContinentGroup<'_>> {
        let mut groups: Vec<ContinentGroup<'_>> = Vec::new();

        for location in &self.locations {
            let continent_pos = match groups
                .iter()
                .position(|group| group.continent == location.continent)
            {
                Some(pos) => pos,
                None => {
                    groups.push(ContinentGroup {
                        continent: &location.continent,
                        countries: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            let countries = &mut groups[continent_pos].countries;
            match countries
                .iter_mut()
                .find(|group| group.country == location.country)
            {
                Some(group) => group.locations.push(location),
                None => countries.push(CountryGroup {
                    country: &location.country,
                    locations: vec![location],
                }),
            }
        }

        groups
    }
}

fn provider_key(provider: &str) -> String {
    provider.to_lowercase()
}

fn build_index(keys: impl Iterator<Item = String>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (idx, key) in keys.enumerate() {
        index.entry(key).or_insert(idx);
    }
    index
}
