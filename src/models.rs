use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset_path: String,
    pub output_directory: Option<String>,
    pub first_year: i32,
    pub last_year: i32,
    /// Region display names to keep, empty means all regions
    pub regions: Vec<String>,
    pub min_participations: u32,
    /// Universities whose per-year series are tracked individually
    pub tracked_universities: Vec<String>,
    pub top_places: Option<usize>,
    /// Universities to build participation-overlap graphs for
    pub graph_universities: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: "data/data-2006-2024.json".to_string(),
            output_directory: Some("output".to_string()),
            first_year: 2010,
            last_year: 2024,
            regions: vec![],
            min_participations: 10,
            tracked_universities: vec![],
            top_places: Some(50),
            graph_universities: vec![
                "Universidad de La Habana".to_string(),
                "Universidad de Oriente - Sede Antonio Maceo".to_string(),
            ],
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, file_path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(file_path, content)?;
        Ok(())
    }

    pub fn region_filter(&self) -> RegionFilter {
        if self.regions.is_empty() {
            RegionFilter::All
        } else {
            RegionFilter::Named(self.regions.clone())
        }
    }

    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            first_year: self.first_year,
            last_year: self.last_year,
            regions: self.region_filter(),
            min_participations: self.min_participations,
        }
    }
}

/// One university's entry in a given year's contest. Field names match the
/// dataset file; `solved` arrives as either a number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResult {
    pub university: String,
    pub country: String,
    pub players: Vec<String>,
    #[serde(deserialize_with = "de_int_or_string")]
    pub solved: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub spanish_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub region: String,
    #[serde(default)]
    pub spanish_name: Option<String>,
}

/// Per-year contest metadata; `problems` is the denominator for
/// percentage-solved computations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearStats {
    pub problems: Vec<String>,
}

/// A query over the dataset: inclusive year range, region restriction and a
/// minimum-participation threshold. Plain value, rebuilt per query.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub first_year: i32,
    pub last_year: i32,
    pub regions: RegionFilter,
    pub min_participations: u32,
}

impl FilterSpec {
    pub fn all_regions(first_year: i32, last_year: i32) -> Self {
        Self {
            first_year,
            last_year,
            regions: RegionFilter::All,
            min_participations: 1,
        }
    }
}

/// Region restriction by display name, mirroring the dataset's reference
/// tables ("Todas" in the source UI maps to `All`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
    All,
    Named(Vec<String>),
}

impl RegionFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, RegionFilter::All)
    }

    pub fn matches(&self, region_name: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Named(names) => names.iter().any(|n| n == region_name),
        }
    }
}

fn de_int_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(u32),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s.trim().parse::<u32>().map_err(serde::de::Error::custom),
    }
}
