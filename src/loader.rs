use crate::models::{Country, Region, TeamResult, YearStats};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;

/// Raw file shape: every top-level collection keyed by strings, exactly as
/// stored on disk. Converted to the typed `Dataset` after parsing.
#[derive(Debug, Deserialize)]
struct RawDataset {
    contests: HashMap<String, Vec<TeamResult>>,
    regions: HashMap<String, Region>,
    countries: HashMap<String, Country>,
    stats: HashMap<String, YearStats>,
}

/// The immutable in-memory dataset. Loaded once at startup; every aggregator
/// takes it by shared reference and never mutates it. Contest years map to
/// team records in final placement order, rank 1 first.
#[derive(Debug)]
pub struct Dataset {
    pub contests: BTreeMap<i32, Vec<TeamResult>>,
    pub regions: HashMap<String, Region>,
    pub countries: HashMap<String, Country>,
    pub stats: BTreeMap<i32, YearStats>,
}

impl Dataset {
    pub fn load_from_file(file_path: &str) -> Result<Self> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read dataset file: {}", file_path))?;

        let raw: RawDataset = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dataset file: {}", file_path))?;

        let dataset = Self::from_raw(raw)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn from_raw(raw: RawDataset) -> Result<Self> {
        let mut contests = BTreeMap::new();
        for (year, teams) in raw.contests {
            let year: i32 = year
                .parse()
                .with_context(|| format!("Invalid contest year key: {:?}", year))?;
            contests.insert(year, teams);
        }

        let mut stats = BTreeMap::new();
        for (year, year_stats) in raw.stats {
            let year: i32 = year
                .parse()
                .with_context(|| format!("Invalid stats year key: {:?}", year))?;
            stats.insert(year, year_stats);
        }

        Ok(Self {
            contests,
            regions: raw.regions,
            countries: raw.countries,
            stats,
        })
    }

    /// Cross-check the reference tables: every team's country must exist and
    /// every country's region must exist. Free-text identifiers are not
    /// trusted past this point.
    fn validate(&self) -> Result<()> {
        for (id, country) in &self.countries {
            if !self.regions.contains_key(&country.region) {
                bail!(
                    "Country {:?} references unknown region {:?}",
                    id,
                    country.region
                );
            }
        }

        for (year, teams) in &self.contests {
            for team in teams {
                if !self.countries.contains_key(&team.country) {
                    bail!(
                        "Team {:?} in {} references unknown country {:?}",
                        team.university,
                        year,
                        team.country
                    );
                }
            }
        }

        Ok(())
    }

    /// Display name of the region a country belongs to. Country ids are
    /// validated at load time, so a miss here means a caller-made id.
    pub fn region_name_of(&self, country_id: &str) -> Option<&str> {
        let country = self.countries.get(country_id)?;
        let region = self.regions.get(&country.region)?;
        Some(&region.spanish_name)
    }

    /// Contest years within the inclusive range, chronological. Empty for an
    /// inverted range.
    pub fn contests_in_period<'a>(
        &'a self,
        first: i32,
        last: i32,
    ) -> impl Iterator<Item = (i32, &'a Vec<TeamResult>)> + 'a {
        // `range` panics on a start past the end, so an inverted request is
        // widened to an empty-by-filter range instead.
        self.contests
            .range(first..=last.max(first))
            .filter(move |(y, _)| **y <= last)
            .map(|(y, teams)| (*y, teams))
    }

    /// A university's team record per year, first team in placement order
    /// when it fielded more than one.
    pub fn university_participations(&self, university: &str) -> BTreeMap<i32, &TeamResult> {
        let mut participations = BTreeMap::new();
        for (year, teams) in &self.contests {
            if let Some(team) = teams.iter().find(|t| t.university == university) {
                participations.insert(*year, team);
            }
        }
        participations
    }

    pub fn first_year(&self) -> Option<i32> {
        self.contests.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.contests.keys().next_back().copied()
    }

    pub fn summary(&self) -> DatasetSummary {
        let mut countries = std::collections::HashSet::new();
        let mut universities = std::collections::HashSet::new();
        let mut total_teams = 0;
        for teams in self.contests.values() {
            total_teams += teams.len();
            for team in teams {
                countries.insert(team.country.as_str());
                universities.insert(team.university.as_str());
            }
        }
        DatasetSummary {
            editions: self.contests.len(),
            first_year: self.first_year(),
            last_year: self.last_year(),
            total_teams,
            countries: countries.len(),
            universities: universities.len(),
        }
    }
}

#[derive(Debug)]
pub struct DatasetSummary {
    pub editions: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub total_teams: usize,
    pub countries: usize,
    pub universities: usize,
}
