use crate::loader::Dataset;
use crate::models::{FilterSpec, TeamResult};
use crate::stats;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Per-year solved-problem statistics plus one gapped series per tracked
/// university, all aligned to the `years` axis. A year with no matching
/// teams carries `None` in every statistic.
#[derive(Debug, Clone)]
pub struct SolvedStatistics {
    pub years: Vec<i32>,
    pub min: Vec<Option<u32>>,
    pub max: Vec<Option<u32>>,
    pub mode: Vec<Option<u32>>,
    pub mean: Vec<Option<f64>>,
    pub median: Vec<Option<u32>>,
    pub universities: IndexMap<String, Vec<Option<u32>>>,
}

/// Rank-quartile boundaries per year, optional solved-count quartile
/// samples, and per-tracked-university standing series.
#[derive(Debug, Clone)]
pub struct QuartileDistribution {
    pub years: Vec<i32>,
    pub q1: Vec<u32>,
    pub q2: Vec<u32>,
    pub q3: Vec<u32>,
    pub q4: Vec<u32>,
    /// Representative solved counts per quartile, present only when a region
    /// narrower than "all" is selected.
    pub solved_samples: Option<[Vec<Option<u32>>; 4]>,
    pub universities: IndexMap<String, UniversityStanding>,
}

#[derive(Debug, Clone, Default)]
pub struct UniversityStanding {
    /// 1-based rank among the teams matching the region filter.
    pub place: Vec<Option<u32>>,
    pub solved: Vec<Option<u32>>,
}

#[derive(Debug, Clone)]
pub struct CumulativeRanking {
    pub by_solved: Vec<(String, u32)>,
    pub by_percentage: Vec<(String, f64)>,
}

#[derive(Debug, Clone)]
pub struct RepeatParticipation {
    pub repeated_teams: Vec<(String, u32)>,
    pub repeated_teams_percent: Vec<(String, f64)>,
    pub repeated_players: Vec<(String, u32)>,
    pub repeated_players_percent: Vec<(String, f64)>,
}

fn team_matches(dataset: &Dataset, filter: &FilterSpec, team: &TeamResult) -> bool {
    match dataset.region_name_of(&team.country) {
        Some(region) => filter.regions.matches(region),
        None => false,
    }
}

/// Stable descending sort on the numeric component; tied entries keep their
/// first-appearance order.
fn sort_descending<T: PartialOrd>(ranking: &mut [(String, T)]) {
    ranking.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
}

fn truncate_top<T>(mut ranking: Vec<T>, top: Option<usize>) -> Vec<T> {
    let limit = top.unwrap_or(50).min(ranking.len());
    ranking.truncate(limit);
    ranking
}

/// Number of editions each country appeared in within the filtered period.
/// Several teams from one country in the same year count once. Output is
/// sorted ascending by count (stable), thresholded by
/// `filter.min_participations`.
pub fn country_participations(dataset: &Dataset, filter: &FilterSpec) -> Vec<(String, u32)> {
    let mut counts: IndexMap<String, u32> = IndexMap::new();

    for (_, teams) in dataset.contests_in_period(filter.first_year, filter.last_year) {
        let mut seen_this_year: HashSet<&str> = HashSet::new();
        for team in teams {
            if seen_this_year.insert(&team.country) {
                *counts.entry(team.country.clone()).or_insert(0) += 1;
            }
        }
    }

    let mut ranking: Vec<(String, u32)> = counts
        .into_iter()
        .filter(|(country, count)| {
            *count >= filter.min_participations
                && dataset
                    .region_name_of(country)
                    .is_some_and(|region| filter.regions.matches(region))
        })
        .collect();

    ranking.sort_by_key(|(_, count)| *count);
    ranking
}

/// Number of team entries each university fielded within the filtered
/// period. Unlike countries, two same-year teams count twice. The region
/// filter goes through one tracked country per university, last write wins,
/// so a university recorded under several countries is classified by its
/// most recent one.
pub fn university_participations(dataset: &Dataset, filter: &FilterSpec) -> Vec<(String, u32)> {
    struct Entry {
        count: u32,
        country: String,
    }

    let mut counts: IndexMap<String, Entry> = IndexMap::new();

    for (_, teams) in dataset.contests_in_period(filter.first_year, filter.last_year) {
        for team in teams {
            let entry = counts.entry(team.university.clone()).or_insert(Entry {
                count: 0,
                country: team.country.clone(),
            });
            entry.count += 1;
            entry.country = team.country.clone();
        }
    }

    let mut ranking: Vec<(String, u32)> = counts
        .into_iter()
        .filter(|(_, entry)| {
            entry.count >= filter.min_participations
                && dataset
                    .region_name_of(&entry.country)
                    .is_some_and(|region| filter.regions.matches(region))
        })
        .map(|(university, entry)| (university, entry.count))
        .collect();

    ranking.sort_by_key(|(_, count)| *count);
    ranking
}

/// Distinct universities appearing in the filtered period, region-filtered
/// by team country, in first-appearance order. Used to offer entity
/// selections to the caller.
pub fn universities_in_period(dataset: &Dataset, filter: &FilterSpec) -> Vec<String> {
    let mut universities: IndexMap<String, ()> = IndexMap::new();
    for (_, teams) in dataset.contests_in_period(filter.first_year, filter.last_year) {
        for team in teams {
            if team_matches(dataset, filter, team) {
                universities.entry(team.university.clone()).or_insert(());
            }
        }
    }
    universities.into_keys().collect()
}

/// Per-year min/max/mode/mean/median over the solved counts of teams
/// matching the region filter, plus a gapped solved series for each tracked
/// university. Tracked series ignore the region filter and take the first
/// team in placement order when a university fielded several.
pub fn solved_statistics(
    dataset: &Dataset,
    filter: &FilterSpec,
    tracked: &[String],
) -> SolvedStatistics {
    let mut result = SolvedStatistics {
        years: Vec::new(),
        min: Vec::new(),
        max: Vec::new(),
        mode: Vec::new(),
        mean: Vec::new(),
        median: Vec::new(),
        universities: tracked
            .iter()
            .map(|u| (u.clone(), Vec::new()))
            .collect(),
    };

    for (year, teams) in dataset.contests_in_period(filter.first_year, filter.last_year) {
        result.years.push(year);

        let mut pending: Vec<&String> = tracked.iter().collect();
        let mut solves: Vec<u32> = Vec::new();

        for team in teams {
            if let Some(pos) = pending.iter().position(|u| **u == team.university) {
                pending.remove(pos);
                if let Some(series) = result.universities.get_mut(&team.university) {
                    series.push(Some(team.solved));
                }
            }
            if team_matches(dataset, filter, team) {
                solves.push(team.solved);
            }
        }
        for university in pending {
            if let Some(series) = result.universities.get_mut(university) {
                series.push(None);
            }
        }

        result.min.push(stats::min(&solves));
        result.max.push(stats::max(&solves));
        result.mode.push(stats::mode(&solves));
        result.mean.push(stats::mean(&solves));
        result.median.push(stats::median_rounded(&solves));
    }

    result
}

fn quartile_bounds(n: u32) -> (u32, u32, u32, u32) {
    (n / 4, n / 4 * 2, n / 4 * 3, n)
}

/// Per-year quartile boundaries over the ranked list of teams matching the
/// region filter, the tracked universities' rank/solved standing among those
/// teams, and (for a non-"all" region) representative solved counts sampled
/// at the quartile cut points.
pub fn quartile_distribution(
    dataset: &Dataset,
    filter: &FilterSpec,
    tracked: &[String],
) -> QuartileDistribution {
    let mut result = QuartileDistribution {
        years: Vec::new(),
        q1: Vec::new(),
        q2: Vec::new(),
        q3: Vec::new(),
        q4: Vec::new(),
        solved_samples: if filter.regions.is_all() {
            None
        } else {
            Some(std::array::from_fn(|_| Vec::new()))
        },
        universities: tracked
            .iter()
            .map(|u| (u.clone(), UniversityStanding::default()))
            .collect(),
    };

    for (year, teams) in dataset.contests_in_period(filter.first_year, filter.last_year) {
        result.years.push(year);

        let mut pending: Vec<&String> = tracked.iter().collect();
        let mut rank = 0u32;
        let mut solves: Vec<u32> = Vec::new();

        for team in teams {
            if !team_matches(dataset, filter, team) {
                continue;
            }
            rank += 1;
            solves.push(team.solved);
            if let Some(pos) = pending.iter().position(|u| **u == team.university) {
                pending.remove(pos);
                if let Some(standing) = result.universities.get_mut(&team.university) {
                    standing.place.push(Some(rank));
                    standing.solved.push(Some(team.solved));
                }
            }
        }
        for university in pending {
            if let Some(standing) = result.universities.get_mut(university) {
                standing.place.push(None);
                standing.solved.push(None);
            }
        }

        let (q1, q2, q3, q4) = quartile_bounds(rank);
        result.q1.push(q1);
        result.q2.push(q2);
        result.q3.push(q3);
        result.q4.push(q4);

        if let Some(samples) = result.solved_samples.as_mut() {
            solves.sort_unstable_by(|a, b| b.cmp(a));
            // Sample indices past the end of a short year clamp to the last
            // team instead of faulting.
            for (series, index) in samples.iter_mut().zip([0, q1 + 1, q2 + 1, q3 + 1]) {
                let sample = if solves.is_empty() {
                    None
                } else {
                    Some(solves[(index as usize).min(solves.len() - 1)])
                };
                series.push(sample);
            }
        }
    }

    result
}

/// Total solved problems per university across the filtered period, ranked
/// two ways: by absolute total and by percentage of the problems posed in
/// the editions it entered. Both rankings are truncated to `top` places
/// (default 50, capped at the number of universities).
pub fn cumulative_solved(
    dataset: &Dataset,
    filter: &FilterSpec,
    top: Option<usize>,
) -> CumulativeRanking {
    struct Totals {
        solved: u32,
        possible: u32,
    }

    let mut totals: IndexMap<String, Totals> = IndexMap::new();

    for (year, teams) in dataset.contests_in_period(filter.first_year, filter.last_year) {
        let problems = dataset
            .stats
            .get(&year)
            .map(|s| s.problems.len() as u32)
            .unwrap_or(0);
        for team in teams {
            if !team_matches(dataset, filter, team) {
                continue;
            }
            let entry = totals.entry(team.university.clone()).or_insert(Totals {
                solved: 0,
                possible: 0,
            });
            entry.solved += team.solved;
            entry.possible += problems;
        }
    }

    let mut by_solved: Vec<(String, u32)> = totals
        .iter()
        .map(|(university, t)| (university.clone(), t.solved))
        .collect();
    let mut by_percentage: Vec<(String, f64)> = totals
        .iter()
        .map(|(university, t)| {
            // A zero denominator (no recorded problem list) ranks as 0%.
            let percent = if t.possible == 0 {
                0.0
            } else {
                f64::from(t.solved) * 100.0 / f64::from(t.possible)
            };
            (university.clone(), percent)
        })
        .collect();

    sort_descending(&mut by_solved);
    sort_descending(&mut by_percentage);

    CumulativeRanking {
        by_solved: truncate_top(by_solved, top),
        by_percentage: truncate_top(by_percentage, top),
    }
}

/// Repeat participation per university across the filtered period, scanned
/// chronologically: a team counts as repeated once if any of its players was
/// already on an earlier roster of the same university, and every repeating
/// player is counted once. Only universities with at least one repeated team
/// appear in the four rankings.
pub fn repeat_participation(
    dataset: &Dataset,
    filter: &FilterSpec,
    top: Option<usize>,
) -> RepeatParticipation {
    #[derive(Default)]
    struct Record {
        players: HashSet<String>,
        teams: u32,
        repeated_teams: u32,
        repeated_players: u32,
    }

    let mut records: IndexMap<String, Record> = IndexMap::new();

    for (_, teams) in dataset.contests_in_period(filter.first_year, filter.last_year) {
        for team in teams {
            if !team_matches(dataset, filter, team) {
                continue;
            }
            let record = records.entry(team.university.clone()).or_default();
            record.teams += 1;
            let mut team_repeats = false;
            for player in &team.players {
                if record.players.contains(player) {
                    record.repeated_players += 1;
                    team_repeats = true;
                } else {
                    record.players.insert(player.clone());
                }
            }
            if team_repeats {
                record.repeated_teams += 1;
            }
        }
    }

    let mut repeated_teams = Vec::new();
    let mut repeated_teams_percent = Vec::new();
    let mut repeated_players = Vec::new();
    let mut repeated_players_percent = Vec::new();

    for (university, record) in &records {
        if record.repeated_teams == 0 {
            continue;
        }
        repeated_teams.push((university.clone(), record.repeated_teams));
        repeated_teams_percent.push((
            university.clone(),
            f64::from(record.repeated_teams) * 100.0 / f64::from(record.teams),
        ));
        repeated_players.push((university.clone(), record.repeated_players));
        let distinct = record.players.len() as u32;
        let player_percent = if distinct == 0 {
            0.0
        } else {
            f64::from(record.repeated_players) * 100.0 / f64::from(distinct)
        };
        repeated_players_percent.push((university.clone(), player_percent));
    }

    sort_descending(&mut repeated_teams);
    sort_descending(&mut repeated_teams_percent);
    sort_descending(&mut repeated_players);
    sort_descending(&mut repeated_players_percent);

    RepeatParticipation {
        repeated_teams: truncate_top(repeated_teams, top),
        repeated_teams_percent: truncate_top(repeated_teams_percent, top),
        repeated_players: truncate_top(repeated_players, top),
        repeated_players_percent: truncate_top(repeated_players_percent, top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::sample_dataset;
    use crate::models::RegionFilter;

    fn caribe(first: i32, last: i32) -> FilterSpec {
        FilterSpec {
            regions: RegionFilter::Named(vec!["Caribe".to_string()]),
            ..FilterSpec::all_regions(first, last)
        }
    }

    #[test]
    fn country_counts_dedupe_within_year() {
        let dataset = sample_dataset();
        let ranking = country_participations(&dataset, &FilterSpec::all_regions(2014, 2016));
        // cu fields several teams per year yet counts once per edition.
        assert_eq!(
            ranking,
            vec![
                ("mx".to_string(), 2),
                ("do".to_string(), 2),
                ("cu".to_string(), 3)
            ]
        );
    }

    #[test]
    fn country_threshold_is_inclusive() {
        let dataset = sample_dataset();
        let mut filter = FilterSpec::all_regions(2014, 2016);
        filter.min_participations = 3;
        let ranking = country_participations(&dataset, &filter);
        assert_eq!(ranking, vec![("cu".to_string(), 3)]);

        filter.min_participations = 4;
        assert!(country_participations(&dataset, &filter).is_empty());
    }

    #[test]
    fn country_region_filter() {
        let dataset = sample_dataset();
        let ranking = country_participations(&dataset, &caribe(2014, 2016));
        assert_eq!(
            ranking,
            vec![("do".to_string(), 2), ("cu".to_string(), 3)]
        );
    }

    #[test]
    fn country_tied_counts_keep_first_appearance_order() {
        let dataset = sample_dataset();
        let ranking = country_participations(&dataset, &FilterSpec::all_regions(2014, 2016));
        // mx and do both count 2; mx appeared first in 2014.
        assert_eq!(ranking[0].0, "mx");
        assert_eq!(ranking[1].0, "do");
    }

    #[test]
    fn university_counts_duplicate_same_year_teams() {
        let dataset = sample_dataset();
        let ranking = university_participations(&dataset, &FilterSpec::all_regions(2014, 2016));
        // UH fields two teams in 2015: 1 + 2 + 1 = 4.
        assert_eq!(
            ranking,
            vec![
                ("UO".to_string(), 1),
                ("UNAM".to_string(), 2),
                ("UASD".to_string(), 2),
                ("UH".to_string(), 4)
            ]
        );
    }

    #[test]
    fn university_region_filter_uses_tracked_country() {
        let dataset = sample_dataset();
        let ranking = university_participations(&dataset, &caribe(2014, 2016));
        assert_eq!(
            ranking,
            vec![
                ("UO".to_string(), 1),
                ("UASD".to_string(), 2),
                ("UH".to_string(), 4)
            ]
        );
    }

    #[test]
    fn inverted_range_yields_empty_everywhere() {
        let dataset = sample_dataset();
        let filter = FilterSpec::all_regions(2016, 2014);
        assert!(country_participations(&dataset, &filter).is_empty());
        assert!(university_participations(&dataset, &filter).is_empty());
        assert!(universities_in_period(&dataset, &filter).is_empty());

        let stats = solved_statistics(&dataset, &filter, &["UH".to_string()]);
        assert!(stats.years.is_empty());
        assert!(stats.universities["UH"].is_empty());

        let quartiles = quartile_distribution(&dataset, &filter, &[]);
        assert!(quartiles.years.is_empty());

        let cumulative = cumulative_solved(&dataset, &filter, None);
        assert!(cumulative.by_solved.is_empty());
        assert!(cumulative.by_percentage.is_empty());

        let repeats = repeat_participation(&dataset, &filter, None);
        assert!(repeats.repeated_teams.is_empty());
    }

    #[test]
    fn universities_in_period_first_appearance_order() {
        let dataset = sample_dataset();
        let all = universities_in_period(&dataset, &FilterSpec::all_regions(2014, 2016));
        assert_eq!(all, vec!["UH", "UO", "UNAM", "UASD"]);

        let caribe_only = universities_in_period(&dataset, &caribe(2014, 2016));
        assert_eq!(caribe_only, vec!["UH", "UO", "UASD"]);
    }

    #[test]
    fn solved_statistics_per_year() {
        let dataset = sample_dataset();
        let result = solved_statistics(
            &dataset,
            &FilterSpec::all_regions(2014, 2016),
            &["UH".to_string()],
        );
        assert_eq!(result.years, vec![2014, 2015, 2016]);
        // 2014 solves [7, 5, 4, 3]
        assert_eq!(result.min[0], Some(3));
        assert_eq!(result.max[0], Some(7));
        assert_eq!(result.mode[0], Some(3));
        assert_eq!(result.mean[0], Some(4.75));
        assert_eq!(result.median[0], Some(5));
        // 2015 solves [8, 6, 2]
        assert_eq!(result.median[1], Some(6));
        // Tracked series: first UH team per year.
        assert_eq!(result.universities["UH"], vec![Some(7), Some(6), Some(9)]);
    }

    #[test]
    fn solved_statistics_marks_empty_years() {
        let dataset = sample_dataset();
        let result = solved_statistics(
            &dataset,
            &FilterSpec::all_regions(2014, 2017),
            &["UH".to_string()],
        );
        // 2017 exists but has no teams.
        assert_eq!(result.years, vec![2014, 2015, 2016, 2017]);
        assert_eq!(result.min[3], None);
        assert_eq!(result.mean[3], None);
        assert_eq!(result.universities["UH"][3], None);
    }

    #[test]
    fn quartile_bounds_at_twenty() {
        assert_eq!(quartile_bounds(20), (5, 10, 15, 20));
        assert_eq!(quartile_bounds(3), (0, 0, 0, 3));
        assert_eq!(quartile_bounds(0), (0, 0, 0, 0));
    }

    #[test]
    fn quartile_distribution_places_and_boundaries() {
        let dataset = sample_dataset();
        let result = quartile_distribution(
            &dataset,
            &FilterSpec::all_regions(2014, 2016),
            &["UH".to_string()],
        );
        assert_eq!(result.years, vec![2014, 2015, 2016]);
        assert_eq!(result.q4, vec![4, 3, 2]);
        assert_eq!(result.q1, vec![1, 0, 0]);
        assert!(result.solved_samples.is_none());

        let uh = &result.universities["UH"];
        // 2015: UNAM places first, UH second.
        assert_eq!(uh.place, vec![Some(1), Some(2), Some(1)]);
        assert_eq!(uh.solved, vec![Some(7), Some(6), Some(9)]);
    }

    #[test]
    fn quartile_samples_clamp_on_small_years() {
        let dataset = sample_dataset();
        let result = quartile_distribution(&dataset, &caribe(2014, 2017), &[]);
        let samples = result.solved_samples.as_ref().unwrap();
        // 2015 Caribe teams solve [6, 2]; every cut past the end clamps to
        // the last value.
        assert_eq!(samples[0][1], Some(6));
        assert_eq!(samples[1][1], Some(2));
        assert_eq!(samples[2][1], Some(2));
        assert_eq!(samples[3][1], Some(2));
        // 2017 has no teams at all.
        assert_eq!(samples[0][3], None);
    }

    #[test]
    fn quartile_rank_is_within_matching_teams() {
        let dataset = sample_dataset();
        let result = quartile_distribution(&dataset, &caribe(2014, 2016), &["UASD".to_string()]);
        // 2014 overall UASD is 4th, but 3rd among Caribe teams.
        assert_eq!(result.universities["UASD"].place[0], Some(3));
        assert_eq!(result.q4, vec![3, 2, 2]);
    }

    #[test]
    fn cumulative_rankings() {
        let dataset = sample_dataset();
        let result = cumulative_solved(&dataset, &FilterSpec::all_regions(2014, 2016), None);
        assert_eq!(
            result.by_solved,
            vec![
                ("UH".to_string(), 24),
                ("UNAM".to_string(), 12),
                ("UO".to_string(), 5),
                ("UASD".to_string(), 4)
            ]
        );
        // UNAM: 12 of 20 = 60%; UH: 24 of 42.
        assert_eq!(result.by_percentage[0].0, "UNAM");
        assert!((result.by_percentage[0].1 - 60.0).abs() < 1e-9);
        assert_eq!(result.by_percentage[1].0, "UH");
        assert!((result.by_percentage[1].1 - 24.0 * 100.0 / 42.0).abs() < 1e-9);
    }

    #[test]
    fn cumulative_matches_per_year_sum() {
        let dataset = sample_dataset();
        let filter = FilterSpec::all_regions(2014, 2016);
        let cumulative = cumulative_solved(&dataset, &filter, None);
        let total_uh = cumulative
            .by_solved
            .iter()
            .find(|(u, _)| u == "UH")
            .map(|(_, n)| *n)
            .unwrap();

        let mut by_hand = 0;
        for (_, teams) in dataset.contests_in_period(filter.first_year, filter.last_year) {
            for team in teams.iter().filter(|t| t.university == "UH") {
                by_hand += team.solved;
            }
        }
        assert_eq!(total_uh, by_hand);
    }

    #[test]
    fn cumulative_truncates_to_top() {
        let dataset = sample_dataset();
        let result = cumulative_solved(&dataset, &FilterSpec::all_regions(2014, 2016), Some(2));
        assert_eq!(result.by_solved.len(), 2);
        assert_eq!(result.by_percentage.len(), 2);
        // Requesting more places than universities is capped, not an error.
        let all = cumulative_solved(&dataset, &FilterSpec::all_regions(2014, 2016), Some(100));
        assert_eq!(all.by_solved.len(), 4);
    }

    #[test]
    fn repeat_participation_counts() {
        let dataset = sample_dataset();
        let result = repeat_participation(&dataset, &FilterSpec::all_regions(2014, 2016), None);

        // UH, UNAM and UASD each have one repeated team; UO never repeats
        // and is excluded from every ranking.
        assert_eq!(
            result.repeated_teams,
            vec![
                ("UH".to_string(), 1),
                ("UNAM".to_string(), 1),
                ("UASD".to_string(), 1)
            ]
        );
        assert!(result
            .repeated_teams
            .iter()
            .all(|(university, _)| university != "UO"));

        // UNAM and UASD repeat 1 of 2 teams (50%), UH 1 of 4 (25%).
        assert_eq!(result.repeated_teams_percent[0].0, "UNAM");
        assert_eq!(result.repeated_teams_percent[1].0, "UASD");
        assert!((result.repeated_teams_percent[0].1 - 50.0).abs() < 1e-9);
        assert_eq!(result.repeated_teams_percent[2].0, "UH");
        assert!((result.repeated_teams_percent[2].1 - 25.0).abs() < 1e-9);

        // One repeating player each; UH has 11 distinct players.
        assert_eq!(result.repeated_players[0].1, 1);
        let uh_percent = result
            .repeated_players_percent
            .iter()
            .find(|(u, _)| u == "UH")
            .map(|(_, p)| *p)
            .unwrap();
        assert!((uh_percent - 100.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_rosters_are_excluded() {
        let dataset = sample_dataset();
        // Within 2015-2016 every roster is disjoint from the others of its
        // university, so no ranking has any entries.
        let result = repeat_participation(&dataset, &FilterSpec::all_regions(2015, 2016), None);
        assert!(result.repeated_teams.is_empty());
        assert!(result.repeated_teams_percent.is_empty());
        assert!(result.repeated_players.is_empty());
        assert!(result.repeated_players_percent.is_empty());
    }
}
