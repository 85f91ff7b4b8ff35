mod analyzer;
mod graph;
mod loader;
mod models;
mod stats;

use anyhow::Result;
use clap::{Arg, Command};
use loader::Dataset;
use models::{Config, FilterSpec};
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    let matches = Command::new("contest-analyzer")
        .version("1.0")
        .about("Analyzes multi-year programming contest results")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("dataset")
                .short('d')
                .long("dataset")
                .value_name("FILE")
                .help("Dataset file path, overrides the configured one"),
        )
        .get_matches();

    let config_file = matches.get_one::<String>("config").unwrap();

    // Load or create configuration
    let mut config = if Path::new(config_file).exists() {
        println!("📋 Loading configuration from: {}", config_file);
        Config::load_from_file(config_file)?
    } else {
        println!("📝 Creating default configuration file: {}", config_file);
        let default_config = Config::default();
        default_config.save_to_file(config_file)?;
        println!(
            "⚠️  Please edit {} and point dataset_path at your dataset, then run the program again.",
            config_file
        );
        return Ok(());
    };

    if let Some(dataset_path) = matches.get_one::<String>("dataset") {
        config.dataset_path = dataset_path.clone();
    }

    // The dataset is load-bearing: without it no query can be served.
    println!("📂 Loading dataset from: {}", config.dataset_path);
    let dataset = Dataset::load_from_file(&config.dataset_path)?;

    let summary = dataset.summary();
    println!(
        "   ✅ {} editions ({}-{}), {} teams, {} universities, {} countries",
        summary.editions,
        summary.first_year.unwrap_or(0),
        summary.last_year.unwrap_or(0),
        summary.total_teams,
        summary.universities,
        summary.countries
    );

    let filter = config.filter_spec();
    if config.first_year > config.last_year {
        println!(
            "⚠️  Year range {}-{} is empty; all reports will be empty",
            config.first_year, config.last_year
        );
    }
    match &filter.regions {
        models::RegionFilter::All => println!("🌎 Regions: all"),
        models::RegionFilter::Named(names) => println!("🌎 Regions: {}", names.join(", ")),
    }

    let output_dir = config.output_directory.as_deref().unwrap_or("output");
    fs::create_dir_all(output_dir)?;
    clean_output_directory(output_dir)?;
    println!("📄 Output directory: {} (cleaned)", output_dir);

    let tracked = resolve_tracked_universities(&dataset, &filter, &config);
    if !tracked.is_empty() {
        println!("🎯 Tracked universities: {}", tracked.join(", "));
    }

    // One section per aggregator; a broken section is reported and skipped
    // so the remaining reports still get generated.
    let sections: [(&str, SectionFn); 7] = [
        ("country participations", generate_country_report),
        ("university participations", generate_university_report),
        ("solved statistics", generate_solved_statistics_report),
        ("place quartiles", generate_quartile_report),
        ("cumulative solved", generate_cumulative_report),
        ("repeat participation", generate_repeat_report),
        ("participation graphs", generate_graph_reports),
    ];

    for (name, section) in sections {
        println!("\n📊 Generating {} report...", name);
        match section(&dataset, &filter, &config, &tracked, output_dir) {
            Ok(()) => println!("   ✅ Done"),
            Err(e) => println!("   ❌ Failed to generate {} report: {}", name, e),
        }
    }

    println!("\n✅ Analysis complete!");
    println!("📂 Results written to: {}", output_dir);
    Ok(())
}

type SectionFn = fn(&Dataset, &FilterSpec, &Config, &[String], &str) -> Result<()>;

/// Tracked universities from the config, checked against the dataset so a
/// typo is visible immediately.
fn resolve_tracked_universities(
    dataset: &Dataset,
    filter: &FilterSpec,
    config: &Config,
) -> Vec<String> {
    let known = analyzer::universities_in_period(dataset, filter);
    let mut tracked = Vec::new();
    for university in &config.tracked_universities {
        if known.iter().any(|u| u == university) {
            tracked.push(university.clone());
        } else {
            println!(
                "⚠️  Tracked university not found in the selected period: {}",
                university
            );
        }
    }
    tracked
}

fn generate_country_report(
    dataset: &Dataset,
    filter: &FilterSpec,
    _config: &Config,
    _tracked: &[String],
    output_dir: &str,
) -> Result<()> {
    use csv::Writer;

    let ranking = analyzer::country_participations(dataset, filter);

    let csv_path = Path::new(output_dir).join("country_participations.csv");
    let mut writer = Writer::from_path(csv_path)?;
    writer.write_record(["Country", "Region", "Participations"])?;
    for (country, count) in &ranking {
        let region = dataset.region_name_of(country).unwrap_or("");
        let count = count.to_string();
        writer.write_record([country.as_str(), region, count.as_str()])?;
    }
    writer.flush()?;

    println!(
        "   🌍 {} countries with at least {} participations",
        ranking.len(),
        filter.min_participations
    );
    for (country, count) in ranking.iter().rev().take(3) {
        println!("      {} - {} editions", country, count);
    }
    Ok(())
}

fn generate_university_report(
    dataset: &Dataset,
    filter: &FilterSpec,
    _config: &Config,
    _tracked: &[String],
    output_dir: &str,
) -> Result<()> {
    use csv::Writer;

    let ranking = analyzer::university_participations(dataset, filter);

    let csv_path = Path::new(output_dir).join("university_participations.csv");
    let mut writer = Writer::from_path(csv_path)?;
    writer.write_record(["University", "Participations"])?;
    for (university, count) in &ranking {
        let count = count.to_string();
        writer.write_record([university.as_str(), count.as_str()])?;
    }
    writer.flush()?;

    println!(
        "   🎓 {} universities with at least {} team entries",
        ranking.len(),
        filter.min_participations
    );
    for (university, count) in ranking.iter().rev().take(3) {
        println!("      {} - {} teams", university, count);
    }
    Ok(())
}

fn generate_solved_statistics_report(
    dataset: &Dataset,
    filter: &FilterSpec,
    _config: &Config,
    tracked: &[String],
    output_dir: &str,
) -> Result<()> {
    use csv::Writer;

    let result = analyzer::solved_statistics(dataset, filter, tracked);

    let csv_path = Path::new(output_dir).join("solved_statistics.csv");
    let mut writer = Writer::from_path(csv_path)?;

    let mut header = vec![
        "Year".to_string(),
        "Min".to_string(),
        "Max".to_string(),
        "Mode".to_string(),
        "Mean".to_string(),
        "Median".to_string(),
    ];
    header.extend(result.universities.keys().cloned());
    writer.write_record(&header)?;

    for (i, year) in result.years.iter().enumerate() {
        let mut record = vec![
            year.to_string(),
            opt_cell(&result.min[i]),
            opt_cell(&result.max[i]),
            opt_cell(&result.mode[i]),
            result.mean[i].map(|m| format!("{:.2}", m)).unwrap_or_default(),
            opt_cell(&result.median[i]),
        ];
        for series in result.universities.values() {
            record.push(opt_cell(&series[i]));
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    let covered = result.min.iter().filter(|m| m.is_some()).count();
    println!(
        "   📈 {} of {} years have matching teams",
        covered,
        result.years.len()
    );
    Ok(())
}

fn generate_quartile_report(
    dataset: &Dataset,
    filter: &FilterSpec,
    _config: &Config,
    tracked: &[String],
    output_dir: &str,
) -> Result<()> {
    use csv::Writer;

    let result = analyzer::quartile_distribution(dataset, filter, tracked);

    let csv_path = Path::new(output_dir).join("place_quartiles.csv");
    let mut writer = Writer::from_path(csv_path)?;

    let mut header = vec![
        "Year".to_string(),
        "Q1".to_string(),
        "Q2".to_string(),
        "Q3".to_string(),
        "Q4".to_string(),
    ];
    for university in result.universities.keys() {
        header.push(format!("{} place", university));
        header.push(format!("{} solved", university));
    }
    writer.write_record(&header)?;

    for (i, year) in result.years.iter().enumerate() {
        let mut record = vec![
            year.to_string(),
            result.q1[i].to_string(),
            result.q2[i].to_string(),
            result.q3[i].to_string(),
            result.q4[i].to_string(),
        ];
        for standing in result.universities.values() {
            record.push(opt_cell(&standing.place[i]));
            record.push(opt_cell(&standing.solved[i]));
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;

    // Solved-count quartile samples exist only under a region filter.
    if let Some(samples) = &result.solved_samples {
        let csv_path = Path::new(output_dir).join("solved_quartiles.csv");
        let mut writer = Writer::from_path(csv_path)?;
        writer.write_record(["Year", "Q1 sample", "Q2 sample", "Q3 sample", "Q4 sample"])?;
        for (i, year) in result.years.iter().enumerate() {
            writer.write_record([
                year.to_string(),
                opt_cell(&samples[0][i]),
                opt_cell(&samples[1][i]),
                opt_cell(&samples[2][i]),
                opt_cell(&samples[3][i]),
            ])?;
        }
        writer.flush()?;
        println!("   📐 Wrote rank and solved-count quartiles");
    } else {
        println!("   📐 Wrote rank quartiles (no region filter, solved samples skipped)");
    }
    Ok(())
}

fn generate_cumulative_report(
    dataset: &Dataset,
    filter: &FilterSpec,
    config: &Config,
    _tracked: &[String],
    output_dir: &str,
) -> Result<()> {
    use csv::Writer;

    let result = analyzer::cumulative_solved(dataset, filter, config.top_places);

    let csv_path = Path::new(output_dir).join("cumulative_solved.csv");
    let mut writer = Writer::from_path(csv_path)?;
    writer.write_record(["University", "Solved"])?;
    for (university, solved) in &result.by_solved {
        let solved = solved.to_string();
        writer.write_record([university.as_str(), solved.as_str()])?;
    }
    writer.flush()?;

    let csv_path = Path::new(output_dir).join("cumulative_percentage.csv");
    let mut writer = Writer::from_path(csv_path)?;
    writer.write_record(["University", "Percent"])?;
    for (university, percent) in &result.by_percentage {
        let percent = format!("{:.2}", percent);
        writer.write_record([university.as_str(), percent.as_str()])?;
    }
    writer.flush()?;

    println!("   🏆 Top universities by total solved:");
    for (i, (university, solved)) in result.by_solved.iter().take(3).enumerate() {
        println!("      {}. {} - {} problems", i + 1, university, solved);
    }
    Ok(())
}

fn generate_repeat_report(
    dataset: &Dataset,
    filter: &FilterSpec,
    config: &Config,
    _tracked: &[String],
    output_dir: &str,
) -> Result<()> {
    let result = analyzer::repeat_participation(dataset, filter, config.top_places);

    write_count_ranking(output_dir, "repeated_teams.csv", &result.repeated_teams)?;
    write_percent_ranking(
        output_dir,
        "repeated_teams_percent.csv",
        &result.repeated_teams_percent,
    )?;
    write_count_ranking(output_dir, "repeated_players.csv", &result.repeated_players)?;
    write_percent_ranking(
        output_dir,
        "repeated_players_percent.csv",
        &result.repeated_players_percent,
    )?;

    println!(
        "   🔁 {} universities had teams with returning players",
        result.repeated_teams.len()
    );
    Ok(())
}

fn generate_graph_reports(
    dataset: &Dataset,
    _filter: &FilterSpec,
    config: &Config,
    _tracked: &[String],
    output_dir: &str,
) -> Result<()> {
    let graphs_dir = Path::new(output_dir).join("graphs");
    fs::create_dir_all(&graphs_dir)?;

    for (i, university) in config.graph_universities.iter().enumerate() {
        let graph = graph::overlap_graph(dataset, university);
        let participated = graph.nodes.iter().filter(|n| n.participated).count();
        if participated == 0 {
            println!(
                "   ⚠️  {} has no participations in {}-{}, graph will be empty",
                university,
                graph::FIRST_GRAPH_YEAR,
                graph::LAST_GRAPH_YEAR
            );
        }

        let safe_name = university.replace('/', "_").replace(' ', "_");
        let dot_path = graphs_dir.join(format!("{}.dot", safe_name));
        fs::write(dot_path, graph.to_dot(&format!("g{}", i)))?;
        println!(
            "   🕸️  {} - {} editions, {} overlap edges",
            graph.university,
            participated,
            graph.edges.len()
        );
    }
    Ok(())
}

fn write_count_ranking(output_dir: &str, file_name: &str, ranking: &[(String, u32)]) -> Result<()> {
    use csv::Writer;

    let mut writer = Writer::from_path(Path::new(output_dir).join(file_name))?;
    writer.write_record(["University", "Count"])?;
    for (university, count) in ranking {
        let count = count.to_string();
        writer.write_record([university.as_str(), count.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_percent_ranking(
    output_dir: &str,
    file_name: &str,
    ranking: &[(String, f64)],
) -> Result<()> {
    use csv::Writer;

    let mut writer = Writer::from_path(Path::new(output_dir).join(file_name))?;
    writer.write_record(["University", "Percent"])?;
    for (university, percent) in ranking {
        let percent = format!("{:.2}", percent);
        writer.write_record([university.as_str(), percent.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn opt_cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

// Clean up previous results from the output directory
fn clean_output_directory(output_dir: &str) -> Result<()> {
    let output_path = Path::new(output_dir);

    if !output_path.exists() {
        return Ok(());
    }

    let items_to_clean = [
        "country_participations.csv",
        "university_participations.csv",
        "solved_statistics.csv",
        "place_quartiles.csv",
        "solved_quartiles.csv",
        "cumulative_solved.csv",
        "cumulative_percentage.csv",
        "repeated_teams.csv",
        "repeated_teams_percent.csv",
        "repeated_players.csv",
        "repeated_players_percent.csv",
        "graphs",
    ];

    for item in &items_to_clean {
        let item_path = output_path.join(item);

        if item_path.exists() {
            if item_path.is_file() {
                fs::remove_file(&item_path)?;
            } else if item_path.is_dir() {
                fs::remove_dir_all(&item_path)?;
            }
        }
    }

    Ok(())
}
