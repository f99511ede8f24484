//! ECDC dataset harness.
//!
//! Reads an ECDC weekly case-distribution JSON download, expands every weekly
//! report into seven daily records, analyses the requested regions in
//! parallel and writes one JSON result per region.
//!
//! Usage: `validate <input.json> <output_dir> [geoId...]`
//!
//! With no geoIds every region in the file is analysed. Set `RUST_LOG=debug`
//! to see milestone and fit progress.

use chrono::{Duration, NaiveDate};
use fastEpicurve::prelude::*;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

// ============================================================================
// Input Format
// ============================================================================

#[derive(Debug, Deserialize)]
struct Download {
    records: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    date_rep: String,
    cases_weekly: Value,
    deaths_weekly: Value,
    geo_id: String,
    countries_and_territories: String,
    #[serde(rename = "popData2019", default)]
    pop_data_2019: Value,
}

// One region's weekly reports after parsing.
struct WeeklySeries {
    region: Region,
    weeks: Vec<(NaiveDate, i64, i64)>,
}

// ============================================================================
// Output Format
// ============================================================================

#[derive(Debug, Serialize)]
struct RegionReport {
    code: String,
    name: String,
    population: u64,
    latest_date: NaiveDate,
    milestones: MilestoneReport,
    cases: Option<FitReport>,
    deaths: Option<FitReport>,
    outcome: String,
    forecast: Vec<ForecastReport>,
    warnings: Vec<String>,
    smoothed: Vec<SmoothedDay>,
}

#[derive(Debug, Serialize)]
struct MilestoneReport {
    start: NaiveDate,
    day_zero: Option<NaiveDate>,
    peak_cases: NaiveDate,
    peak_deaths: NaiveDate,
    end: NaiveDate,
    cycle: isize,
    position: f64,
    growth_days: usize,
    growth_observed: bool,
    lag_days: isize,
    lag_observed: bool,
    data_sufficient: bool,
}

#[derive(Debug, Serialize)]
struct FitReport {
    scale: f64,
    shape: f64,
    rounds: usize,
    asymptote: f64,
    consistency: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ForecastReport {
    date: NaiveDate,
    cases: f64,
    cases_to_date: f64,
    deaths: Option<f64>,
    deaths_to_date: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SmoothedDay {
    date: NaiveDate,
    cases: Option<f64>,
    deaths: Option<f64>,
    infection_rate: Option<f64>,
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (Some(input), Some(output)) = (args.first(), args.get(1)) else {
        eprintln!("Usage: validate <input.json> <output_dir> [geoId...]");
        return Ok(());
    };
    let input_path = Path::new(input);
    let output_dir = Path::new(output);

    if !input_path.exists() {
        eprintln!("Input file {:?} does not exist.", input_path);
        return Ok(());
    }
    fs::create_dir_all(output_dir)?;

    let download: Download = serde_json::from_str(&clean_download(&fs::read_to_string(input_path)?))?;
    let mut regions = group_regions(download.records)?;
    info!("{} region(s) found in {:?}", regions.len(), input_path);

    let requested = &args[2..];
    let mut batch = Vec::new();
    if requested.is_empty() {
        batch.extend(regions.drain(..).map(expand_weekly));
    } else {
        for code in requested {
            match regions.iter().position(|weekly| &weekly.region.code == code) {
                Some(index) => batch.push(expand_weekly(regions.swap_remove(index))),
                None => error!("{}", EpicurveError::UnknownRegion(code.clone())),
            }
        }
    }

    let model = ParallelEpicurve::<f64>::new().parallel(true).build()?;
    let codes: Vec<String> = batch.iter().map(|s| s.region.code.clone()).collect();

    for (code, result) in codes.iter().zip(model.analyse_all(batch)) {
        match result {
            Ok(region_model) => {
                println!("{region_model}");
                let report = build_report(&region_model);
                let output_path = output_dir.join(format!("{code}.json"));
                fs::write(output_path, serde_json::to_string_pretty(&report)?)?;
            }
            Err(e) => error!("{code}: {e}"),
        }
    }

    Ok(())
}

// ============================================================================
// Loading
// ============================================================================

// Drop a byte-order mark and stray CSV lines that sometimes leak into downloads.
fn clean_download(text: &str) -> String {
    text.trim_start_matches('\u{feff}')
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !(trimmed.starts_with(|c: char| c.is_ascii_digit()) || trimmed.starts_with("dateRep"))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn as_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// Group raw records by geoId, keeping first-seen order.
fn group_regions(records: Vec<RawRecord>) -> Result<Vec<WeeklySeries>, Box<dyn Error>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut regions: Vec<WeeklySeries> = Vec::new();

    for record in records {
        let date = NaiveDate::parse_from_str(&record.date_rep, "%d/%m/%Y")?;
        let cases = as_count(&record.cases_weekly).unwrap_or(0);
        let deaths = as_count(&record.deaths_weekly).unwrap_or(0);

        let slot = *index.entry(record.geo_id.clone()).or_insert_with(|| {
            let population = as_count(&record.pop_data_2019).unwrap_or(0).max(0) as u64;
            if population == 0 {
                warn!("{}: no population figure", record.geo_id);
            }
            let name = record.countries_and_territories.replace('_', " ");
            regions.push(WeeklySeries {
                region: Region::new(record.geo_id.clone(), name, population),
                weeks: Vec::new(),
            });
            regions.len() - 1
        });
        regions[slot].weeks.push((date, cases, deaths));
    }

    Ok(regions)
}

// Spread each weekly report over its seven days: the six preceding days get a
// truncated seventh, the report day gets the remainder.
fn expand_weekly(weekly: WeeklySeries) -> RegionSeries<f64> {
    let mut days: Vec<(NaiveDate, i64, i64)> = Vec::with_capacity(weekly.weeks.len() * 7);
    for &(date, cases, deaths) in &weekly.weeks {
        let daily_cases = cases / 7;
        let daily_deaths = deaths / 7;
        for back in 1..=6 {
            days.push((date - Duration::days(back), daily_cases, daily_deaths));
        }
        days.push((date, cases - 6 * daily_cases, deaths - 6 * daily_deaths));
    }
    days.sort_by_key(|&(date, _, _)| date);
    days.dedup_by_key(|&mut (date, _, _)| date);

    RegionSeries::new(weekly.region, DailyRecord::series_from_counts(days))
}

// ============================================================================
// Reporting
// ============================================================================

fn build_report(model: &RegionModel<f64>) -> RegionReport {
    let m = &model.milestones;
    let fit_report = |metric: Metric, consistency: Option<f64>| {
        let fit = model.fit(metric)?;
        let curve = model.curve(metric)?;
        Some(FitReport {
            scale: fit.scale,
            shape: fit.shape,
            rounds: fit.rounds,
            asymptote: curve.asymptote,
            consistency,
        })
    };

    let forecast = model
        .forecast(0)
        .rows()
        .iter()
        .map(|row| ForecastReport {
            date: row.date,
            cases: row.cases,
            cases_to_date: row.cases_to_date,
            deaths: row.deaths,
            deaths_to_date: row.deaths_to_date,
        })
        .collect();

    RegionReport {
        code: model.region.code.clone(),
        name: model.region.name.clone(),
        population: model.region.population,
        latest_date: model.timeline.latest_date,
        milestones: MilestoneReport {
            start: m.start.date,
            day_zero: m.day_zero.map(|d| d.date),
            peak_cases: m.peak_cases.date,
            peak_deaths: m.peak_deaths.date,
            end: m.end.date,
            cycle: m.cycle,
            position: m.position,
            growth_days: m.growth_days.value(),
            growth_observed: m.growth_days.is_observed(),
            lag_days: m.lag_days.value(),
            lag_observed: m.lag_days.is_observed(),
            data_sufficient: m.data_sufficient,
        },
        cases: fit_report(Metric::Cases, model.diagnostics.cases_consistency),
        deaths: fit_report(Metric::Deaths, model.diagnostics.deaths_consistency),
        outcome: model.diagnostics.outcome.to_string(),
        forecast,
        warnings: model.warnings.iter().map(|w| w.to_string()).collect(),
        smoothed: model
            .records
            .iter()
            .map(|r| SmoothedDay {
                date: r.date,
                cases: r.smoothed_cases,
                deaths: r.smoothed_deaths,
                infection_rate: r.infection_rate,
            })
            .collect(),
    }
}
