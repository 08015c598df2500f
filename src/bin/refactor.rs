//! Refactor the raw meteorite CSV down to `[year, aggregate_value]`:
//! parse years, keep 1800-2013, keep Fell/Found rows, drop exact
//! duplicates, and count records per year.

use normcheck::io::{load_raw, write_series};
use normcheck::pipeline::{aggregate_by_year, dedup_rows, filter_fell_found, filter_year_range};
use std::path::Path;

const INPUT: &str = "Meteorite_Landings.csv";
const OUTPUT: &str = "aggregated_counts.csv";

fn run() -> normcheck::Result<()> {
    let records = load_raw(Path::new(INPUT))?;
    let rows_original = records.len();

    let records = filter_year_range(records, &(1800..=2013));
    let records = filter_fell_found(records);
    let records = dedup_rows(records);
    let rows_filtered = records.len();

    let series = aggregate_by_year(&records);
    write_series(Path::new(OUTPUT), &series, "aggregate_value")?;

    println!("Refactor complete.");
    println!("Input file : {INPUT}");
    println!("Output file: {OUTPUT}");
    println!("Original rows           : {rows_original}");
    println!("Rows after all filters  : {rows_filtered}");
    println!("Distinct years in output: {}", series.len());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
