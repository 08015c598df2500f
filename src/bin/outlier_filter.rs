//! Apply Tukey 1.5x IQR outlier removal to the aggregated yearly counts
//! and write the filtered series.

use normcheck::io::{load_series, write_series};
use normcheck::outlier::{partition_series, DEFAULT_IQR_MULTIPLIER};
use std::path::Path;

const INPUT: &str = "aggregated_counts.csv";
const OUTPUT: &str = "outlier_filtered.csv";
const VALUE_COLUMN: &str = "aggregate_value";

fn run() -> normcheck::Result<()> {
    let series = load_series(Path::new(INPUT), VALUE_COLUMN)?;
    let partition = partition_series(&series, DEFAULT_IQR_MULTIPLIER);

    write_series(Path::new(OUTPUT), &partition.kept, VALUE_COLUMN)?;

    println!("Outlier removal (Tukey {DEFAULT_IQR_MULTIPLIER} * IQR) complete.");
    println!("Input file : {INPUT}");
    println!("Output file: {OUTPUT}");
    println!("Q1 (25%)          : {:.4}", partition.bounds.q1);
    println!("Q3 (75%)          : {:.4}", partition.bounds.q3);
    println!("IQR               : {:.4}", partition.bounds.iqr);
    println!("Lower bound       : {:.4}", partition.bounds.lower);
    println!("Upper bound       : {:.4}", partition.bounds.upper);
    println!("Original rows     : {}", series.len());
    println!("Rows after filter : {}", partition.kept.len());
    println!("Rows removed      : {}", partition.removed.len());
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
