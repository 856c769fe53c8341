//! # tabstat
//!
//! A CLI tool for generating small demo analysis reports as CSV files.
//!
//! ## Overview
//!
//! tabstat is built on top of tabstatlib and ships two self-contained
//! reports:
//!
//! - **experiment**: a synthetic measurement study - records split across
//!   Control/Treatment groups with two normally distributed measurement
//!   fields, per-record derived columns, and per-group summary statistics
//! - **dna**: a five-sequence DNA report - length, GC content, and
//!   start/stop codons per sequence
//!
//! Each run writes its CSV files into a directory created on demand and
//! prints a short preview of the result tables (or the full tables as
//! JSON).
//!
//! ## Usage
//!
//! ```bash
//! # Run the measurement study with defaults (seed 42, 10 records per group)
//! tabstat experiment
//!
//! # Same study, different seed and output directory
//! tabstat experiment --seed 7 -o /tmp/reports
//!
//! # Sequence report, JSON instead of the text preview
//! tabstat dna --output json
//! ```

mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tabstatlib::{
    derive_fields, generate_records, summarize_by_group, to_csv, CohortSpec, CsvOptions,
    FieldSpec, GroupSpec, SequenceRecord, Table,
};

use render::{render_table, section};

/// Fields folded into the group summary.
const SUMMARY_FIELDS: [&str; 3] = ["measurement_1", "measurement_2", "mean_measurement"];

/// Measurement fields of the experiment report.
fn experiment_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("measurement_1", 100.0, 15.0),
        FieldSpec::new("measurement_2", 50.0, 10.0),
    ]
}

/// The five demo sequences of the DNA report.
fn demo_sequences() -> Vec<SequenceRecord> {
    vec![
        SequenceRecord::new("lacZ_fragment", "ATGACCATGATTACGGATTCACTGTAA"),
        SequenceRecord::new("recA_fragment", "ATGGCTATCGACGAAAACAAATGA"),
        SequenceRecord::new("gfp_fragment", "ATGAGTAAAGGAGAAGAACTTTTCACTTAA"),
        SequenceRecord::new("rpoB_fragment", "ATGGTTTACTCCTATACCGAGTAG"),
        SequenceRecord::new("dnaK_fragment", "ATGGGTAAAATAATTGGTATCGACTTAGGTACTACCTGA"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tabstat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Demo analysis reports: grouped measurement statistics and DNA sequence stats")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("experiment")
                .about("Generate the synthetic measurement study and its group summary")
                .arg(
                    Arg::new("out-dir")
                        .short('o')
                        .long("out-dir")
                        .default_value("tabstat_out")
                        .help("Base directory for report output"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("42")
                        .value_parser(clap::value_parser!(u64))
                        .help("Random seed for the synthetic cohort"),
                )
                .arg(
                    Arg::new("per-group")
                        .long("per-group")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize))
                        .help("Records to generate per group"),
                )
                .arg(precision_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("dna")
                .about("Compute length, GC content, and codons for the demo sequences")
                .arg(
                    Arg::new("out-dir")
                        .short('o')
                        .long("out-dir")
                        .default_value("tabstat_out")
                        .help("Base directory for report output"),
                )
                .arg(precision_arg())
                .arg(output_arg()),
        )
}

fn precision_arg() -> Arg {
    Arg::new("precision")
        .long("precision")
        .default_value("2")
        .value_parser(clap::value_parser!(usize))
        .help("Decimal places for numeric values in CSV and previews")
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .value_parser(["table", "json"])
        .default_value("table")
        .help("Console output format")
}

/// Resolve the report output directory: `<out-dir>/<report>`
fn report_dir(matches: &ArgMatches, report: &str) -> PathBuf {
    let base = matches
        .get_one::<String>("out-dir")
        .map(|s| s.as_str())
        .unwrap_or("tabstat_out");
    Path::new(base).join(report)
}

/// Extract the precision setting from matches
fn extract_precision(matches: &ArgMatches) -> usize {
    matches.get_one::<usize>("precision").copied().unwrap_or(2)
}

/// Whether the console output format is JSON
fn output_is_json(matches: &ArgMatches) -> bool {
    matches.get_one::<String>("output").map(|s| s.as_str()) == Some("json")
}

/// Create the output directory on demand and write one CSV file into it
fn write_report_file(
    dir: &Path,
    name: &str,
    table: &Table,
    options: &CsvOptions,
) -> Result<(), anyhow::Error> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    let bytes = to_csv(table, options)?;
    let path = dir.join(name);
    fs::write(&path, bytes).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Print the report as one pretty JSON document, tables keyed by name
fn print_json(out_dir: &Path, tables: &[(&str, &Table)]) -> Result<(), anyhow::Error> {
    let mut doc = serde_json::Map::new();
    doc.insert(
        "out_dir".to_string(),
        serde_json::Value::String(out_dir.display().to_string()),
    );
    for (name, table) in tables {
        doc.insert((*name).to_string(), serde_json::to_value(table)?);
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(doc))?
    );
    Ok(())
}

/// Handler for the experiment command
fn experiment_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let out_dir = report_dir(matches, "experiment");
    let seed = matches.get_one::<u64>("seed").copied().unwrap_or(42);
    let per_group = matches.get_one::<usize>("per-group").copied().unwrap_or(10);
    let precision = extract_precision(matches);

    let spec = CohortSpec {
        id_prefix: "Sample".to_string(),
        groups: vec![
            GroupSpec::new("Control", per_group),
            GroupSpec::new("Treatment", per_group),
        ],
        fields: experiment_fields(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let records = generate_records(&spec, &mut rng)?;
    let derived = derive_fields(&records)?;
    let summaries = summarize_by_group(&derived, &SUMMARY_FIELDS)?;

    let detail = Table::from_records(&derived);
    let summary = Table::from_summaries(&summaries);

    let options = CsvOptions::new().precision(precision);
    write_report_file(&out_dir, "sample_measurements.csv", &detail, &options)?;
    write_report_file(&out_dir, "group_summary.csv", &summary, &options)?;

    if output_is_json(matches) {
        return print_json(&out_dir, &[("detail", &detail), ("summary", &summary)]);
    }

    println!("Done! Results in: {}", out_dir.display());
    println!();
    println!("{}", section("Sample data (first 5 rows):"));
    print!("{}", render_table(&detail.head(5), precision));
    println!();
    println!("{}", section("Group summary statistics:"));
    print!("{}", render_table(&summary, precision));

    Ok(())
}

/// Handler for the dna command
fn dna_handler(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let out_dir = report_dir(matches, "dna");
    let precision = extract_precision(matches);

    let sequences = demo_sequences();
    let table = Table::from_sequences(&sequences);

    let options = CsvOptions::new().precision(precision);
    write_report_file(&out_dir, "sequence_report.csv", &table, &options)?;

    if output_is_json(matches) {
        return print_json(&out_dir, &[("sequences", &table)]);
    }

    println!("Done! Results in: {}", out_dir.display());
    println!();
    println!("{}", section("Sequence report:"));
    print!("{}", render_table(&table, precision));

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let result = match matches.subcommand() {
        Some(("experiment", sub_matches)) => experiment_handler(sub_matches),
        Some(("dna", sub_matches)) => dna_handler(sub_matches),
        _ => {
            // subcommand_required(true) makes clap report this case first
            build_command().print_help().map_err(anyhow::Error::from)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
