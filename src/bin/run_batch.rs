//! Project every report in a directory
//!
//! Loads all `*.json` inputs, projects them in parallel and writes one summary
//! row per report.

use anyhow::{Context, Result};
use clap::Parser;
use cma_projection::{
    batch::ReportRunner,
    input::{load_cma_data, CmaData},
};
use log::warn;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every CMA input in a directory")]
struct Args {
    /// Directory of report inputs (*.json)
    dir: PathBuf,

    /// Summary CSV path
    #[arg(long, default_value = "batch_summary.csv")]
    output: PathBuf,
}

/// Summary row per report
#[derive(Debug, Serialize)]
struct SummaryRow {
    file: String,
    business_name: String,
    first_year: i32,
    last_year: i32,
    average_dscr: f64,
    average_bep: f64,
    average_tol_tnw: f64,
    average_current_ratio: f64,
    total_pat: f64,
    final_capital: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading reports from {}...", args.dir.display());

    let mut paths: Vec<PathBuf> = fs::read_dir(&args.dir)
        .with_context(|| format!("Unable to read {}", args.dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    let mut reports: Vec<CmaData> = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_cma_data(path) {
            Ok(data) => {
                files.push(path.clone());
                reports.push(data);
            }
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
    println!("Loaded {} reports in {:?}", reports.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let runner = ReportRunner::new();
    let results = runner.run_batch(&reports);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut wtr = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    for ((path, data), projection) in files.iter().zip(&reports).zip(&results) {
        let summary = projection.summary();
        wtr.serialize(SummaryRow {
            file: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            business_name: data.basic_data.business_name.clone(),
            first_year: summary.first_year,
            last_year: summary.last_year,
            average_dscr: summary.average_dscr,
            average_bep: summary.average_bep,
            average_tol_tnw: summary.average_tol_tnw,
            average_current_ratio: summary.average_current_ratio,
            total_pat: summary.total_pat,
            final_capital: summary.final_capital,
        })?;
    }
    wtr.flush()?;

    println!("Output written to {}", args.output.display());
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
