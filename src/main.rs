//! CMA Projection CLI
//!
//! Projects one report from a JSON input and prints the five-year summary

use anyhow::{Context, Result};
use clap::Parser;
use cma_projection::{
    analysis::ReportAnalysis,
    export::{report_to_json, write_analysis_csv, write_projection_csv, write_statement_csv},
    format::{format_lakhs_default, format_percent, format_ratio},
    input::{load_fixed_assets, CmaData},
    projection::{status_label, ProjectionConfig, ProjectionEngine},
};
use log::{info, warn};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cma", version, about = "Five-year CMA projection for a bank-loan report")]
struct Args {
    /// Report input (JSON: basicData, fixedAssets, openingBalances)
    input: PathBuf,

    /// Replace the fixed-asset register with a CSV file
    #[arg(long)]
    assets: Option<PathBuf>,

    /// JSON file overriding the projection heuristics
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every projected field, one row per year
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the line-item statement in lakhs
    #[arg(long)]
    statement: Option<PathBuf>,

    /// Write projection, summary and analyses as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Directory for the fixed-asset schedules and analysis tables (working
    /// capital, fund flow, ratios, DSCR, break-even)
    #[arg(long)]
    analysis: Option<PathBuf>,

    /// Skip input validation
    #[arg(long)]
    no_validate: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = load_input(&args)?;
    let config = match &args.config {
        Some(path) => ProjectionConfig::from_json_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ProjectionConfig::default(),
    };

    let engine = ProjectionEngine::new(config);
    let projection = engine.project(&data);
    let analysis = ReportAnalysis::build(&data, &projection.years, engine.config());

    println!("CMA Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");
    println!("Business:   {}", data.basic_data.business_name);
    println!("Proprietor: {}", data.basic_data.proprietor);
    println!("Nature:     {}", analysis.glance.nature_of_business);
    println!();

    println!("Projection (Rs. Lakhs):");
    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>8} {:>8} {:>8}",
        "Year", "Status", "Sales", "GP", "PAT", "Capital", "Assets", "CR", "DSCR", "BEP"
    );
    println!("{}", "-".repeat(100));
    for (idx, year) in projection.years.iter().enumerate() {
        println!(
            "{:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>8} {:>8} {:>8}",
            year.year_label,
            status_label(idx),
            format_lakhs_default(year.net_sales),
            format_lakhs_default(year.gross_profit),
            format_lakhs_default(year.pat),
            format_lakhs_default(year.capital_account),
            format_lakhs_default(year.total_assets),
            format_ratio(year.current_ratio),
            format_ratio(year.dscr),
            format_percent(year.bep, 1),
        );
        if !year.is_balanced(1.0) {
            warn!(
                "{}: balance sheet off by {:.2} (cash & bank plug {:.2})",
                year.year_label,
                year.balance_difference(),
                year.cash_bank_total
            );
        }
    }

    let glance = &analysis.glance;
    println!("\nKey Financial Indicators:");
    println!("  Average DSCR:          {}", format_ratio(glance.average_dscr));
    println!("  Average BEP:           {}", format_percent(glance.average_bep, 1));
    println!("  Average TOL/TNW:       {}", format_ratio(glance.average_tol_tnw));
    println!("  Average Current Ratio: {}", format_ratio(glance.average_current_ratio));

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_projection_csv(BufWriter::new(file), &projection.years)?;
        println!("\nProjection written to: {}", path.display());
    }

    if let Some(path) = &args.statement {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_statement_csv(BufWriter::new(file), &projection)?;
        println!("Statement written to: {}", path.display());
    }

    if let Some(dir) = &args.analysis {
        let written = write_analysis_csv(dir, &projection, &analysis)
            .with_context(|| format!("Unable to write analysis to {}", dir.display()))?;
        println!("{} analysis tables written to: {}", written.len(), dir.display());
    }

    if let Some(path) = &args.json {
        let json = report_to_json(&projection, &analysis)?;
        fs::write(path, json).with_context(|| format!("Unable to write {}", path.display()))?;
        println!("Report JSON written to: {}", path.display());
    }

    Ok(())
}

fn load_input(args: &Args) -> Result<CmaData> {
    let file = File::open(&args.input)
        .with_context(|| format!("Unable to open {}", args.input.display()))?;
    let mut data: CmaData = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    if let Some(path) = &args.assets {
        data.fixed_assets = load_fixed_assets(path)
            .with_context(|| format!("Failed to load assets {}", path.display()))?;
        info!("Using {} fixed assets from {}", data.fixed_assets.len(), path.display());
    }

    if !args.no_validate {
        data.validate().context("Input validation failed")?;
    }

    Ok(data)
}
