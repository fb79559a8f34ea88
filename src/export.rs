//! CSV and JSON output for finished projections

use log::{debug, info};
use serde::Serialize;
use serde_json::json;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::analysis::ReportAnalysis;
use crate::depreciation::{DepreciationSchedule, ScheduleRow};
use crate::error::CmaResult;
use crate::format::{format_lakhs_default, format_percent};
use crate::projection::{status_label, CmaProjection, YearlyProjection};

/// Administrative expenses split into report heads: salaries, rent,
/// selling and general admin
const ADMIN_SPLIT: [(&str, f64); 4] = [
    ("Salaries & Wages", 0.5),
    ("Rent, Rates & Taxes", 0.15),
    ("Selling & Distribution", 0.1),
    ("Admin & General Expenses", 0.25),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Lakhs,
    Percent,
}

type LineItem = (&'static str, Unit, fn(&YearlyProjection) -> f64);

const SALES_AND_COST: &[LineItem] = &[
    ("Gross Sales", Unit::Lakhs, |y| y.gross_sales),
    ("Net Sales", Unit::Lakhs, |y| y.net_sales),
    ("Opening Stock", Unit::Lakhs, |y| y.opening_stock),
    ("Purchases", Unit::Lakhs, |y| y.purchases),
    ("Closing Stock", Unit::Lakhs, |y| y.closing_stock),
    ("Cost of Goods Sold", Unit::Lakhs, |y| {
        y.opening_stock + y.purchases - y.closing_stock
    }),
    ("Gross Profit", Unit::Lakhs, |y| y.gross_profit),
    ("Gross Profit %", Unit::Percent, |y| y.gp_percent),
];

const OPERATING_RESULT: &[LineItem] = &[
    ("Administrative Expenses", Unit::Lakhs, |y| y.admin_expenses),
    ("Depreciation", Unit::Lakhs, |y| y.depreciation),
    ("Total Operating Expenses", Unit::Lakhs, |y| y.admin_expenses + y.depreciation),
    ("Operating Profit (PBDIT)", Unit::Lakhs, |y| y.operating_profit + y.depreciation),
    ("Operating Profit (PBIT)", Unit::Lakhs, |y| y.operating_profit),
    ("Interest on Cash Credit", Unit::Lakhs, |y| y.cc_interest),
    ("Interest on Term Loan", Unit::Lakhs, |y| y.tl_interest),
    ("Total Interest", Unit::Lakhs, |y| y.cc_interest + y.tl_interest),
    ("Net Operating Profit", Unit::Lakhs, |y| y.net_operating_profit),
    ("Interest Income", Unit::Lakhs, |y| y.interest_income),
    ("Profit Before Tax", Unit::Lakhs, |y| y.pbt),
    ("Tax", Unit::Lakhs, |y| y.tax),
    ("Profit After Tax", Unit::Lakhs, |y| y.pat),
    ("PAT % of Sales", Unit::Percent, |y| y.pat / y.net_sales * 100.0),
    ("Cash Accruals (PAT + Depreciation)", Unit::Lakhs, |y| y.cash_accruals),
    ("Drawings", Unit::Lakhs, |y| y.drawings),
];

const LIABILITIES: &[LineItem] = &[
    ("Cash Credit", Unit::Lakhs, |y| y.cc_account),
    ("Sundry Creditors", Unit::Lakhs, |y| y.creditors),
    ("Advances Received", Unit::Lakhs, |y| y.advances_received),
    ("Other Current Liabilities", Unit::Lakhs, |y| y.other_current_liabilities),
    ("Total Current Liabilities", Unit::Lakhs, |y| y.total_current_liabilities),
    ("Term Loan", Unit::Lakhs, |y| y.term_loan_due),
    ("Unsecured Loan", Unit::Lakhs, |y| y.unsecured_loan),
    ("Total Term Liabilities", Unit::Lakhs, |y| y.term_loan_due + y.unsecured_loan),
    ("Capital Account", Unit::Lakhs, |y| y.capital_account),
    ("TOTAL LIABILITIES", Unit::Lakhs, |y| y.total_liabilities),
];

const ASSETS: &[LineItem] = &[
    ("Cash in Hand", Unit::Lakhs, |y| y.cash_in_hand),
    ("Bank Balance", Unit::Lakhs, |y| y.bank_balance),
    ("Stock", Unit::Lakhs, |y| y.stock),
    ("Sundry Debtors", Unit::Lakhs, |y| y.debtors),
    ("Advances & Deposits", Unit::Lakhs, |y| y.advances_deposits),
    ("Total Current Assets", Unit::Lakhs, |y| y.total_current_assets),
    ("Gross Block", Unit::Lakhs, |y| y.fixed_assets_wdv + y.depreciation),
    ("Less: Depreciation", Unit::Lakhs, |y| y.depreciation),
    ("Fixed Assets (WDV)", Unit::Lakhs, |y| y.fixed_assets_wdv),
    ("Investments", Unit::Lakhs, |y| y.investments),
    ("TOTAL ASSETS", Unit::Lakhs, |y| y.total_assets),
    ("Balancing Check (Assets - Liabilities)", Unit::Lakhs, |y| {
        (y.total_assets - y.total_liabilities).abs()
    }),
];

/// One line of a fixed-asset schedule, tagged with its year
#[derive(Debug, Serialize)]
struct FixedAssetCsvRow<'a> {
    year: i32,
    name: &'a str,
    rate: f64,
    opening_wdv: f64,
    additions: f64,
    sales: f64,
    total: f64,
    depreciation: f64,
    closing_wdv: f64,
}

impl<'a> FixedAssetCsvRow<'a> {
    fn new(year: i32, row: &'a ScheduleRow) -> Self {
        Self {
            year,
            name: &row.name,
            rate: row.rate,
            opening_wdv: row.opening_wdv,
            additions: row.additions,
            sales: row.sales,
            total: row.total,
            depreciation: row.depreciation,
            closing_wdv: row.closing_wdv,
        }
    }
}

/// One row per year with every projected field; headers are the camelCase
/// field names.
pub fn write_projection_csv<W: Write>(writer: W, years: &[YearlyProjection]) -> CmaResult<()> {
    write_table_csv(writer, years)
}

/// One CSV row per record of a flat table (the yearly analysis rows), with
/// the field names as headers
pub fn write_table_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> CmaResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    debug!("Wrote {} CSV rows", rows.len());
    Ok(())
}

/// Every year's depreciation schedule, asset rows followed by a TOTAL row
pub fn write_fixed_assets_csv<W: Write>(
    writer: W,
    schedules: &[DepreciationSchedule],
) -> CmaResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut count = 0;
    for schedule in schedules {
        let totals = schedule.totals();
        for row in schedule.rows.iter().chain(std::iter::once(&totals)) {
            wtr.serialize(FixedAssetCsvRow::new(schedule.year, row))?;
            count += 1;
        }
    }
    wtr.flush()?;
    debug!("Wrote {} fixed-asset rows", count);
    Ok(())
}

/// The fixed-asset schedules and every yearly analysis table into `dir`,
/// one file per sheet.
///
/// Returns the paths written.
pub fn write_analysis_csv(
    dir: &Path,
    projection: &CmaProjection,
    analysis: &ReportAnalysis,
) -> CmaResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let fixed_assets = dir.join("fixed_assets.csv");
    write_fixed_assets_csv(BufWriter::new(File::create(&fixed_assets)?), &projection.schedules)?;

    let written = vec![
        fixed_assets,
        write_table_file(&dir.join("working_capital.csv"), &analysis.working_capital)?,
        write_table_file(&dir.join("fund_flow.csv"), &analysis.fund_flow)?,
        write_table_file(&dir.join("ratios.csv"), &analysis.ratios)?,
        write_table_file(&dir.join("dscr.csv"), &analysis.dscr)?,
        write_table_file(&dir.join("break_even.csv"), &analysis.break_even)?,
    ];

    info!("Wrote {} analysis tables to {}", written.len(), dir.display());
    Ok(written)
}

fn write_table_file<T: Serialize>(path: &Path, rows: &[T]) -> CmaResult<PathBuf> {
    write_table_csv(BufWriter::new(File::create(path)?), rows)?;
    Ok(path.to_path_buf())
}

/// Report-style statement: one row per line item, one column per year.
///
/// Amounts are in lakhs; the margin rows are percentages. Administrative
/// expenses are also shown split into their usual report heads.
pub fn write_statement_csv<W: Write>(writer: W, projection: &CmaProjection) -> CmaResult<()> {
    let years = &projection.years;
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    let mut header = vec!["Particulars".to_string()];
    header.extend(years.iter().map(|y| y.year_label.clone()));
    wtr.write_record(&header)?;

    let mut status = vec![String::new()];
    status.extend((0..years.len()).map(|i| status_label(i).to_string()));
    wtr.write_record(&status)?;

    wtr.write_record(["PROFIT & LOSS (Rs. Lakhs)"])?;
    for (label, unit, field) in SALES_AND_COST {
        wtr.write_record(line_record(label, *unit, years, field))?;
    }
    for (label, share) in ADMIN_SPLIT {
        let split = |y: &YearlyProjection| y.admin_expenses * share;
        wtr.write_record(line_record(label, Unit::Lakhs, years, split))?;
    }
    for (label, unit, field) in OPERATING_RESULT {
        wtr.write_record(line_record(label, *unit, years, field))?;
    }

    let sections: [(&str, &[LineItem]); 2] = [
        ("LIABILITIES (Rs. Lakhs)", LIABILITIES),
        ("ASSETS (Rs. Lakhs)", ASSETS),
    ];
    for (title, items) in sections {
        wtr.write_record([title])?;
        for (label, unit, field) in items {
            wtr.write_record(line_record(label, *unit, years, field))?;
        }
    }

    wtr.flush()?;
    Ok(())
}

fn line_record(
    label: &str,
    unit: Unit,
    years: &[YearlyProjection],
    field: impl Fn(&YearlyProjection) -> f64,
) -> Vec<String> {
    let mut row = vec![label.to_string()];
    row.extend(years.iter().map(|y| match unit {
        Unit::Lakhs => format_lakhs_default(field(y)),
        Unit::Percent => format_percent(field(y), 1),
    }));
    row
}

/// Pretty-printed JSON of the projection
pub fn projection_to_json(projection: &CmaProjection) -> CmaResult<String> {
    Ok(serde_json::to_string_pretty(projection)?)
}

/// Projection, summary and analysis sheets in one JSON document
pub fn report_to_json(projection: &CmaProjection, analysis: &ReportAnalysis) -> CmaResult<String> {
    let document = json!({
        "projection": projection,
        "summary": projection.summary(),
        "analysis": analysis,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
