//! Output structures for CMA projections

use serde::{Deserialize, Serialize};

use crate::depreciation::DepreciationSchedule;

/// Projected statements for one financial year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    // Timing
    pub year: i32,
    pub year_label: String,
    pub is_actual: bool,

    // Profit & loss
    pub gross_sales: f64,
    pub other_operating_revenue: f64,
    pub net_sales: f64,
    pub opening_stock: f64,
    pub closing_stock: f64,
    pub purchases: f64,
    pub gross_profit: f64,
    pub gp_percent: f64,
    pub admin_expenses: f64,
    pub depreciation: f64,
    pub operating_profit: f64,
    pub cc_interest: f64,
    pub tl_interest: f64,
    pub net_operating_profit: f64,
    pub interest_income: f64,
    pub pbt: f64,
    pub tax: f64,
    pub pat: f64,
    pub drawings: f64,

    // Balance sheet: liabilities
    pub capital_account: f64,
    pub cc_account: f64,
    pub term_loan_due: f64,
    pub unsecured_loan: f64,
    pub creditors: f64,
    pub advances_received: f64,
    pub other_current_liabilities: f64,
    pub total_liabilities: f64,

    // Balance sheet: assets
    pub fixed_assets_wdv: f64,
    pub investments: f64,
    /// Raw balancing figure before the zero floor; negative means the sheet
    /// does not balance
    pub cash_bank_total: f64,
    pub cash_in_hand: f64,
    pub bank_balance: f64,
    pub stock: f64,
    pub debtors: f64,
    pub advances_deposits: f64,
    pub total_assets: f64,

    // Working capital
    pub total_current_assets: f64,
    pub total_current_liabilities: f64,
    pub working_capital_gap: f64,
    pub net_working_capital: f64,
    pub assessed_bank_finance: f64,

    // Ratios
    pub current_ratio: f64,
    pub tol_tnw: f64,
    pub cash_accruals: f64,
    pub debt_service: f64,
    pub dscr: f64,
    pub fixed_costs: f64,
    pub bep: f64,
}

impl YearlyProjection {
    /// Total assets minus total liabilities
    pub fn balance_difference(&self) -> f64 {
        self.total_assets - self.total_liabilities
    }

    /// Whether assets and liabilities agree within `tolerance`
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        self.balance_difference().abs() <= tolerance
    }
}

/// Column status for a year: "Audited" for the base year, "Estimated" for the
/// first projected year, "Projected" thereafter
pub fn status_label(year_index: usize) -> &'static str {
    match year_index {
        0 => "Audited",
        1 => "Estimated",
        _ => "Projected",
    }
}

/// Complete projection result for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmaProjection {
    /// Yearly statements, base year first
    pub years: Vec<YearlyProjection>,

    /// Depreciation schedules, one per year, in the same order
    pub schedules: Vec<DepreciationSchedule>,
}

impl CmaProjection {
    pub fn new() -> Self {
        Self {
            years: Vec::new(),
            schedules: Vec::new(),
        }
    }

    pub fn add_year(&mut self, year: YearlyProjection, schedule: DepreciationSchedule) {
        self.years.push(year);
        self.schedules.push(schedule);
    }

    /// Averages over all years, as shown on the project-at-a-glance page
    pub fn summary(&self) -> ProjectionSummary {
        let n = self.years.len() as f64;
        let mean = |f: fn(&YearlyProjection) -> f64| -> f64 {
            self.years.iter().map(f).sum::<f64>() / n
        };

        ProjectionSummary {
            total_years: self.years.len() as u32,
            first_year: self.years.first().map(|y| y.year).unwrap_or(0),
            last_year: self.years.last().map(|y| y.year).unwrap_or(0),
            average_dscr: mean(|y| y.dscr),
            average_bep: mean(|y| y.bep),
            average_tol_tnw: mean(|y| y.tol_tnw),
            average_current_ratio: mean(|y| y.current_ratio),
            total_pat: self.years.iter().map(|y| y.pat).sum(),
            final_capital: self.years.last().map(|y| y.capital_account).unwrap_or(0.0),
        }
    }
}

impl Default for CmaProjection {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub first_year: i32,
    pub last_year: i32,
    pub average_dscr: f64,
    pub average_bep: f64,
    pub average_tol_tnw: f64,
    pub average_current_ratio: f64,
    pub total_pat: f64,
    pub final_capital: f64,
}
