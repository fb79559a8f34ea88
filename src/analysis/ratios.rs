//! Financial ratio analysis, debt-service coverage and break-even tables

use serde::{Deserialize, Serialize};

use crate::input::CmaData;
use crate::projection::YearlyProjection;

/// Ratio analysis for one year. Percentages are on a 0-100 scale.
///
/// Divisions are unguarded: a zero base gives an infinite or NaN ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioAnalysis {
    pub year: i32,

    // Profitability
    pub gross_profit_percent: f64,
    pub operating_profit_percent: f64,
    pub net_profit_percent: f64,
    pub return_on_capital_employed: f64,
    pub return_on_net_worth: f64,

    // Liquidity
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub cash_ratio: f64,

    // Leverage
    pub tol_tnw: f64,
    pub debt_equity: f64,
    pub interest_coverage: f64,

    // Turnover
    pub stock_turnover: f64,
    pub debtors_turnover: f64,
    pub fixed_assets_turnover: f64,
    pub total_assets_turnover: f64,
}

impl RatioAnalysis {
    pub fn from_projection(p: &YearlyProjection) -> Self {
        let interest = p.cc_interest + p.tl_interest;
        let capital_employed = p.capital_account + p.term_loan_due + p.cc_account;
        let cash = p.cash_in_hand + p.bank_balance;

        Self {
            year: p.year,
            gross_profit_percent: p.gp_percent,
            operating_profit_percent: p.operating_profit / p.net_sales * 100.0,
            net_profit_percent: p.pat / p.net_sales * 100.0,
            return_on_capital_employed: (p.pbt + interest) / capital_employed * 100.0,
            return_on_net_worth: p.pat / p.capital_account * 100.0,
            current_ratio: p.current_ratio,
            quick_ratio: (p.total_current_assets - p.stock) / p.total_current_liabilities,
            cash_ratio: cash / p.total_current_liabilities,
            tol_tnw: p.tol_tnw,
            debt_equity: p.term_loan_due / p.capital_account,
            interest_coverage: p.operating_profit / interest,
            stock_turnover: (p.net_sales - p.gross_profit) / p.stock,
            debtors_turnover: p.net_sales / p.debtors,
            fixed_assets_turnover: p.net_sales / p.fixed_assets_wdv,
            total_assets_turnover: p.net_sales / p.total_assets,
        }
    }
}

pub fn ratio_analysis(years: &[YearlyProjection]) -> Vec<RatioAnalysis> {
    years.iter().map(RatioAnalysis::from_projection).collect()
}

/// Debt-service coverage for one year, term-loan view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DscrRow {
    pub year: i32,
    pub pat: f64,
    pub depreciation: f64,
    pub tl_interest: f64,
    pub total_inflows: f64,
    pub principal_repayment: f64,
    pub total_obligations: f64,
    /// Coverage as projected (cash accruals over total debt service)
    pub dscr: f64,
}

pub fn dscr_table(data: &CmaData, years: &[YearlyProjection]) -> Vec<DscrRow> {
    let principal = data.basic_data.annual_installment();

    years
        .iter()
        .map(|p| DscrRow {
            year: p.year,
            pat: p.pat,
            depreciation: p.depreciation,
            tl_interest: p.tl_interest,
            total_inflows: p.pat + p.depreciation + p.tl_interest,
            principal_repayment: principal,
            total_obligations: p.tl_interest + principal,
            dscr: p.dscr,
        })
        .collect()
}

/// Break-even analysis for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenRow {
    pub year: i32,
    pub sales: f64,
    pub variable_cost: f64,
    pub contribution: f64,
    pub fixed_cost: f64,
    pub bep_sales: f64,
    pub bep_percent: f64,
    pub margin_of_safety: f64,
}

pub fn break_even_table(years: &[YearlyProjection]) -> Vec<BreakEvenRow> {
    years
        .iter()
        .map(|p| {
            let contribution = p.gross_profit;
            BreakEvenRow {
                year: p.year,
                sales: p.net_sales,
                variable_cost: p.net_sales - p.gross_profit,
                contribution,
                fixed_cost: p.fixed_costs,
                bep_sales: p.fixed_costs * p.net_sales / contribution,
                bep_percent: p.bep,
                margin_of_safety: 100.0 - p.bep,
            }
        })
        .collect()
}
