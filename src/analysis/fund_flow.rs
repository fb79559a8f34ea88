//! Fund-flow statement: sources and uses of funds by year

use serde::{Deserialize, Serialize};

use crate::input::CmaData;
use crate::projection::{ProjectionConfig, YearlyProjection};

/// Sources and uses of funds for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundFlowYear {
    pub year: i32,

    // Sources
    pub pat: f64,
    pub depreciation: f64,
    pub cash_accruals: f64,
    pub increase_in_capital: f64,
    pub increase_in_term_loan: f64,
    pub total_sources: f64,

    // Uses
    pub term_loan_repayment: f64,
    pub fixed_asset_additions: f64,
    pub investment_increase: f64,
    pub drawings: f64,
    pub total_uses: f64,

    pub net_surplus: f64,
    pub cumulative_surplus: f64,
}

/// Build the fund-flow statement.
///
/// The term loan and the fixed-asset block are treated as raised in the base
/// year; repayments start the year after.
pub fn fund_flow(
    data: &CmaData,
    years: &[YearlyProjection],
    config: &ProjectionConfig,
) -> Vec<FundFlowYear> {
    let basic = &data.basic_data;
    let mut cumulative = 0.0;

    years
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let base = i == 0;

            let cash_accruals = p.pat + p.depreciation;
            let increase_in_capital = if base {
                (p.capital_account - data.opening_balances.capital_account).max(0.0)
            } else {
                0.0
            };
            let increase_in_term_loan = if base { basic.tl_amount } else { 0.0 };
            let total_sources = cash_accruals + increase_in_capital + increase_in_term_loan;

            let term_loan_repayment = if base { 0.0 } else { basic.annual_installment() };
            let fixed_asset_additions = if base {
                p.fixed_assets_wdv + p.depreciation
            } else {
                0.0
            };
            let investment_increase = config.investments_step;
            let total_uses =
                term_loan_repayment + fixed_asset_additions + investment_increase + p.drawings;

            let net_surplus = total_sources - total_uses;
            cumulative += net_surplus;

            FundFlowYear {
                year: p.year,
                pat: p.pat,
                depreciation: p.depreciation,
                cash_accruals,
                increase_in_capital,
                increase_in_term_loan,
                total_sources,
                term_loan_repayment,
                fixed_asset_additions,
                investment_increase,
                drawings: p.drawings,
                total_uses,
                net_surplus,
                cumulative_surplus: cumulative,
            }
        })
        .collect()
}
