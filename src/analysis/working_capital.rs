//! Working-capital assessment: current assets and liabilities, MPBF and
//! holding periods

use serde::{Deserialize, Serialize};

use crate::projection::{ProjectionConfig, YearlyProjection};

/// Share of current assets the borrower must fund from long-term sources
pub const MIN_NWC_SHARE: f64 = 0.25;

/// Share of the working-capital gap a bank finances under the first method
pub const METHOD_ONE_SHARE: f64 = 0.75;

/// Working-capital assessment for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapitalAssessment {
    pub year: i32,
    pub current_assets_excl_cash: f64,
    pub current_liabilities_excl_bank: f64,
    pub working_capital_gap: f64,
    pub min_stipulated_nwc: f64,
    /// 75% of the working-capital gap
    pub mpbf_method_one: f64,
    /// Working-capital gap less 25% of current assets
    pub mpbf_method_two: f64,
    pub proposed_bank_finance: f64,
    pub surplus_deficit: f64,
    pub stock_days: Option<i64>,
    pub debtor_days: Option<i64>,
    pub creditor_days: Option<i64>,
    pub operating_cycle: Option<i64>,
}

/// Holding periods in whole days; `None` when the base figure is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingPeriods {
    pub stock_days: Option<i64>,
    pub debtor_days: Option<i64>,
    pub creditor_days: Option<i64>,
    pub operating_cycle: Option<i64>,
}

impl HoldingPeriods {
    pub fn from_projection(p: &YearlyProjection, days_in_year: f64) -> Self {
        let stock_days = days(p.stock, p.purchases / days_in_year);
        let debtor_days = days(p.debtors, p.net_sales / days_in_year);
        let creditor_days = days(p.creditors, p.purchases / days_in_year);

        let operating_cycle = match (stock_days, debtor_days, creditor_days) {
            (Some(s), Some(d), Some(c)) => Some(s + d - c),
            _ => None,
        };

        Self {
            stock_days,
            debtor_days,
            creditor_days,
            operating_cycle,
        }
    }
}

fn days(balance: f64, per_day: f64) -> Option<i64> {
    let value = (balance / per_day).round();
    if value.is_finite() {
        Some(value as i64)
    } else {
        None
    }
}

impl WorkingCapitalAssessment {
    /// Assessment for one year; holding periods use a `days_in_year` year
    pub fn from_projection(p: &YearlyProjection, days_in_year: f64) -> Self {
        let current_assets_excl_cash = p.total_current_assets - p.cash_in_hand - p.bank_balance;
        let current_liabilities_excl_bank = p.total_current_liabilities - p.cc_account;
        let min_stipulated_nwc = current_assets_excl_cash * MIN_NWC_SHARE;
        let mpbf_method_one = p.working_capital_gap * METHOD_ONE_SHARE;
        let holding = HoldingPeriods::from_projection(p, days_in_year);

        Self {
            year: p.year,
            current_assets_excl_cash,
            current_liabilities_excl_bank,
            working_capital_gap: p.working_capital_gap,
            min_stipulated_nwc,
            mpbf_method_one,
            mpbf_method_two: p.working_capital_gap - min_stipulated_nwc,
            proposed_bank_finance: p.cc_account,
            surplus_deficit: mpbf_method_one - p.cc_account,
            stock_days: holding.stock_days,
            debtor_days: holding.debtor_days,
            creditor_days: holding.creditor_days,
            operating_cycle: holding.operating_cycle,
        }
    }
}

/// Assess every projected year
pub fn assess_working_capital(
    years: &[YearlyProjection],
    config: &ProjectionConfig,
) -> Vec<WorkingCapitalAssessment> {
    years
        .iter()
        .map(|p| WorkingCapitalAssessment::from_projection(p, config.days_in_year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{BasicData, CmaData, OpeningBalances};
    use crate::projection::compute_projections;
    use approx::assert_relative_eq;

    fn sample() -> CmaData {
        CmaData::new(
            BasicData {
                sales: 3_650_000.0,
                opening_stock: 400_000.0,
                closing_stock: 500_000.0,
                gp_percent: 20.0,
                cc_amount: 600_000.0,
                year_ending: 2024,
                ..Default::default()
            },
            Vec::new(),
            OpeningBalances {
                capital_account: 1_000_000.0,
                creditors: 250_000.0,
                advances_deposits: 40_000.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_mpbf_methods() {
        let years = compute_projections(&sample());
        let assessments = assess_working_capital(&years, &ProjectionConfig::default());
        assert_eq!(assessments.len(), years.len());

        for (a, p) in assessments.iter().zip(&years) {
            assert_relative_eq!(a.mpbf_method_one, 0.75 * p.working_capital_gap);
            assert_relative_eq!(
                a.current_assets_excl_cash,
                p.stock + p.debtors + p.advances_deposits,
                epsilon = 1e-6
            );
            assert_relative_eq!(
                a.mpbf_method_two,
                p.working_capital_gap - 0.25 * a.current_assets_excl_cash,
                epsilon = 1e-6
            );
            assert_eq!(a.proposed_bank_finance, 600_000.0);
            assert_relative_eq!(a.surplus_deficit, a.mpbf_method_one - 600_000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_holding_periods() {
        let years = compute_projections(&sample());
        let base = WorkingCapitalAssessment::from_projection(&years[0], 365.0);

        // Debtors are set at 17 days of sales
        assert_eq!(base.debtor_days, Some(17));

        // Purchases = 3650000 - 730000 + 500000 - 400000 = 3020000
        let expected_stock = (500_000.0_f64 / (3_020_000.0 / 365.0)).round() as i64;
        assert_eq!(base.stock_days, Some(expected_stock));
        let expected_creditors = (250_000.0_f64 / (3_020_000.0 / 365.0)).round() as i64;
        assert_eq!(base.creditor_days, Some(expected_creditors));
        assert_eq!(
            base.operating_cycle,
            Some(expected_stock + 17 - expected_creditors)
        );
    }

    #[test]
    fn test_holding_periods_follow_configured_year_length() {
        let years = compute_projections(&sample());
        let config = ProjectionConfig {
            days_in_year: 730.0,
            ..Default::default()
        };
        let standard = assess_working_capital(&years, &ProjectionConfig::default());
        let doubled = assess_working_capital(&years, &config);

        // Debtors are 17 days of a 365-day year, so 34 days of a 730-day one
        assert_eq!(standard[0].debtor_days, Some(17));
        assert_eq!(doubled[0].debtor_days, Some(34));
        let expected_stock = (500_000.0_f64 / (3_020_000.0 / 730.0)).round() as i64;
        assert_eq!(doubled[0].stock_days, Some(expected_stock));
        assert_ne!(doubled[0].stock_days, standard[0].stock_days);
    }

    #[test]
    fn test_holding_periods_without_sales() {
        let mut data = sample();
        data.basic_data.sales = 0.0;
        data.basic_data.opening_stock = 0.0;
        data.basic_data.closing_stock = 0.0;

        let years = compute_projections(&data);
        let holding = HoldingPeriods::from_projection(&years[0], 365.0);
        assert_eq!(holding.debtor_days, None);
        assert_eq!(holding.stock_days, None);
        assert_eq!(holding.operating_cycle, None);
    }
}
