//! Core projection engine for five-year CMA statements

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::state::{nonzero_or, ProjectionState};
use super::yearly::{CmaProjection, YearlyProjection};
use crate::depreciation::{depreciate_register, DepreciationSchedule};
use crate::error::CmaResult;
use crate::input::{CmaData, FixedAsset};

/// Number of years in a CMA report (base year + four projected)
pub const PROJECTION_YEARS: usize = 5;

/// Growth and balancing heuristics applied by the engine.
///
/// The defaults are the figures used on every report; overriding them is for
/// sensitivity runs only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Year-on-year multiplier for admin expenses
    pub admin_expense_growth: f64,

    /// Year-on-year multiplier for interest income
    pub interest_income_growth: f64,

    /// Drawings used when the opening balance has none
    pub default_drawings: f64,

    /// Fixed yearly increase in drawings
    pub drawings_step: f64,

    /// Fixed yearly increase in investments
    pub investments_step: f64,

    /// Debtor collection period
    pub debtor_days: f64,
    pub days_in_year: f64,

    /// Months the cash-credit facility is drawn in the base year
    pub base_year_cc_months: f64,

    /// Share of sales growth passed through to creditors
    pub creditor_growth_damping: f64,

    /// Multiplier applied to opening other current liabilities after year 0
    pub other_liabilities_growth: f64,

    /// Multiplier applied to opening advances & deposits after year 0
    pub advances_growth: f64,

    /// Split of the cash balancing figure
    pub cash_in_hand_share: f64,
    pub bank_balance_share: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            admin_expense_growth: 1.10,
            interest_income_growth: 1.15,
            default_drawings: 240_000.0,
            drawings_step: 60_000.0,
            investments_step: 150_000.0,
            debtor_days: 17.0,
            days_in_year: 365.0,
            base_year_cc_months: 7.0,
            creditor_growth_damping: 0.1,
            other_liabilities_growth: 1.09,
            advances_growth: 1.08,
            cash_in_hand_share: 0.3,
            bank_balance_share: 0.7,
        }
    }
}

impl ProjectionConfig {
    /// Load overrides from a JSON file; absent keys keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CmaResult<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> CmaResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the five-year projection for one report.
    ///
    /// Never fails and never modifies `data`. Each year folds the previous
    /// year's figures and asset snapshot into a fresh state.
    pub fn project(&self, data: &CmaData) -> CmaProjection {
        let mut result = CmaProjection::new();
        let mut state = ProjectionState::from_input(data);

        for _ in 0..PROJECTION_YEARS {
            let (projection, schedule, next_assets) = self.project_year(data, &state);
            state = state.advance(&projection, next_assets);
            result.add_year(projection, schedule);
        }

        debug!(
            "Projected '{}' for {}..={}",
            data.basic_data.business_name,
            data.basic_data.year_ending,
            data.basic_data
                .year_ending
                .saturating_add(PROJECTION_YEARS as i32 - 1)
        );

        result
    }

    /// Statements for the year described by `state`
    fn project_year(
        &self,
        data: &CmaData,
        state: &ProjectionState,
    ) -> (YearlyProjection, DepreciationSchedule, Vec<FixedAsset>) {
        let cfg = &self.config;
        let basic = &data.basic_data;
        let opening = &data.opening_balances;
        let i = state.year_index;
        let n = i as f64;
        let year = basic.year_ending.saturating_add(i as i32);
        let is_actual = state.is_base_year();
        let prev = state.previous;

        // Sales
        let sales_growth = growth_factor(basic.sales_increase_percent, i);
        let gross_sales = basic.sales * sales_growth;
        let net_sales = gross_sales;

        // Stock
        let stock_growth = growth_factor(basic.stock_increase_percent, i);
        let opening_stock = match prev {
            None => basic.opening_stock,
            Some(p) => nonzero_or(p.closing_stock, basic.closing_stock),
        };
        let closing_stock = basic.closing_stock * stock_growth;

        // Purchases reconcile COGS (opening + purchases - closing) to sales - GP
        let gross_profit = net_sales * (basic.gp_percent / 100.0);
        let purchases = net_sales - gross_profit + closing_stock - opening_stock;

        // Depreciation
        let (schedule, next_assets) = depreciate_register(&state.assets, year, i);
        let depreciation = schedule.total_depreciation();
        let fixed_assets_wdv = schedule.total_closing_wdv();

        let admin_expenses = match prev {
            None => opening.admin_expenses,
            Some(p) => {
                nonzero_or(p.admin_expenses, opening.admin_expenses) * cfg.admin_expense_growth
            }
        };
        let operating_profit = gross_profit - admin_expenses - depreciation;

        // Interest: CC is drawn for part of the base year only
        let cc_interest = if is_actual {
            basic.cc_interest_full_year() * (cfg.base_year_cc_months / 12.0)
        } else {
            basic.cc_interest_full_year()
        };
        let tl_interest = basic.tl_interest();
        let net_operating_profit = operating_profit - cc_interest - tl_interest;

        let interest_income = match prev {
            None => opening.interest_income,
            Some(p) => {
                nonzero_or(p.interest_income, opening.interest_income)
                    * cfg.interest_income_growth
            }
        };

        // Proprietorship: no tax provision
        let pbt = net_operating_profit + interest_income;
        let tax = 0.0;
        let pat = pbt - tax;

        let drawings = nonzero_or(opening.drawings, cfg.default_drawings) + n * cfg.drawings_step;

        let previous_capital = match prev {
            None => opening.capital_account,
            Some(p) => nonzero_or(p.capital_account, 0.0),
        };
        let capital_account = previous_capital + pat - drawings;

        // Liabilities
        let cc_account = basic.cc_amount;
        // Floored at zero. With zero repayment years the base year is 0 x inf and
        // `max` turns that NaN into 0 as well; validation rejects such input.
        let term_loan_due =
            (basic.tl_amount - n * basic.tl_amount / f64::from(basic.repayment_years)).max(0.0);
        let unsecured_loan = opening.unsecured_loan;
        let creditors = if is_actual {
            opening.creditors
        } else {
            opening.creditors
                * (1.0 + basic.sales_increase_percent / 100.0 * n * cfg.creditor_growth_damping)
        };
        let advances_received = opening.advances_received;
        let other_current_liabilities = if is_actual {
            opening.other_current_liabilities
        } else {
            opening.other_current_liabilities * cfg.other_liabilities_growth
        };

        // Assets other than cash
        let investments = opening.investments + n * cfg.investments_step;
        let debtors = net_sales * (cfg.debtor_days / cfg.days_in_year);
        let advances_deposits = if is_actual {
            opening.advances_deposits
        } else {
            opening.advances_deposits * cfg.advances_growth
        };

        // Cash & bank is the balancing figure; each part is floored at zero,
        // so a negative plug leaves the sheet out of balance
        let liabilities = capital_account
            + cc_account
            + term_loan_due
            + unsecured_loan
            + creditors
            + advances_received
            + other_current_liabilities;
        let non_cash_assets =
            fixed_assets_wdv + investments + closing_stock + debtors + advances_deposits;
        let cash_bank_total = liabilities - non_cash_assets;
        let cash_in_hand = (cash_bank_total * cfg.cash_in_hand_share).max(0.0);
        let bank_balance = (cash_bank_total * cfg.bank_balance_share).max(0.0);

        let total_liabilities = liabilities;
        let total_assets = non_cash_assets + cash_in_hand + bank_balance;

        // Working capital
        let total_current_assets =
            cash_in_hand + bank_balance + closing_stock + debtors + advances_deposits;
        let total_current_liabilities =
            cc_account + creditors + advances_received + other_current_liabilities;
        let working_capital_gap = total_current_assets - (total_current_liabilities - cc_account);
        let net_working_capital =
            capital_account + term_loan_due + unsecured_loan - fixed_assets_wdv - investments;

        // Ratios
        let current_ratio = guarded_ratio(total_current_assets, total_current_liabilities);
        let tangible_net_worth = capital_account;
        let total_outside_liabilities = total_current_liabilities + term_loan_due;
        let tol_tnw = guarded_ratio(total_outside_liabilities, tangible_net_worth);

        let cash_accruals = pat + depreciation;
        let debt_service = cc_interest + tl_interest + basic.annual_installment();
        let dscr = guarded_ratio(cash_accruals, debt_service);

        let fixed_costs = cc_interest + tl_interest + depreciation + admin_expenses;
        let bep = (fixed_costs / (pat + fixed_costs)) * 100.0;

        let projection = YearlyProjection {
            year,
            year_label: year_label(year),
            is_actual,
            gross_sales,
            other_operating_revenue: 0.0,
            net_sales,
            opening_stock,
            closing_stock,
            purchases,
            gross_profit,
            gp_percent: basic.gp_percent,
            admin_expenses,
            depreciation,
            operating_profit,
            cc_interest,
            tl_interest,
            net_operating_profit,
            interest_income,
            pbt,
            tax,
            pat,
            drawings,
            capital_account,
            cc_account,
            term_loan_due,
            unsecured_loan,
            creditors,
            advances_received,
            other_current_liabilities,
            total_liabilities,
            fixed_assets_wdv,
            investments,
            cash_bank_total,
            cash_in_hand,
            bank_balance,
            stock: closing_stock,
            debtors,
            advances_deposits,
            total_assets,
            total_current_assets,
            total_current_liabilities,
            working_capital_gap,
            net_working_capital,
            assessed_bank_finance: cc_account,
            current_ratio,
            tol_tnw,
            cash_accruals,
            debt_service,
            dscr,
            fixed_costs,
            bep,
        };

        (projection, schedule, next_assets)
    }
}

/// Project a report with the default heuristics
pub fn compute_projections(data: &CmaData) -> Vec<YearlyProjection> {
    ProjectionEngine::default().project(data).years
}

/// Compounded growth multiplier for year `year_index` (1 in the base year)
fn growth_factor(percent: f64, year_index: usize) -> f64 {
    if year_index == 0 {
        1.0
    } else {
        (1.0 + percent / 100.0).powi(year_index as i32)
    }
}

/// `numerator / denominator`, dividing by 1 when the denominator is zero
fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / nonzero_or(denominator, 1.0)
}

/// Balance-sheet date label, e.g. "31.3.25" for the year ending March 2025
fn year_label(year: i32) -> String {
    match NaiveDate::from_ymd_opt(year, 3, 31) {
        Some(date) => date.format("%-d.%-m.%y").to_string(),
        None => format!("31.3.{:02}", year.rem_euclid(100)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{BasicData, OpeningBalances};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn flat_business() -> CmaData {
        CmaData::new(
            BasicData {
                sales: 1_000_000.0,
                gp_percent: 25.0,
                sales_increase_percent: 0.0,
                stock_increase_percent: 0.0,
                cc_amount: 0.0,
                tl_amount: 0.0,
                year_ending: 2024,
                ..Default::default()
            },
            Vec::new(),
            OpeningBalances::default(),
        )
    }

    fn trading_business() -> CmaData {
        CmaData::new(
            BasicData {
                business_name: "Ahuja Traders".to_string(),
                sales: 4_500_000.0,
                opening_stock: 600_000.0,
                closing_stock: 750_000.0,
                gp_percent: 18.0,
                sales_increase_percent: 15.0,
                stock_increase_percent: 10.0,
                cc_amount: 1_200_000.0,
                cc_rate: 10.0,
                tl_amount: 500_000.0,
                tl_rate: 12.0,
                year_ending: 2024,
                repayment_years: 5,
                ..Default::default()
            },
            vec![
                FixedAsset::new("1", "Furniture & Fixtures", 10.0, 100_000.0),
                FixedAsset {
                    additions_before_oct: 40_000.0,
                    additions_after_oct: 30_000.0,
                    ..FixedAsset::new("2", "Computers", 40.0, 25_000.0)
                },
            ],
            OpeningBalances {
                capital_account: 1_800_000.0,
                unsecured_loan: 200_000.0,
                creditors: 300_000.0,
                advances_received: 50_000.0,
                other_current_liabilities: 40_000.0,
                investments: 100_000.0,
                advances_deposits: 60_000.0,
                drawings: 300_000.0,
                interest_income: 20_000.0,
                admin_expenses: 250_000.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_five_years_in_order() {
        let result = ProjectionEngine::default().project(&trading_business());

        assert_eq!(result.years.len(), PROJECTION_YEARS);
        assert_eq!(result.schedules.len(), PROJECTION_YEARS);
        for (idx, year) in result.years.iter().enumerate() {
            assert_eq!(year.year, 2024 + idx as i32);
            assert_eq!(year.is_actual, idx == 0);
        }
        assert_eq!(result.years[0].year_label, "31.3.24");
        assert_eq!(result.years[4].year_label, "31.3.28");
    }

    #[test]
    fn test_deterministic_and_input_untouched() {
        let data = trading_business();
        let snapshot = data.clone();
        let engine = ProjectionEngine::default();

        let first = engine.project(&data);
        let second = engine.project(&data);

        assert_eq!(first, second);
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_flat_business() {
        let years = compute_projections(&flat_business());

        for year in &years {
            assert_eq!(year.net_sales, 1_000_000.0);
            assert_eq!(year.gross_sales, year.net_sales);
            assert_eq!(year.gross_profit, 250_000.0);
            assert_eq!(year.cc_interest, 0.0);
            assert_eq!(year.tl_interest, 0.0);
            assert_eq!(year.depreciation, 0.0);
            assert_eq!(year.fixed_assets_wdv, 0.0);
            assert_eq!(year.tax, 0.0);
            assert_eq!(year.pat, year.pbt);
        }
    }

    #[test]
    fn test_single_depreciating_asset() {
        let mut data = flat_business();
        data.fixed_assets = vec![FixedAsset::new("1", "Plant & Machinery", 10.0, 100_000.0)];

        let years = compute_projections(&data);
        assert_relative_eq!(years[0].depreciation, 10_000.0);
        assert_relative_eq!(years[0].fixed_assets_wdv, 90_000.0);
        assert_relative_eq!(years[1].depreciation, 9_000.0);
        assert_relative_eq!(years[1].fixed_assets_wdv, 81_000.0);
        assert_relative_eq!(years[4].fixed_assets_wdv, 100_000.0 * 0.9f64.powi(5), epsilon = 1e-6);
    }

    #[test]
    fn test_base_year_movements_not_repeated() {
        let result = ProjectionEngine::default().project(&trading_business());

        // Computers: 40% on 25000, 40% on 40000, 20% on 30000
        let computers_y0 = &result.schedules[0].rows[1];
        assert_relative_eq!(computers_y0.depreciation, 10_000.0 + 16_000.0 + 6_000.0, epsilon = 1e-9);
        assert_relative_eq!(computers_y0.closing_wdv, 95_000.0 - 32_000.0, epsilon = 1e-9);

        let computers_y1 = &result.schedules[1].rows[1];
        assert_eq!(computers_y1.additions, 0.0);
        assert_eq!(computers_y1.sales, 0.0);
        assert_relative_eq!(computers_y1.opening_wdv, 63_000.0, epsilon = 1e-9);
        assert_relative_eq!(computers_y1.depreciation, 63_000.0 * 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_depreciation_never_negative_with_large_disposals() {
        let mut data = trading_business();
        data.fixed_assets = vec![FixedAsset {
            sales: 500_000.0,
            ..FixedAsset::new("1", "Vehicles", 15.0, 100_000.0)
        }];

        let result = ProjectionEngine::default().project(&data);
        for (year, schedule) in result.years.iter().zip(&result.schedules) {
            assert!(year.depreciation >= 0.0);
            assert!(year.fixed_assets_wdv >= 0.0);
            for row in &schedule.rows {
                assert!(row.depreciation >= 0.0);
                assert!(row.closing_wdv >= 0.0);
            }
        }
    }

    #[test]
    fn test_schedule_totals_match_projection() {
        let result = ProjectionEngine::default().project(&trading_business());
        for (year, schedule) in result.years.iter().zip(&result.schedules) {
            assert_eq!(schedule.year, year.year);
            assert_eq!(schedule.total_depreciation(), year.depreciation);
            assert_eq!(schedule.total_closing_wdv(), year.fixed_assets_wdv);
        }
    }

    #[test]
    fn test_term_loan_amortization() {
        let mut data = flat_business();
        data.basic_data.tl_amount = 500_000.0;
        data.basic_data.tl_rate = 12.0;
        data.basic_data.repayment_years = 5;

        let years = compute_projections(&data);
        let due: Vec<f64> = years.iter().map(|y| y.term_loan_due).collect();
        assert_eq!(due, vec![500_000.0, 400_000.0, 300_000.0, 200_000.0, 100_000.0]);

        for year in &years {
            // Interest is on the full loan every year
            assert_relative_eq!(year.tl_interest, 60_000.0);
            assert_relative_eq!(year.debt_service, 60_000.0 + 100_000.0);
        }
    }

    #[test]
    fn test_term_loan_due_floors_at_zero() {
        let mut data = flat_business();
        data.basic_data.tl_amount = 300_000.0;
        data.basic_data.repayment_years = 2;

        let years = compute_projections(&data);
        assert_eq!(years[2].term_loan_due, 0.0);
        assert_eq!(years[4].term_loan_due, 0.0);
    }

    #[test]
    fn test_cc_interest_seven_months_in_base_year() {
        let years = compute_projections(&trading_business());
        assert_relative_eq!(years[0].cc_interest, 70_000.0, epsilon = 1e-6);
        assert_relative_eq!(years[1].cc_interest, 120_000.0);
        assert_eq!(years[3].cc_account, 1_200_000.0);
        assert_eq!(years[3].assessed_bank_finance, 1_200_000.0);
    }

    #[test]
    fn test_growth_carried_from_previous_year() {
        let years = compute_projections(&trading_business());

        assert_relative_eq!(years[0].net_sales, 4_500_000.0);
        assert_relative_eq!(years[2].net_sales, 4_500_000.0 * 1.15 * 1.15, epsilon = 1e-6);
        assert_relative_eq!(years[2].closing_stock, 750_000.0 * 1.1 * 1.1, epsilon = 1e-6);

        assert_eq!(years[0].opening_stock, 600_000.0);
        for pair in years.windows(2) {
            assert_eq!(pair[1].opening_stock, pair[0].closing_stock);
            assert_relative_eq!(pair[1].admin_expenses, pair[0].admin_expenses * 1.10);
            assert_relative_eq!(pair[1].interest_income, pair[0].interest_income * 1.15);
            assert_relative_eq!(
                pair[1].capital_account,
                pair[0].capital_account + pair[1].pat - pair[1].drawings,
                epsilon = 1e-6
            );
        }

        for year in &years {
            // COGS reconciles to sales less gross profit
            let cogs = year.opening_stock + year.purchases - year.closing_stock;
            assert_relative_eq!(cogs, year.net_sales - year.gross_profit, epsilon = 1e-6);
            assert_relative_eq!(year.debtors, year.net_sales * 17.0 / 365.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_opening_balance_heuristics() {
        let years = compute_projections(&trading_business());

        assert_eq!(years[0].drawings, 300_000.0);
        assert_eq!(years[4].drawings, 540_000.0);
        assert_eq!(years[0].investments, 100_000.0);
        assert_eq!(years[3].investments, 550_000.0);

        // Creditors pass through a tenth of the cumulative sales growth
        assert_eq!(years[0].creditors, 300_000.0);
        assert_relative_eq!(years[2].creditors, 300_000.0 * 1.03, epsilon = 1e-9);

        // Flat uplift on the opening figure from the first projected year
        assert_relative_eq!(years[1].other_current_liabilities, 40_000.0 * 1.09);
        assert_relative_eq!(years[4].other_current_liabilities, 40_000.0 * 1.09);
        assert_relative_eq!(years[4].advances_deposits, 60_000.0 * 1.08);
        assert_eq!(years[4].unsecured_loan, 200_000.0);
    }

    #[test]
    fn test_default_drawings_when_none_supplied() {
        let years = compute_projections(&flat_business());
        assert_eq!(years[0].drawings, 240_000.0);
        assert_eq!(years[1].drawings, 300_000.0);
        assert_eq!(years[4].drawings, 480_000.0);
    }

    #[test]
    fn test_balance_sheet_balances() {
        let years = compute_projections(&trading_business());
        for year in &years {
            assert!(year.cash_bank_total >= 0.0);
            assert_abs_diff_eq!(year.total_assets, year.total_liabilities, epsilon = 1e-6);
            assert_relative_eq!(
                year.cash_in_hand + year.bank_balance,
                year.cash_bank_total,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_negative_cash_plug_leaves_sheet_unbalanced() {
        let mut data = trading_business();
        data.opening_balances.capital_account = 0.0;
        data.fixed_assets = vec![FixedAsset::new("1", "Plant & Machinery", 15.0, 5_000_000.0)];

        let years = compute_projections(&data);
        let year = &years[0];
        assert!(year.cash_bank_total < 0.0);
        assert_eq!(year.cash_in_hand, 0.0);
        assert_eq!(year.bank_balance, 0.0);
        assert!(!year.is_balanced(1e-6));
        assert_relative_eq!(year.balance_difference(), year.cash_bank_total.abs(), epsilon = 1e-6);
    }

    #[test]
    fn test_current_ratio_guard_without_current_liabilities() {
        let years = compute_projections(&flat_business());
        for year in &years {
            assert_eq!(year.total_current_liabilities, 0.0);
            assert_eq!(year.current_ratio, year.total_current_assets);
            assert!(year.current_ratio.is_finite());
        }
    }

    #[test]
    fn test_ratio_guards_for_zero_capital_and_debt_service() {
        let mut data = flat_business();
        data.opening_balances.capital_account = 0.0;
        data.opening_balances.drawings = 0.0;
        data.basic_data.gp_percent = 24.0;

        let years = compute_projections(&data);
        // Year 0: pat 240000, drawings 240000, capital 0
        assert_eq!(years[0].capital_account, 0.0);
        assert_eq!(years[0].tol_tnw, years[0].total_current_liabilities + years[0].term_loan_due);
        assert_eq!(years[0].debt_service, 0.0);
        assert_eq!(years[0].dscr, years[0].cash_accruals);
    }

    #[test]
    fn test_negative_bep_is_returned_as_is() {
        let mut data = flat_business();
        data.basic_data.gp_percent = -10.0;
        data.opening_balances.admin_expenses = 50_000.0;

        let years = compute_projections(&data);
        assert_relative_eq!(years[0].fixed_costs, 50_000.0);
        // fixed / (pat + fixed) = 50000 / -100000
        assert_relative_eq!(years[0].bep, -50.0);
    }

    #[test]
    fn test_zero_repayment_years_does_not_panic() {
        let mut data = flat_business();
        data.basic_data.tl_amount = 500_000.0;
        data.basic_data.repayment_years = 0;

        let years = compute_projections(&data);
        assert_eq!(years.len(), PROJECTION_YEARS);
        assert!(years[1].debt_service.is_infinite());
        assert!(years.iter().all(|y| y.term_loan_due == 0.0));
        // Base year is 0 x inf, reported as nothing due rather than NaN
        assert_eq!(years[0].term_loan_due, 0.0);
        assert!(!years[0].term_loan_due.is_nan());
    }

    #[test]
    fn test_year_numbers_saturate_at_i32_max() {
        let mut data = flat_business();
        data.basic_data.year_ending = i32::MAX - 1;

        let years = compute_projections(&data);
        assert_eq!(years.len(), PROJECTION_YEARS);
        assert_eq!(years[0].year, i32::MAX - 1);
        assert!(years[1..].iter().all(|y| y.year == i32::MAX));
        assert!(years[4].year_label.starts_with("31.3."));
    }

    #[test]
    fn test_config_overrides_from_json() {
        let json = r#"{ "admin_expense_growth": 1.05, "drawings_step": 0 }"#;
        let config = ProjectionConfig::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(config.admin_expense_growth, 1.05);
        assert_eq!(config.drawings_step, 0.0);
        assert_eq!(config.debtor_days, 17.0);

        let mut data = flat_business();
        data.opening_balances.admin_expenses = 100_000.0;
        let result = ProjectionEngine::new(config).project(&data);
        assert_relative_eq!(result.years[1].admin_expenses, 105_000.0);
        assert_eq!(result.years[4].drawings, 240_000.0);
    }

    #[test]
    fn test_year_label_two_digit_year() {
        assert_eq!(year_label(2005), "31.3.05");
        assert_eq!(year_label(2030), "31.3.30");
    }
}
