//! CMA input data structures matching the report entry form

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::{CmaError, CmaResult};

/// Nature of the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BusinessType {
    #[default]
    Trading,
    Manufacturing,
    Service,
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessType::Trading => "Trading",
            BusinessType::Manufacturing => "Manufacturing",
            BusinessType::Service => "Service",
        };
        f.write_str(name)
    }
}

/// Scalar report inputs, set once per report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicData {
    // Identity (not used in calculations)
    pub business_name: String,
    pub business_add1: String,
    pub business_add2: String,
    pub proprietor: String,
    pub father_name: String,
    pub dob: String,
    pub res_add1: String,
    pub res_add2: String,
    pub business_type: BusinessType,
    pub activity: String,
    pub category: String,
    pub employees: u32,
    pub scheme_name: String,

    /// Base-year gross sales
    pub sales: f64,
    pub opening_stock: f64,
    pub closing_stock: f64,

    /// Gross profit as % of net sales
    pub gp_percent: f64,
    pub sales_increase_percent: f64,
    pub stock_increase_percent: f64,

    /// Cash-credit sanctioned limit and annual interest rate (%)
    pub cc_amount: f64,
    pub cc_rate: f64,

    /// Term-loan amount and annual interest rate (%)
    pub tl_amount: f64,
    pub tl_rate: f64,

    pub margin: f64,

    /// First projected year (financial year ending 31 March)
    pub year_ending: i32,

    /// Term-loan amortization period; used as a divisor
    pub repayment_years: u32,
}

impl Default for BasicData {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            business_add1: String::new(),
            business_add2: String::new(),
            proprietor: String::new(),
            father_name: String::new(),
            dob: String::new(),
            res_add1: String::new(),
            res_add2: String::new(),
            business_type: BusinessType::Trading,
            activity: String::new(),
            category: "General".to_string(),
            employees: 1,
            scheme_name: String::new(),
            sales: 0.0,
            opening_stock: 0.0,
            closing_stock: 0.0,
            gp_percent: 25.0,
            sales_increase_percent: 15.0,
            stock_increase_percent: 25.0,
            cc_amount: 0.0,
            cc_rate: 10.0,
            tl_amount: 0.0,
            tl_rate: 12.0,
            margin: 0.0,
            year_ending: Local::now().year(),
            repayment_years: 5,
        }
    }
}

impl BasicData {
    /// Full-year interest on the cash-credit limit
    pub fn cc_interest_full_year(&self) -> f64 {
        self.cc_amount * self.cc_rate / 100.0
    }

    /// Annual interest on the term loan (not reduced for amortization)
    pub fn tl_interest(&self) -> f64 {
        self.tl_amount * self.tl_rate / 100.0
    }

    /// Straight-line annual principal repayment.
    ///
    /// Non-finite when `repayment_years` is zero; see [`CmaData::validate`].
    pub fn annual_installment(&self) -> f64 {
        self.tl_amount / f64::from(self.repayment_years)
    }
}

/// One block of fixed assets in the depreciation register
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedAsset {
    pub id: String,
    pub name: String,
    /// Annual depreciation % of WDV
    pub rate: f64,
    pub opening_wdv: f64,
    /// Additions in use for at least six months (full-year rate)
    pub additions_before_oct: f64,
    /// Additions in the second half-year (half rate)
    pub additions_after_oct: f64,
    /// Disposals during the year
    pub sales: f64,
}

impl FixedAsset {
    pub fn new(id: &str, name: &str, rate: f64, opening_wdv: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rate,
            opening_wdv,
            ..Default::default()
        }
    }

    /// Total additions during the year
    pub fn additions(&self) -> f64 {
        self.additions_before_oct + self.additions_after_oct
    }

    /// The register offered on a new report: four blocks, all at zero
    pub fn default_register() -> Vec<FixedAsset> {
        vec![
            FixedAsset::new("1", "Furniture & Fixtures", 10.0, 0.0),
            FixedAsset::new("2", "Plant & Machinery", 15.0, 0.0),
            FixedAsset::new("3", "Computers", 40.0, 0.0),
            FixedAsset::new("4", "Vehicles", 15.0, 0.0),
        ]
    }
}

/// Opening balance-sheet values for items the engine does not derive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningBalances {
    // Capital & liabilities
    pub capital_account: f64,
    pub cc_account: f64,
    pub term_loan: f64,
    pub unsecured_loan: f64,
    pub creditors: f64,
    pub advances_received: f64,
    pub other_current_liabilities: f64,

    // Assets
    pub cash_in_hand: f64,
    pub bank_balance: f64,
    pub investments: f64,
    pub debtors: f64,
    pub advances_to_suppliers: f64,
    pub advances_deposits: f64,

    // Base values for growing P&L items
    pub drawings: f64,
    pub interest_income: f64,
    pub admin_expenses: f64,
}

/// Complete engine input for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmaData {
    #[serde(default)]
    pub basic_data: BasicData,
    #[serde(default = "FixedAsset::default_register")]
    pub fixed_assets: Vec<FixedAsset>,
    #[serde(default)]
    pub opening_balances: OpeningBalances,
}

impl Default for CmaData {
    fn default() -> Self {
        Self {
            basic_data: BasicData::default(),
            fixed_assets: FixedAsset::default_register(),
            opening_balances: OpeningBalances::default(),
        }
    }
}

impl CmaData {
    pub fn new(
        basic_data: BasicData,
        fixed_assets: Vec<FixedAsset>,
        opening_balances: OpeningBalances,
    ) -> Self {
        Self {
            basic_data,
            fixed_assets,
            opening_balances,
        }
    }

    /// Upstream sanity checks. The engine itself never calls this.
    ///
    /// Reports the first offending field.
    pub fn validate(&self) -> CmaResult<()> {
        let basic = &self.basic_data;

        if basic.repayment_years == 0 {
            return Err(CmaError::invalid(
                "basicData.repaymentYears",
                "must be at least 1 year",
            ));
        }
        if basic.sales < 0.0 {
            return Err(CmaError::invalid("basicData.sales", "must not be negative"));
        }

        let basic_fields = [
            ("basicData.sales", basic.sales),
            ("basicData.openingStock", basic.opening_stock),
            ("basicData.closingStock", basic.closing_stock),
            ("basicData.gpPercent", basic.gp_percent),
            ("basicData.salesIncreasePercent", basic.sales_increase_percent),
            ("basicData.stockIncreasePercent", basic.stock_increase_percent),
            ("basicData.ccAmount", basic.cc_amount),
            ("basicData.ccRate", basic.cc_rate),
            ("basicData.tlAmount", basic.tl_amount),
            ("basicData.tlRate", basic.tl_rate),
            ("basicData.margin", basic.margin),
        ];
        for (field, value) in basic_fields {
            ensure_finite(field, value)?;
        }

        let ob = &self.opening_balances;
        let balance_fields = [
            ("openingBalances.capitalAccount", ob.capital_account),
            ("openingBalances.ccAccount", ob.cc_account),
            ("openingBalances.termLoan", ob.term_loan),
            ("openingBalances.unsecuredLoan", ob.unsecured_loan),
            ("openingBalances.creditors", ob.creditors),
            ("openingBalances.advancesReceived", ob.advances_received),
            ("openingBalances.otherCurrentLiabilities", ob.other_current_liabilities),
            ("openingBalances.cashInHand", ob.cash_in_hand),
            ("openingBalances.bankBalance", ob.bank_balance),
            ("openingBalances.investments", ob.investments),
            ("openingBalances.debtors", ob.debtors),
            ("openingBalances.advancesToSuppliers", ob.advances_to_suppliers),
            ("openingBalances.advancesDeposits", ob.advances_deposits),
            ("openingBalances.drawings", ob.drawings),
            ("openingBalances.interestIncome", ob.interest_income),
            ("openingBalances.adminExpenses", ob.admin_expenses),
        ];
        for (field, value) in balance_fields {
            ensure_finite(field, value)?;
        }

        for (idx, asset) in self.fixed_assets.iter().enumerate() {
            if asset.rate < 0.0 {
                return Err(CmaError::invalid(
                    format!("fixedAssets[{}].rate", idx),
                    "must not be negative",
                ));
            }
            let asset_fields = [
                ("rate", asset.rate),
                ("openingWdv", asset.opening_wdv),
                ("additionsBeforeOct", asset.additions_before_oct),
                ("additionsAfterOct", asset.additions_after_oct),
                ("sales", asset.sales),
            ];
            for (name, value) in asset_fields {
                ensure_finite(&format!("fixedAssets[{}].{}", idx, name), value)?;
            }
        }

        Ok(())
    }
}

fn ensure_finite(field: &str, value: f64) -> CmaResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CmaError::invalid(field, "must be a finite number"))
    }
}
