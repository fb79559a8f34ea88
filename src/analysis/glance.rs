//! Project-at-a-glance summary page

use serde::{Deserialize, Serialize};

use crate::input::CmaData;
use crate::projection::YearlyProjection;

/// Report header facts and key indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAtGlance {
    pub business_name: String,
    pub proprietor: String,
    pub category: String,
    pub constitution: String,
    pub nature_of_business: String,
    pub employees: u32,

    // Cost of project and means of finance
    pub fixed_assets_cost: f64,
    pub working_capital_requirement: f64,
    pub total_project_cost: f64,
    pub promoter_contribution: f64,
    pub term_loan: f64,
    pub cash_credit: f64,
    pub total_means: f64,

    pub scheme_name: String,
    pub year_ending: String,
    pub repayment_period: String,

    pub average_dscr: f64,
    pub average_bep: f64,
    pub average_tol_tnw: f64,
    pub average_current_ratio: f64,
}

impl ProjectAtGlance {
    pub fn build(data: &CmaData, years: &[YearlyProjection]) -> Self {
        let basic = &data.basic_data;
        let fixed_assets_cost = data
            .fixed_assets
            .iter()
            .fold(0.0, |acc, a| acc + a.opening_wdv);
        let working_capital_requirement = basic.cc_amount + basic.margin;

        Self {
            business_name: basic.business_name.clone(),
            proprietor: basic.proprietor.clone(),
            category: basic.category.clone(),
            constitution: "Proprietorship".to_string(),
            nature_of_business: format!("{} : {}", basic.business_type, basic.activity),
            employees: basic.employees,
            fixed_assets_cost,
            working_capital_requirement,
            total_project_cost: fixed_assets_cost + working_capital_requirement,
            promoter_contribution: basic.margin,
            term_loan: basic.tl_amount,
            cash_credit: basic.cc_amount,
            total_means: basic.margin + basic.tl_amount + basic.cc_amount,
            scheme_name: basic.scheme_name.clone(),
            year_ending: format!("31st March {}", basic.year_ending),
            repayment_period: format!("{} Years", basic.repayment_years),
            average_dscr: mean(years, |y| y.dscr),
            average_bep: mean(years, |y| y.bep),
            average_tol_tnw: mean(years, |y| y.tol_tnw),
            average_current_ratio: mean(years, |y| y.current_ratio),
        }
    }
}

/// Arithmetic mean of one field; NaN for an empty slice
fn mean(years: &[YearlyProjection], field: fn(&YearlyProjection) -> f64) -> f64 {
    years.iter().map(field).sum::<f64>() / years.len() as f64
}
