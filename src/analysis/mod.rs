//! Report analyses derived from a finished projection

mod fund_flow;
mod glance;
mod ratios;
mod working_capital;

pub use fund_flow::{fund_flow, FundFlowYear};
pub use glance::ProjectAtGlance;
pub use ratios::{break_even_table, dscr_table, ratio_analysis, BreakEvenRow, DscrRow, RatioAnalysis};
pub use working_capital::{
    assess_working_capital, HoldingPeriods, WorkingCapitalAssessment, METHOD_ONE_SHARE,
    MIN_NWC_SHARE,
};

use serde::{Deserialize, Serialize};

use crate::input::CmaData;
use crate::projection::{ProjectionConfig, YearlyProjection};

/// Every analysis sheet for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub glance: ProjectAtGlance,
    pub working_capital: Vec<WorkingCapitalAssessment>,
    pub fund_flow: Vec<FundFlowYear>,
    pub ratios: Vec<RatioAnalysis>,
    pub dscr: Vec<DscrRow>,
    pub break_even: Vec<BreakEvenRow>,
}

impl ReportAnalysis {
    pub fn build(data: &CmaData, years: &[YearlyProjection], config: &ProjectionConfig) -> Self {
        Self {
            glance: ProjectAtGlance::build(data, years),
            working_capital: assess_working_capital(years, config),
            fund_flow: fund_flow(data, years, config),
            ratios: ratio_analysis(years),
            dscr: dscr_table(data, years),
            break_even: break_even_table(years),
        }
    }
}
