//! State carried from one projected year to the next

use crate::input::{CmaData, FixedAsset};
use super::yearly::YearlyProjection;

/// Figures from the previous year that later years grow from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarriedFigures {
    pub closing_stock: f64,
    pub admin_expenses: f64,
    pub interest_income: f64,
    pub capital_account: f64,
}

impl CarriedFigures {
    fn from_projection(projection: &YearlyProjection) -> Self {
        Self {
            closing_stock: projection.closing_stock,
            admin_expenses: projection.admin_expenses,
            interest_income: projection.interest_income,
            capital_account: projection.capital_account,
        }
    }
}

/// State at the start of a projection year
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Year index (0 = base year)
    pub year_index: usize,

    /// Working copy of the asset register as it opens this year
    pub assets: Vec<FixedAsset>,

    /// Previous year's figures; `None` in the base year
    pub previous: Option<CarriedFigures>,
}

impl ProjectionState {
    /// Initial state for a report. The register is cloned so the caller's
    /// input is never touched.
    pub fn from_input(data: &CmaData) -> Self {
        Self {
            year_index: 0,
            assets: data.fixed_assets.clone(),
            previous: None,
        }
    }

    pub fn is_base_year(&self) -> bool {
        self.year_index == 0
    }

    /// State opening the following year
    pub fn advance(&self, projection: &YearlyProjection, next_assets: Vec<FixedAsset>) -> Self {
        Self {
            year_index: self.year_index + 1,
            assets: next_assets,
            previous: Some(CarriedFigures::from_projection(projection)),
        }
    }
}

/// Use `value` unless it is zero or NaN, in which case use `fallback`.
///
/// A zero figure means "nothing supplied": later years grow from the opening
/// figure instead, and ratio denominators fall back to 1.
pub fn nonzero_or(value: f64, fallback: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        fallback
    } else {
        value
    }
}
