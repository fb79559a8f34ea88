//! Yearly depreciation schedule across the whole asset register

use serde::{Deserialize, Serialize};

use super::calculator::{for_year, roll_forward};
use crate::input::FixedAsset;

/// One asset line of the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub name: String,
    pub rate: f64,
    pub opening_wdv: f64,
    pub additions: f64,
    pub sales: f64,
    pub total: f64,
    pub depreciation: f64,
    pub closing_wdv: f64,
}

/// Depreciation statement for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationSchedule {
    pub year: i32,
    pub rows: Vec<ScheduleRow>,
}

impl DepreciationSchedule {
    pub fn total_depreciation(&self) -> f64 {
        self.rows.iter().fold(0.0, |acc, r| acc + r.depreciation)
    }

    pub fn total_closing_wdv(&self) -> f64 {
        self.rows.iter().fold(0.0, |acc, r| acc + r.closing_wdv)
    }

    /// Column totals as a row named "TOTAL" (rate left at zero)
    pub fn totals(&self) -> ScheduleRow {
        let mut totals = ScheduleRow {
            name: "TOTAL".to_string(),
            rate: 0.0,
            opening_wdv: 0.0,
            additions: 0.0,
            sales: 0.0,
            total: 0.0,
            depreciation: 0.0,
            closing_wdv: 0.0,
        };
        for row in &self.rows {
            totals.opening_wdv += row.opening_wdv;
            totals.additions += row.additions;
            totals.sales += row.sales;
            totals.total += row.total;
            totals.depreciation += row.depreciation;
            totals.closing_wdv += row.closing_wdv;
        }
        totals
    }
}

/// Depreciate every asset for one year.
///
/// Returns the year's schedule and the asset snapshot that opens the next
/// year. `assets` is never modified.
pub fn depreciate_register(
    assets: &[FixedAsset],
    year: i32,
    year_index: usize,
) -> (DepreciationSchedule, Vec<FixedAsset>) {
    let mut rows = Vec::with_capacity(assets.len());
    let mut next = Vec::with_capacity(assets.len());

    for asset in assets {
        let result = for_year(asset, year_index);
        rows.push(ScheduleRow {
            name: asset.name.clone(),
            rate: asset.rate,
            opening_wdv: asset.opening_wdv,
            additions: asset.additions(),
            sales: asset.sales,
            total: asset.opening_wdv + asset.additions() - asset.sales,
            depreciation: result.depreciation,
            closing_wdv: result.closing_wdv,
        });
        next.push(roll_forward(asset, &result));
    }

    (DepreciationSchedule { year, rows }, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn register() -> Vec<FixedAsset> {
        vec![
            FixedAsset::new("1", "Furniture & Fixtures", 10.0, 100_000.0),
            FixedAsset {
                additions_after_oct: 50_000.0,
                ..FixedAsset::new("2", "Computers", 40.0, 20_000.0)
            },
        ]
    }

    #[test]
    fn test_register_totals() {
        let assets = register();
        let (schedule, next) = depreciate_register(&assets, 2024, 0);

        // 10000 + (8000 + 10000)
        assert_relative_eq!(schedule.total_depreciation(), 28_000.0);
        assert_relative_eq!(schedule.total_closing_wdv(), 90_000.0 + 52_000.0);

        let totals = schedule.totals();
        assert_eq!(totals.name, "TOTAL");
        assert_relative_eq!(totals.additions, 50_000.0);
        assert_relative_eq!(totals.total, 170_000.0);
        assert_relative_eq!(totals.closing_wdv, schedule.total_closing_wdv());

        assert_eq!(next.len(), 2);
        assert_relative_eq!(next[1].opening_wdv, 52_000.0);
        assert_eq!(next[1].additions_after_oct, 0.0);
        assert_eq!(assets[1].additions_after_oct, 50_000.0);
    }

    #[test]
    fn test_projected_year_schedule() {
        let (_, next) = depreciate_register(&register(), 2024, 0);
        let (schedule, _) = depreciate_register(&next, 2025, 1);

        assert_eq!(schedule.year, 2025);
        assert_relative_eq!(schedule.rows[0].depreciation, 9_000.0);
        assert_relative_eq!(schedule.rows[1].depreciation, 20_800.0);
        assert_eq!(schedule.rows[1].additions, 0.0);
    }

    #[test]
    fn test_empty_register() {
        let (schedule, next) = depreciate_register(&[], 2024, 0);
        assert!(schedule.rows.is_empty());
        assert!(next.is_empty());
        assert_eq!(schedule.total_depreciation(), 0.0);
    }
}
