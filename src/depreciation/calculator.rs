//! Written-down-value depreciation for one asset block and one year

use crate::input::FixedAsset;

/// Depreciation charged and WDV left for one asset in one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetDepreciation {
    pub depreciation: f64,
    pub closing_wdv: f64,
}

/// Base (actual) year: caller-supplied additions and disposals.
///
/// Additions before October take the full rate, later additions half the
/// rate. Both outputs are floored at zero so disposals larger than the block
/// cannot produce negative depreciation or WDV.
pub fn base_year(asset: &FixedAsset) -> AssetDepreciation {
    let rate = asset.rate / 100.0;
    let total = asset.opening_wdv + asset.additions_before_oct + asset.additions_after_oct
        - asset.sales;

    let dep_on_opening = (asset.opening_wdv - asset.sales) * rate;
    let dep_before_oct = asset.additions_before_oct * rate;
    let dep_after_oct = asset.additions_after_oct * rate * 0.5;

    let depreciation = (dep_on_opening + dep_before_oct + dep_after_oct).max(0.0);
    let closing_wdv = (total - depreciation).max(0.0);

    AssetDepreciation { depreciation, closing_wdv }
}

/// Projected year: no movements, straight reducing balance on opening WDV
pub fn projected_year(asset: &FixedAsset) -> AssetDepreciation {
    let depreciation = asset.opening_wdv * (asset.rate / 100.0);
    let closing_wdv = (asset.opening_wdv - depreciation).max(0.0);

    AssetDepreciation { depreciation, closing_wdv }
}

/// Depreciation for `asset` in year `year_index` (0 = base year)
pub fn for_year(asset: &FixedAsset, year_index: usize) -> AssetDepreciation {
    if year_index == 0 {
        base_year(asset)
    } else {
        projected_year(asset)
    }
}

/// Next year's working copy of an asset.
///
/// Opening WDV becomes this year's closing WDV. Movements are only supplied
/// for the base year, so they are cleared here rather than carried forward.
pub fn roll_forward(asset: &FixedAsset, result: &AssetDepreciation) -> FixedAsset {
    FixedAsset {
        opening_wdv: result.closing_wdv,
        additions_before_oct: 0.0,
        additions_after_oct: 0.0,
        sales: 0.0,
        ..asset.clone()
    }
}
