//! Block-of-assets depreciation on written-down value

mod calculator;
mod schedule;

pub use calculator::{base_year, for_year, projected_year, roll_forward, AssetDepreciation};
pub use schedule::{depreciate_register, DepreciationSchedule, ScheduleRow};
