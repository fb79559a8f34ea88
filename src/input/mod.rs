//! Report inputs: basic data, fixed-asset register and opening balances

mod data;
pub mod loader;

pub use data::{BasicData, BusinessType, CmaData, FixedAsset, OpeningBalances};
pub use loader::{
    load_cma_data, load_cma_data_from_reader, load_fixed_assets, load_fixed_assets_from_reader,
};
