//! CMA Projection - five-year Credit Monitoring Arrangement reports for bank loan applications
//!
//! This library provides:
//! - Projected profit & loss and balance sheets from one base year of inputs
//! - Written-down-value depreciation schedules per asset block
//! - Working-capital (MPBF), fund-flow, ratio, DSCR and break-even analyses
//! - Indian-grouped and lakhs number formatting for report output
//! - CSV / JSON loading and export, and a parallel batch runner

pub mod error;
pub mod format;
pub mod input;
pub mod depreciation;
pub mod projection;
pub mod analysis;
pub mod export;
pub mod batch;

// Re-export commonly used types
pub use error::{CmaError, CmaResult};
pub use input::{BasicData, BusinessType, CmaData, FixedAsset, OpeningBalances};
pub use projection::{compute_projections, CmaProjection, ProjectionConfig, ProjectionEngine, YearlyProjection};
pub use analysis::ReportAnalysis;
pub use format::{format_indian_number, format_lakhs};
pub use batch::ReportRunner;
