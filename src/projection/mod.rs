//! Five-year CMA projection engine

mod state;
mod engine;
mod yearly;

pub use state::{nonzero_or, CarriedFigures, ProjectionState};
pub use engine::{compute_projections, ProjectionConfig, ProjectionEngine, PROJECTION_YEARS};
pub use yearly::{status_label, CmaProjection, ProjectionSummary, YearlyProjection};
