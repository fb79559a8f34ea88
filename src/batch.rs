//! Batch runner for projecting many reports
//!
//! Holds one engine configuration and runs it against any number of inputs,
//! in parallel when there is more than one.

use log::info;
use rayon::prelude::*;

use crate::analysis::ReportAnalysis;
use crate::input::CmaData;
use crate::projection::{CmaProjection, ProjectionConfig, ProjectionEngine};

/// Projection plus its analysis sheets
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutput {
    pub projection: CmaProjection,
    pub analysis: ReportAnalysis,
}

/// Runs the engine over many reports with a shared configuration
///
/// # Example
/// ```ignore
/// let runner = ReportRunner::new();
/// let projections = runner.run_batch(&reports);
///
/// // Sensitivity: same report, different admin growth
/// let configs: Vec<_> = [1.05, 1.10, 1.15]
///     .iter()
///     .map(|&g| ProjectionConfig { admin_expense_growth: g, ..Default::default() })
///     .collect();
/// let results = runner.run_scenarios(&report, &configs);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportRunner {
    engine: ProjectionEngine,
}

impl ReportRunner {
    /// Runner with the standard heuristics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Project a single report
    pub fn run(&self, data: &CmaData) -> CmaProjection {
        self.engine.project(data)
    }

    /// Project a single report and build its analysis sheets
    pub fn run_report(&self, data: &CmaData) -> ReportOutput {
        let projection = self.engine.project(data);
        let analysis = ReportAnalysis::build(data, &projection.years, self.engine.config());
        ReportOutput {
            projection,
            analysis,
        }
    }

    /// Project many reports in parallel; results keep input order
    pub fn run_batch(&self, reports: &[CmaData]) -> Vec<CmaProjection> {
        info!("Projecting {} reports", reports.len());
        reports.par_iter().map(|data| self.engine.project(data)).collect()
    }

    /// [`run_report`](Self::run_report) for many reports in parallel
    pub fn run_reports(&self, reports: &[CmaData]) -> Vec<ReportOutput> {
        info!("Projecting and analysing {} reports", reports.len());
        reports.par_iter().map(|data| self.run_report(data)).collect()
    }

    /// Project one report under several configurations
    pub fn run_scenarios(&self, data: &CmaData, configs: &[ProjectionConfig]) -> Vec<CmaProjection> {
        configs
            .par_iter()
            .map(|config| ProjectionEngine::new(config.clone()).project(data))
            .collect()
    }
}
