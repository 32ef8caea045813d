//! Template quality analysis engine

pub mod compliance;
pub mod engine;
pub mod rules;
pub mod scoring;
pub mod statistics;
pub mod validator;

pub use compliance::ComplianceChecker;
pub use engine::{AggregateStats, QualityAnalyzer};
pub use scoring::ScoreCalculator;
pub use statistics::StatisticsCalculator;
pub use validator::{RegionValidation, RegionValidator};
