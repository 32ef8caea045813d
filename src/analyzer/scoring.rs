//! Score combination and grade mapping

use crate::standards::QualityThresholds;
use crate::{Categories, CategoryStatus, Grade, Overall, OverallStatus};

/// Category weights for the overall aggregate. Stable across calls; the
/// structurally-required categories (positioning presence, OMR compliance)
/// dominate, print readiness next, geometry categories share the rest.
pub const WEIGHT_POSITION: f64 = 0.25;
pub const WEIGHT_OMR: f64 = 0.25;
pub const WEIGHT_PRINT: f64 = 0.20;
pub const WEIGHT_SIZE: f64 = 0.15;
pub const WEIGHT_SPACING: f64 = 0.15;

/// Category status cutoffs (local to category evaluation)
const CATEGORY_PASS: f64 = 80.0;
const CATEGORY_WARNING: f64 = 60.0;

/// Calculator for category and overall scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Clamp a running score into [0, 100]
    pub fn bound(score: f64) -> f64 {
        score.clamp(0.0, 100.0)
    }

    /// Round to two decimal places (coverage, density, overall score)
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Map a category score to its pass/warning/fail tier
    pub fn category_status(score: f64) -> CategoryStatus {
        if score >= CATEGORY_PASS {
            CategoryStatus::Pass
        } else if score >= CATEGORY_WARNING {
            CategoryStatus::Warning
        } else {
            CategoryStatus::Fail
        }
    }

    /// Weighted mean of the five category scores
    pub fn aggregate(categories: &Categories) -> f64 {
        let weighted = categories.position.score * WEIGHT_POSITION
            + categories.omr.score * WEIGHT_OMR
            + categories.print.score * WEIGHT_PRINT
            + categories.size.score * WEIGHT_SIZE
            + categories.spacing.score * WEIGHT_SPACING;
        Self::round2(Self::bound(weighted))
    }

    /// Map the aggregate score to grade and status via the resolved thresholds
    pub fn overall(categories: &Categories, thresholds: &QualityThresholds) -> Overall {
        let score = Self::aggregate(categories);
        let (grade, status) = if score >= thresholds.excellent {
            (Grade::Excellent, OverallStatus::Pass)
        } else if score >= thresholds.good {
            (Grade::Good, OverallStatus::Pass)
        } else if score >= thresholds.acceptable {
            (Grade::Acceptable, OverallStatus::Warning)
        } else {
            (Grade::Poor, OverallStatus::Fail)
        };
        Overall {
            score,
            grade,
            status,
        }
    }
}
