//! Category rules for template quality
//!
//! Each rule is a pure function over the full region list: it never mutates
//! its inputs and holds no state between calls, so the engine can run rules
//! in any order.

pub mod omr;
pub mod position;
pub mod print;
pub mod size;
pub mod spacing;

pub use omr::OmrComplianceRule;
pub use position::PositionRule;
pub use print::PrintReadinessRule;
pub use size::SizeRule;
pub use spacing::SpacingRule;

use crate::analyzer::ScoreCalculator;
use crate::standards::OmrStandards;
use crate::{Category, CategoryResult, Issue, Region, Suggestion, TemplateConfig};

/// Shared immutable inputs for one analysis run
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub template: &'a TemplateConfig,
    pub standards: &'a OmrStandards,
}

/// Trait for category rules
pub trait CategoryRule {
    /// Category this rule evaluates
    fn category(&self) -> Category;

    /// Evaluate the full region list and return the category result
    fn evaluate(&self, regions: &[Region], ctx: &AnalysisContext) -> CategoryResult;
}

/// Bound a raw score and attach the pass/warning/fail tier
pub(crate) fn finish_category(
    score: f64,
    issues: Vec<Issue>,
    suggestions: Vec<Suggestion>,
) -> CategoryResult {
    let score = ScoreCalculator::bound(score);
    CategoryResult {
        score,
        status: ScoreCalculator::category_status(score),
        issues,
        suggestions,
    }
}
