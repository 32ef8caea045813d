//! Region sizing: every region must have a scannable extent.
//!
//! The category score is the *minimum* across per-region validation scores,
//! not an average: a single badly-sized region caps the whole category.

use super::{finish_category, AnalysisContext, CategoryRule};
use crate::analyzer::RegionValidator;
use crate::{Category, CategoryResult, Region};

/// Rule for region sizing
pub struct SizeRule;

impl SizeRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SizeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRule for SizeRule {
    fn category(&self) -> Category {
        Category::Size
    }

    fn evaluate(&self, regions: &[Region], ctx: &AnalysisContext) -> CategoryResult {
        let mut score: f64 = 100.0;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        for region in regions {
            let validation = RegionValidator::validate(region, ctx.standards);
            if !validation.is_valid {
                score = score.min(validation.score);
            }
            issues.extend(validation.issues);
            suggestions.extend(validation.suggestions);
        }

        finish_category(score, issues, suggestions)
    }
}
