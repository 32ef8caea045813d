//! Center-to-center spacing between regions.
//!
//! All unordered pairs are compared, O(n²). Region counts on a single
//! answer sheet stay in the tens to low hundreds, so this is fine; a
//! spatial bucket grid would bound it near-linear if that ever changes.

use super::{finish_category, AnalysisContext, CategoryRule};
use crate::{Category, CategoryResult, Issue, IssueKind, Priority, Region, Severity, Suggestion};

const PENALTY_PER_CLOSE_PAIR: f64 = 5.0;

/// Rule for inter-region spacing
pub struct SpacingRule;

impl SpacingRule {
    pub fn new() -> Self {
        Self
    }

    fn center_distance(a: &Region, b: &Region) -> f64 {
        let (ax, ay) = a.center();
        let (bx, by) = b.center();
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }
}

impl Default for SpacingRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRule for SpacingRule {
    fn category(&self) -> Category {
        Category::Spacing
    }

    fn evaluate(&self, regions: &[Region], ctx: &AnalysisContext) -> CategoryResult {
        let mut score = 100.0;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        let min_spacing = ctx.standards.bubble.min_spacing;
        for i in 0..regions.len() {
            for j in (i + 1)..regions.len() {
                let distance = Self::center_distance(&regions[i], &regions[j]);
                // NaN distances compare false and are tolerated silently
                if distance < min_spacing {
                    score -= PENALTY_PER_CLOSE_PAIR;
                    issues.push(Issue {
                        id: format!("spacing-too-close-{}-{}", regions[i].id, regions[j].id),
                        kind: IssueKind::Warning,
                        category: Category::Spacing,
                        title: "Regions too close together".to_string(),
                        description: format!(
                            "Regions '{}' and '{}' are {:.1} mm apart (min {} mm center-to-center)",
                            regions[i].id, regions[j].id, distance, min_spacing
                        ),
                        region_id: Some(regions[i].id.clone()),
                        severity: Severity::Medium,
                        auto_fixable: false,
                    });
                }
            }
        }

        // One aggregate suggestion regardless of how many pairs violate
        if !issues.is_empty() {
            suggestions.push(Suggestion {
                id: "spacing-increase".to_string(),
                category: Category::Spacing,
                title: "Increase spacing between regions".to_string(),
                description: format!(
                    "{} region pair(s) are closer than the scanner can separate",
                    issues.len()
                ),
                action: format!(
                    "Spread regions so centers are at least {} mm apart",
                    min_spacing
                ),
                priority: Priority::Medium,
                impact: "Prevents adjacent marks from bleeding into each other".to_string(),
            });
        }

        finish_category(score, issues, suggestions)
    }
}
