//! Print readiness: resolution, page geometry, and safe margins.
//!
//! Only the top/left margins are checked against region origins; regions
//! are placed from their top-left corner, and clipping on the leading
//! edges is what office printers actually produce.

use super::{finish_category, AnalysisContext, CategoryRule};
use crate::{Category, CategoryResult, Issue, IssueKind, Priority, Region, Severity, Suggestion};

const PENALTY_LOW_DPI: f64 = 20.0;
const PENALTY_INVALID_PAGE: f64 = 30.0;
const PENALTY_MARGIN_VIOLATION: f64 = 10.0;

/// Rule for print readiness
pub struct PrintReadinessRule;

impl PrintReadinessRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PrintReadinessRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRule for PrintReadinessRule {
    fn category(&self) -> Category {
        Category::PrintReadiness
    }

    fn evaluate(&self, regions: &[Region], ctx: &AnalysisContext) -> CategoryResult {
        let mut score = 100.0;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        let min_dpi = ctx.standards.print.min_dpi;
        if ctx.template.dpi < min_dpi {
            score -= PENALTY_LOW_DPI;
            issues.push(Issue {
                id: "print-low-dpi".to_string(),
                kind: IssueKind::Warning,
                category: Category::PrintReadiness,
                title: "Print resolution too low".to_string(),
                description: format!(
                    "Template is set to {} DPI; the scanning standard requires at least {}",
                    ctx.template.dpi, min_dpi
                ),
                region_id: None,
                severity: Severity::Medium,
                auto_fixable: true,
            });
            suggestions.push(Suggestion {
                id: "print-raise-dpi".to_string(),
                category: Category::PrintReadiness,
                title: "Raise the print resolution".to_string(),
                description: "Low resolution blurs bubble edges and positioning marks".to_string(),
                action: format!("Set the template DPI to {} or higher", min_dpi),
                priority: Priority::Medium,
                impact: "Sharper marks reduce recognition errors".to_string(),
            });
        }

        let page = ctx.template.page_size;
        if !page.is_valid() {
            // Dominant failure: a template without a page cannot be printed
            // regardless of region quality
            score -= PENALTY_INVALID_PAGE;
            issues.push(Issue {
                id: "print-invalid-page-size".to_string(),
                kind: IssueKind::Error,
                category: Category::PrintReadiness,
                title: "Invalid page size".to_string(),
                description: format!(
                    "Page size {} x {} mm is not printable",
                    page.width, page.height
                ),
                region_id: None,
                severity: Severity::High,
                auto_fixable: false,
            });
        }

        let margins = ctx.standards.margins;
        for region in regions {
            if region.x < margins.left || region.y < margins.top {
                score -= PENALTY_MARGIN_VIOLATION;
                issues.push(Issue {
                    id: format!("print-margin-clip-{}", region.id),
                    kind: IssueKind::Warning,
                    category: Category::PrintReadiness,
                    title: "Region may be clipped when printed".to_string(),
                    description: format!(
                        "Region '{}' sits at ({}, {}) mm, inside the {} mm left / {} mm top safe margins",
                        region.id, region.x, region.y, margins.left, margins.top
                    ),
                    region_id: Some(region.id.clone()),
                    severity: Severity::Medium,
                    auto_fixable: true,
                });
            }
        }

        finish_category(score, issues, suggestions)
    }
}
