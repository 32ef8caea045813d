//! Positioning-mark coverage: enough marks, each close to a page corner.
//!
//! Scanning software locates the page by its positioning marks; marks far
//! from the corners reduce alignment accuracy and each one is penalized
//! separately, so several drifting marks compound.

use super::{finish_category, AnalysisContext, CategoryRule};
use crate::{Category, CategoryResult, Issue, IssueKind, Priority, Region, RegionType, Severity, Suggestion};

const PENALTY_INSUFFICIENT_MARKS: f64 = 30.0;
const PENALTY_FAR_FROM_CORNER: f64 = 10.0;

/// Rule for positioning-mark placement
pub struct PositionRule;

impl PositionRule {
    pub fn new() -> Self {
        Self
    }

    /// Distance from the region to its nearest page corner, taking the
    /// region's own extent into account
    fn distance_from_corner(region: &Region, page_width: f64, page_height: f64) -> f64 {
        let right = page_width - (region.x + region.width);
        let bottom = page_height - (region.y + region.height);
        region.x.min(region.y).min(right).min(bottom)
    }
}

impl Default for PositionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRule for PositionRule {
    fn category(&self) -> Category {
        Category::Position
    }

    fn evaluate(&self, regions: &[Region], ctx: &AnalysisContext) -> CategoryResult {
        let mut score = 100.0;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        let marks: Vec<&Region> = regions
            .iter()
            .filter(|r| r.kind == RegionType::Positioning)
            .collect();

        let min_count = ctx.standards.positioning.min_count;
        if marks.len() < min_count {
            score -= PENALTY_INSUFFICIENT_MARKS;
            issues.push(Issue {
                id: "position-insufficient-marks".to_string(),
                kind: IssueKind::Error,
                category: Category::Position,
                title: "Insufficient positioning points".to_string(),
                description: format!(
                    "Template has {} positioning mark(s); at least {} are required for reliable alignment",
                    marks.len(),
                    min_count
                ),
                region_id: None,
                severity: Severity::High,
                auto_fixable: true,
            });
            suggestions.push(Suggestion {
                id: "position-add-corner-marks".to_string(),
                category: Category::Position,
                title: "Add positioning marks".to_string(),
                description: "Scanners align the page using marks near its corners".to_string(),
                action: format!("Place positioning marks at the page corners ({} needed)", min_count),
                priority: Priority::High,
                impact: "Enables orientation and skew correction during scanning".to_string(),
            });
        }

        let max_distance = ctx.standards.positioning.corner_distance;
        let page = ctx.template.page_size;
        for mark in &marks {
            let distance = Self::distance_from_corner(mark, page.width, page.height);
            if distance > max_distance {
                score -= PENALTY_FAR_FROM_CORNER;
                issues.push(Issue {
                    id: format!("position-far-from-corner-{}", mark.id),
                    kind: IssueKind::Warning,
                    category: Category::Position,
                    title: "Positioning mark too far from corner".to_string(),
                    description: format!(
                        "Mark '{}' is {:.1} mm from the nearest corner (max {} mm)",
                        mark.id, distance, max_distance
                    ),
                    region_id: Some(mark.id.clone()),
                    severity: Severity::Medium,
                    auto_fixable: true,
                });
            }
        }

        finish_category(score, issues, suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standards::OmrStandards;
    use crate::{CategoryStatus, PageSize, RegionProperties, TemplateConfig};

    fn mark(id: &str, x: f64, y: f64) -> Region {
        Region {
            id: id.to_string(),
            kind: RegionType::Positioning,
            x,
            y,
            width: 10.0,
            height: 10.0,
            properties: RegionProperties::default(),
        }
    }

    fn a4_template() -> TemplateConfig {
        TemplateConfig {
            page_size: PageSize::A4,
            dpi: 300.0,
        }
    }

    fn evaluate(regions: &[Region]) -> CategoryResult {
        let template = a4_template();
        let standards = OmrStandards::default();
        let ctx = AnalysisContext {
            template: &template,
            standards: &standards,
        };
        PositionRule::new().evaluate(regions, &ctx)
    }

    #[test]
    fn corner_marks_pass_clean() {
        // Three marks, each within 15mm of a corner on A4
        let regions = vec![
            mark("tl", 5.0, 5.0),
            mark("tr", 195.0, 5.0),
            mark("bl", 5.0, 282.0),
        ];
        let result = evaluate(&regions);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.status, CategoryStatus::Pass);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn mark_at_5mm_with_15mm_limit_not_flagged() {
        // distance-from-corner = min(5, 5, 195, 282) = 5 <= 15
        let regions = vec![mark("a", 5.0, 5.0), mark("b", 195.0, 5.0), mark("c", 5.0, 282.0)];
        let result = evaluate(&regions);
        assert!(result
            .issues
            .iter()
            .all(|i| !i.id.starts_with("position-far-from-corner")));
    }

    #[test]
    fn missing_marks_costs_30_with_suggestion() {
        let result = evaluate(&[]);
        assert_eq!(result.score, 70.0);
        assert_eq!(result.status, CategoryStatus::Warning);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].id, "position-insufficient-marks");
        assert!(result.issues[0].auto_fixable);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn far_marks_compound() {
        // Three marks in the page middle: each > 15mm from every corner
        let regions = vec![
            mark("m1", 100.0, 100.0),
            mark("m2", 100.0, 150.0),
            mark("m3", 100.0, 200.0),
        ];
        let result = evaluate(&regions);
        // -10 per far mark
        assert_eq!(result.score, 70.0);
        assert_eq!(result.issues.len(), 3);
        assert!(result.issues.iter().all(|i| i.severity == Severity::Medium));
    }

    #[test]
    fn score_floors_at_zero() {
        // No sufficient count and many far marks
        let mut regions: Vec<Region> = (0..10)
            .map(|i| mark(&format!("m{}", i), 100.0, 100.0))
            .collect();
        regions.truncate(10);
        let result = evaluate(&regions);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.status, CategoryStatus::Fail);
    }
}
