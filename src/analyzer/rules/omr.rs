//! Structural OMR compliance: the region types a scannable sheet needs.
//!
//! Positioning and question regions are structurally required; a missing
//! student-info block is a best-practice recommendation only, so it raises
//! a suggestion without touching the score.

use super::{finish_category, AnalysisContext, CategoryRule};
use crate::{Category, CategoryResult, Issue, IssueKind, Priority, Region, RegionType, Severity, Suggestion};

const PENALTY_NO_POSITIONING: f64 = 40.0;
const PENALTY_NO_QUESTIONS: f64 = 20.0;

/// Rule for structural OMR compliance
pub struct OmrComplianceRule;

impl OmrComplianceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OmrComplianceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRule for OmrComplianceRule {
    fn category(&self) -> Category {
        Category::OmrCompliance
    }

    fn evaluate(&self, regions: &[Region], _ctx: &AnalysisContext) -> CategoryResult {
        let mut score = 100.0;
        let mut issues = Vec::new();
        let mut suggestions = Vec::new();

        let has = |kind: RegionType| regions.iter().any(|r| r.kind == kind);

        if !has(RegionType::Positioning) {
            score -= PENALTY_NO_POSITIONING;
            issues.push(Issue {
                id: "omr-no-positioning".to_string(),
                kind: IssueKind::Error,
                category: Category::OmrCompliance,
                title: "No positioning regions".to_string(),
                description: "OMR software cannot align a page without positioning marks"
                    .to_string(),
                region_id: None,
                severity: Severity::High,
                auto_fixable: true,
            });
        }

        if !has(RegionType::Question) {
            score -= PENALTY_NO_QUESTIONS;
            issues.push(Issue {
                id: "omr-no-questions".to_string(),
                kind: IssueKind::Warning,
                category: Category::OmrCompliance,
                title: "No question regions".to_string(),
                description: "The template declares nothing to grade".to_string(),
                region_id: None,
                severity: Severity::Medium,
                auto_fixable: false,
            });
        }

        if !has(RegionType::StudentInfo) {
            suggestions.push(Suggestion {
                id: "omr-add-student-info".to_string(),
                category: Category::OmrCompliance,
                title: "Add a student-info block".to_string(),
                description: "Sheets without identity capture must be matched to students manually"
                    .to_string(),
                action: "Add a student-info region (name field or ID grid) near the top"
                    .to_string(),
                priority: Priority::Medium,
                impact: "Lets grading attribute each sheet automatically".to_string(),
            });
        }

        finish_category(score, issues, suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standards::OmrStandards;
    use crate::{CategoryStatus, PageSize, RegionProperties, TemplateConfig};

    fn region(kind: RegionType) -> Region {
        Region {
            id: format!("{}", kind),
            kind,
            x: 20.0,
            y: 20.0,
            width: 20.0,
            height: 10.0,
            properties: RegionProperties::default(),
        }
    }

    fn evaluate(regions: &[Region]) -> CategoryResult {
        let template = TemplateConfig {
            page_size: PageSize::A4,
            dpi: 300.0,
        };
        let standards = OmrStandards::default();
        let ctx = AnalysisContext {
            template: &template,
            standards: &standards,
        };
        OmrComplianceRule::new().evaluate(regions, &ctx)
    }

    #[test]
    fn complete_template_passes() {
        let regions = vec![
            region(RegionType::Positioning),
            region(RegionType::Question),
            region(RegionType::StudentInfo),
        ];
        let result = evaluate(&regions);
        assert_eq!(result.score, 100.0);
        assert!(result.issues.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn missing_positioning_costs_40() {
        let regions = vec![region(RegionType::Question), region(RegionType::StudentInfo)];
        let result = evaluate(&regions);
        assert_eq!(result.score, 60.0);
        assert_eq!(result.status, CategoryStatus::Warning);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::High);
        assert_eq!(result.issues[0].kind, IssueKind::Error);
    }

    #[test]
    fn missing_questions_costs_20_not_40() {
        let regions = vec![
            region(RegionType::Positioning),
            region(RegionType::StudentInfo),
        ];
        let result = evaluate(&regions);
        assert_eq!(result.score, 80.0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Medium);
        assert_eq!(result.issues[0].kind, IssueKind::Warning);
        // Hard issue, not a suggestion
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn missing_student_info_suggestion_only() {
        let regions = vec![region(RegionType::Positioning), region(RegionType::Question)];
        let result = evaluate(&regions);
        assert_eq!(result.score, 100.0);
        assert!(result.issues.is_empty());
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].id, "omr-add-student-info");
    }

    #[test]
    fn empty_template_stacks_both_penalties() {
        let result = evaluate(&[]);
        assert_eq!(result.score, 40.0);
        assert_eq!(result.status, CategoryStatus::Fail);
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.suggestions.len(), 1);
    }
}
