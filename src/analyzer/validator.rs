//! Per-region geometry validation
//!
//! Used by the size rule on each region in turn; never called on the full
//! set. A region with non-positive width or height is always invalid and
//! scores 0 for that check.

use crate::standards::OmrStandards;
use crate::{Category, Issue, IssueKind, Priority, Region, RegionType, Severity, Suggestion};

/// Outcome of validating a single region's geometry
#[derive(Debug, Clone)]
pub struct RegionValidation {
    pub is_valid: bool,
    /// Score in [0, 100] for this region's sizing
    pub score: f64,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
}

impl RegionValidation {
    fn ok() -> Self {
        Self {
            is_valid: true,
            score: 100.0,
            issues: vec![],
            suggestions: vec![],
        }
    }
}

/// Validates one region against the sizing standards
pub struct RegionValidator;

impl RegionValidator {
    pub fn validate(region: &Region, standards: &OmrStandards) -> RegionValidation {
        // NaN dimensions fail the positive-extent check and land here too
        if !region.has_positive_extent() {
            return RegionValidation {
                is_valid: false,
                score: 0.0,
                issues: vec![Issue {
                    id: format!("size-invalid-dimensions-{}", region.id),
                    kind: IssueKind::Error,
                    category: Category::Size,
                    title: "Region has invalid dimensions".to_string(),
                    description: format!(
                        "Region '{}' has non-positive width or height ({} x {} mm)",
                        region.id, region.width, region.height
                    ),
                    region_id: Some(region.id.clone()),
                    severity: Severity::High,
                    auto_fixable: false,
                }],
                suggestions: vec![Suggestion {
                    id: format!("size-fix-dimensions-{}", region.id),
                    category: Category::Size,
                    title: "Fix region dimensions".to_string(),
                    description: format!(
                        "Region '{}' cannot be scanned without a positive width and height",
                        region.id
                    ),
                    action: "Resize the region in the editor to a positive extent".to_string(),
                    priority: Priority::High,
                    impact: "Required for the region to be recognized at all".to_string(),
                }],
            };
        }

        if region.kind == RegionType::Bubble
            && (region.width < standards.bubble.min_width
                || region.height < standards.bubble.min_height)
        {
            return RegionValidation {
                is_valid: false,
                score: 60.0,
                issues: vec![Issue {
                    id: format!("size-bubble-too-small-{}", region.id),
                    kind: IssueKind::Warning,
                    category: Category::Size,
                    title: "Bubble below minimum size".to_string(),
                    description: format!(
                        "Bubble '{}' is {} x {} mm; scanners need at least {} x {} mm",
                        region.id,
                        region.width,
                        region.height,
                        standards.bubble.min_width,
                        standards.bubble.min_height
                    ),
                    region_id: Some(region.id.clone()),
                    severity: Severity::Medium,
                    auto_fixable: true,
                }],
                suggestions: vec![Suggestion {
                    id: format!("size-enlarge-bubble-{}", region.id),
                    category: Category::Size,
                    title: "Enlarge bubble".to_string(),
                    description: format!(
                        "Small bubbles are misread when partially filled ('{}')",
                        region.id
                    ),
                    action: format!(
                        "Resize the bubble to at least {} x {} mm",
                        standards.bubble.min_width, standards.bubble.min_height
                    ),
                    priority: Priority::Medium,
                    impact: "Reduces false negatives on lightly filled marks".to_string(),
                }],
            };
        }

        RegionValidation::ok()
    }
}
