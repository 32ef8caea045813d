//! Sheetlint: Quality Analyzer for OMR answer-sheet templates
//!
//! This library evaluates a designed answer-sheet layout (positioning marks,
//! bubbles, barcodes, student-info blocks, question zones) against optical-mark
//! recognition scanning standards and print constraints, producing a graded
//! quality score with categorized issues and remediation suggestions.

pub mod analyzer;
pub mod config;
pub mod reporter;
pub mod standards;
pub mod template;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of element placed on an answer sheet.
///
/// Unknown or missing type strings deserialize to `Unknown` so that a
/// malformed template still produces a diagnostic result instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionType {
    Positioning,
    Barcode,
    QrCode,
    StudentInfo,
    Question,
    Bubble,
    Other,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for RegionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionType::Positioning => write!(f, "positioning"),
            RegionType::Barcode => write!(f, "barcode"),
            RegionType::QrCode => write!(f, "qrCode"),
            RegionType::StudentInfo => write!(f, "studentInfo"),
            RegionType::Question => write!(f, "question"),
            RegionType::Bubble => write!(f, "bubble"),
            RegionType::Other => write!(f, "other"),
            RegionType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Semantic metadata attached to a region.
///
/// The known keys are typed; anything else lands in `extra` and is carried
/// through untouched for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionProperties {
    /// Question number (question zones)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_number: Option<u32>,
    /// Maximum score (question zones)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    /// Number of choice options (bubble groups)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_count: Option<u32>,
    /// Display label (student-info blocks, barcodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Open-ended extras, preserved verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One placed element of an answer-sheet template.
///
/// Coordinates and extents are millimeters from the page's top-left origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Stable identifier, unique within a template
    pub id: String,
    /// Element kind
    #[serde(rename = "type", default = "default_region_type")]
    pub kind: RegionType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Semantic metadata (opaque except for typed keys)
    #[serde(default)]
    pub properties: RegionProperties,
}

fn default_region_type() -> RegionType {
    RegionType::Unknown
}

impl Region {
    /// Geometric center of the region
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Area in square millimeters; 0 for degenerate or non-finite geometry
    pub fn area(&self) -> f64 {
        if self.width.is_finite() && self.height.is_finite() && self.has_positive_extent() {
            self.width * self.height
        } else {
            0.0
        }
    }

    /// Whether the region satisfies the `width > 0 && height > 0` invariant
    pub fn has_positive_extent(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Page dimensions in millimeters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl PageSize {
    /// A4 portrait, the common answer-sheet format
    pub const A4: PageSize = PageSize {
        width: 210.0,
        height: 297.0,
    };

    /// Both dimensions present, finite, and positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn area(&self) -> f64 {
        if self.is_valid() {
            self.width * self.height
        } else {
            0.0
        }
    }
}

/// Page-level template description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(default)]
    pub page_size: PageSize,
    /// Intended print/scan resolution; 0 when unspecified
    #[serde(default)]
    pub dpi: f64,
}

/// Issue taxonomy: structural/blocking, degraded, or advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Info,
}

/// How strongly an issue impacts scan reliability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Suggestion priority for remediation ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// The five analysis categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Position,
    Size,
    Spacing,
    OmrCompliance,
    PrintReadiness,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Position => write!(f, "position"),
            Category::Size => write!(f, "size"),
            Category::Spacing => write!(f, "spacing"),
            Category::OmrCompliance => write!(f, "omrCompliance"),
            Category::PrintReadiness => write!(f, "printReadiness"),
        }
    }
}

/// A finding raised by a category analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Stable identifier, e.g. `position-insufficient-marks`
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Region the issue refers to, when region-specific
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    pub severity: Severity,
    /// Whether an editor could fix this mechanically (e.g. snap to corner)
    pub auto_fixable: bool,
}

/// A remediation suggestion raised by a category analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Concrete action the template author should take
    pub action: String,
    pub priority: Priority,
    /// Expected effect on scan quality
    pub impact: String,
}

/// Pass/warning/fail tier for one category (80/60 cutoffs, local to
/// category evaluation and distinct from the overall grade thresholds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Pass,
    Warning,
    Fail,
}

/// One category's evaluation: bounded score, tier, and findings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    /// Score in [0, 100]
    pub score: f64,
    pub status: CategoryStatus,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
}

/// The five category results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    pub position: CategoryResult,
    pub size: CategoryResult,
    pub spacing: CategoryResult,
    pub omr: CategoryResult,
    pub print: CategoryResult,
}

/// Overall grade band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Excellent => write!(f, "excellent"),
            Grade::Good => write!(f, "good"),
            Grade::Acceptable => write!(f, "acceptable"),
            Grade::Poor => write!(f, "poor"),
        }
    }
}

/// Overall pass/warning/fail derived from the grade band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Pass,
    Warning,
    Fail,
}

/// Aggregate score, grade, and status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overall {
    /// Weighted aggregate in [0, 100]
    pub score: f64,
    pub grade: Grade,
    pub status: OverallStatus,
}

/// Region statistics: pure aggregation, no thresholds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_regions: usize,
    pub regions_by_type: BTreeMap<RegionType, usize>,
    /// Percent of page area covered by regions; intentionally not clipped
    /// at 100 (overlapping or out-of-bounds regions are diagnostic)
    pub coverage: f64,
    /// Regions per square decimeter (10,000 mm2) of page
    pub density: f64,
}

/// Informational summary flags for the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compliance {
    pub omr_standard: bool,
    pub print_ready: bool,
    pub scan_optimized: bool,
}

/// The sole output of the engine, immutable once constructed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAnalysisResult {
    pub overall: Overall,
    pub categories: Categories,
    /// All category issues, flattened
    pub issues: Vec<Issue>,
    /// All category suggestions, flattened
    pub suggestions: Vec<Suggestion>,
    pub statistics: Statistics,
    pub compliance: Compliance,
}

/// Display-only grade badge for UI quick-rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBadge {
    pub grade: &'static str,
    /// UI color hint
    pub color: &'static str,
    pub description: &'static str,
}

/// Map a raw score to a display badge with fixed 90/70/50 bands.
///
/// The bands match the engine's *default* `QualityThresholds`. Configured
/// thresholds may diverge; this helper does not track configuration and is
/// only meant for score badges.
pub fn grade_badge(score: f64) -> GradeBadge {
    if score >= 90.0 {
        GradeBadge {
            grade: "excellent",
            color: "green",
            description: "Template meets all OMR scanning standards",
        }
    } else if score >= 70.0 {
        GradeBadge {
            grade: "good",
            color: "blue",
            description: "Template is scannable with minor issues",
        }
    } else if score >= 50.0 {
        GradeBadge {
            grade: "acceptable",
            color: "orange",
            description: "Template may scan unreliably - review the issues",
        }
    } else {
        GradeBadge {
            grade: "poor",
            color: "red",
            description: "Template needs rework before printing",
        }
    }
}

/// Public API: analyze a template layout with default standards.
///
/// * `regions` - the placed elements
/// * `template` - page size and print resolution
/// * `exam_type` - optional exam-type preset name (unknown names fall back
///   to defaults)
pub fn analyze_template_quality(
    regions: &[Region],
    template: &TemplateConfig,
    exam_type: Option<&str>,
) -> QualityAnalysisResult {
    let engine = crate::analyzer::QualityAnalyzer::new();
    engine.analyze(regions, template, exam_type)
}
