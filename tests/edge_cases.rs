//! Edge-case scenarios exercised through the public library API

use sheetlint::analyzer::QualityAnalyzer;
use sheetlint::{
    CategoryStatus, Grade, PageSize, Region, RegionProperties, RegionType, Severity,
    TemplateConfig,
};

fn region(id: &str, kind: RegionType, x: f64, y: f64, w: f64, h: f64) -> Region {
    Region {
        id: id.to_string(),
        kind,
        x,
        y,
        width: w,
        height: h,
        properties: RegionProperties::default(),
    }
}

fn a4(dpi: f64) -> TemplateConfig {
    TemplateConfig {
        page_size: PageSize::A4,
        dpi,
    }
}

#[test]
fn empty_template_scores_without_panicking() {
    let result = QualityAnalyzer::new().analyze(&[], &a4(300.0), None);

    assert_eq!(result.statistics.total_regions, 0);
    assert_eq!(result.statistics.coverage, 0.0);
    assert_eq!(result.statistics.density, 0.0);
    // No positioning and no questions: both omr penalties apply
    assert_eq!(result.categories.omr.score, 40.0);
    assert_eq!(result.categories.position.score, 70.0);
    // Empty size and spacing categories stay clean
    assert_eq!(result.categories.size.score, 100.0);
    assert_eq!(result.categories.spacing.score, 100.0);
    assert!(!result.compliance.omr_standard);
}

#[test]
fn single_mark_inside_corner_distance_raises_no_corner_issue() {
    // Mark 5mm from the top-left corner on a standard that allows 15mm
    let regions = vec![region("p1", RegionType::Positioning, 5.0, 5.0, 10.0, 10.0)];
    let result = QualityAnalyzer::new().analyze(&regions, &a4(300.0), None);

    assert!(!result
        .issues
        .iter()
        .any(|i| i.id.starts_with("position-far-from-corner")));
    // Count is still short of the required three marks
    assert!(result
        .issues
        .iter()
        .any(|i| i.id == "position-insufficient-marks"));
    assert_eq!(result.categories.position.score, 70.0);
}

#[test]
fn bubbles_three_mm_apart_raise_exactly_one_pair_issue() {
    // Centers at (50, 50) and (53, 50): 3mm apart, under the 5mm minimum
    let regions = vec![
        region("b1", RegionType::Bubble, 48.0, 48.0, 4.0, 4.0),
        region("b2", RegionType::Bubble, 51.0, 48.0, 4.0, 4.0),
    ];
    let result = QualityAnalyzer::new().analyze(&regions, &a4(300.0), None);

    let spacing_issues: Vec<_> = result
        .issues
        .iter()
        .filter(|i| i.id.starts_with("spacing-too-close"))
        .collect();
    assert_eq!(spacing_issues.len(), 1);
    assert_eq!(result.categories.spacing.score, 95.0);

    let spacing_suggestions: Vec<_> = result
        .suggestions
        .iter()
        .filter(|s| s.id == "spacing-increase")
        .collect();
    assert_eq!(spacing_suggestions.len(), 1);
}

#[test]
fn low_dpi_costs_exactly_twenty_points() {
    let regions = vec![region("q1", RegionType::Question, 20.0, 60.0, 170.0, 40.0)];
    let at_300 = QualityAnalyzer::new().analyze(&regions, &a4(300.0), None);
    let at_150 = QualityAnalyzer::new().analyze(&regions, &a4(150.0), None);

    assert_eq!(at_300.categories.print.score, 100.0);
    assert_eq!(at_150.categories.print.score, 80.0);
    assert!(at_300.compliance.print_ready);
    assert!(!at_150.compliance.print_ready);
    assert!(at_150.issues.iter().any(|i| i.id == "print-low-dpi"));
}

#[test]
fn missing_questions_with_positioning_is_a_warning_not_an_error() {
    let regions = vec![
        region("p1", RegionType::Positioning, 12.0, 12.0, 10.0, 10.0),
        region("p2", RegionType::Positioning, 188.0, 12.0, 10.0, 10.0),
        region("p3", RegionType::Positioning, 12.0, 275.0, 10.0, 10.0),
        region("info", RegionType::StudentInfo, 40.0, 15.0, 120.0, 20.0),
    ];
    let result = QualityAnalyzer::new().analyze(&regions, &a4(300.0), None);

    assert_eq!(result.categories.omr.score, 80.0);
    assert_eq!(result.categories.omr.status, CategoryStatus::Pass);
    let issue = result
        .issues
        .iter()
        .find(|i| i.id == "omr-no-questions")
        .unwrap();
    assert_eq!(issue.severity, Severity::Medium);
    // Positioning is present but total is zero questions, so the
    // standard flag tracks positioning + nonzero region count
    assert!(result.compliance.omr_standard);
}

#[test]
fn overlapping_regions_report_coverage_above_hundred() {
    // Two full-page regions: coverage is a plain sum, not clipped
    let regions = vec![
        region("a", RegionType::Other, 0.0, 0.0, 210.0, 297.0),
        region("b", RegionType::Other, 0.0, 0.0, 210.0, 297.0),
    ];
    let result = QualityAnalyzer::new().analyze(&regions, &a4(300.0), None);
    assert_eq!(result.statistics.coverage, 200.0);
}

#[test]
fn invalid_page_zeroes_statistics_and_fails_print() {
    let regions = vec![region("q1", RegionType::Question, 20.0, 60.0, 170.0, 40.0)];
    let template = TemplateConfig {
        page_size: PageSize {
            width: 0.0,
            height: 297.0,
        },
        dpi: 300.0,
    };
    let result = QualityAnalyzer::new().analyze(&regions, &template, None);

    assert_eq!(result.statistics.coverage, 0.0);
    assert_eq!(result.statistics.density, 0.0);
    assert!(result
        .issues
        .iter()
        .any(|i| i.id == "print-invalid-page-size"));
    assert!(!result.compliance.print_ready);
}

#[test]
fn right_and_bottom_overhang_is_not_a_margin_violation() {
    // Region extends past the right/bottom edges but respects top/left margins
    let regions = vec![region("q1", RegionType::Question, 50.0, 50.0, 500.0, 500.0)];
    let result = QualityAnalyzer::new().analyze(&regions, &a4(300.0), None);
    assert!(!result
        .issues
        .iter()
        .any(|i| i.id.starts_with("print-margin-clip")));
}

#[test]
fn many_violations_floor_every_score_at_zero() {
    // 25 coincident bubbles: 300 close pairs at -5 each
    let regions: Vec<Region> = (0..25)
        .map(|i| {
            region(
                &format!("b{}", i),
                RegionType::Bubble,
                100.0,
                100.0,
                4.0,
                4.0,
            )
        })
        .collect();
    let result = QualityAnalyzer::new().analyze(&regions, &a4(300.0), None);

    assert_eq!(result.categories.spacing.score, 0.0);
    assert_eq!(result.categories.spacing.status, CategoryStatus::Fail);
    assert!(result.overall.score >= 0.0);
}

#[test]
fn degenerate_region_zeroes_size_category() {
    let regions = vec![
        region("ok", RegionType::Question, 20.0, 60.0, 170.0, 40.0),
        region("bad", RegionType::Bubble, 50.0, 150.0, 0.0, 4.0),
    ];
    let result = QualityAnalyzer::new().analyze(&regions, &a4(300.0), None);

    // Minimum across regions, not an average
    assert_eq!(result.categories.size.score, 0.0);
    assert_eq!(result.categories.size.status, CategoryStatus::Fail);
    // Degenerate regions still count in statistics but add no coverage
    assert_eq!(result.statistics.total_regions, 2);
}

#[test]
fn grade_tracks_overall_score_bands() {
    let clean = vec![
        region("p1", RegionType::Positioning, 12.0, 12.0, 10.0, 10.0),
        region("p2", RegionType::Positioning, 188.0, 12.0, 10.0, 10.0),
        region("p3", RegionType::Positioning, 12.0, 275.0, 10.0, 10.0),
        region("info", RegionType::StudentInfo, 40.0, 15.0, 120.0, 20.0),
        region("q1", RegionType::Question, 20.0, 60.0, 170.0, 40.0),
    ];
    let result = QualityAnalyzer::new().analyze(&clean, &a4(300.0), None);
    assert_eq!(result.overall.score, 100.0);
    assert_eq!(result.overall.grade, Grade::Excellent);

    let empty = QualityAnalyzer::new().analyze(&[], &a4(300.0), None);
    assert!(empty.overall.score < result.overall.score);
}
