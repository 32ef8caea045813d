//! Analysis engine - orchestrates the category rules

use crate::analyzer::rules::{
    AnalysisContext, CategoryRule, OmrComplianceRule, PositionRule, PrintReadinessRule, SizeRule,
    SpacingRule,
};
use crate::analyzer::{ComplianceChecker, ScoreCalculator, StatisticsCalculator};
use crate::standards::StandardsProvider;
use crate::template::TemplateDocument;
use crate::{Categories, QualityAnalysisResult, Region, TemplateConfig};

/// Main analysis engine.
///
/// Stateless between calls: every invocation resolves standards, runs the
/// five category rules plus statistics and compliance over the same
/// immutable inputs, and builds one fresh result. Concurrent calls are
/// safe to parallelize by the caller.
#[derive(Debug, Clone, Default)]
pub struct QualityAnalyzer {
    provider: StandardsProvider,
}

impl QualityAnalyzer {
    /// Engine with default standards and thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom standards provider (config overrides)
    pub fn with_provider(provider: StandardsProvider) -> Self {
        Self { provider }
    }

    /// Analyze a template layout. Never fails: malformed data degrades
    /// scores and surfaces as issues rather than aborting.
    pub fn analyze(
        &self,
        regions: &[Region],
        template: &TemplateConfig,
        exam_type: Option<&str>,
    ) -> QualityAnalysisResult {
        let resolved = self.provider.resolve(exam_type);
        let ctx = AnalysisContext {
            template,
            standards: &resolved.standards,
        };

        let categories = Categories {
            position: PositionRule::new().evaluate(regions, &ctx),
            size: SizeRule::new().evaluate(regions, &ctx),
            spacing: SpacingRule::new().evaluate(regions, &ctx),
            omr: OmrComplianceRule::new().evaluate(regions, &ctx),
            print: PrintReadinessRule::new().evaluate(regions, &ctx),
        };

        let mut issues = Vec::new();
        let mut suggestions = Vec::new();
        for category in [
            &categories.position,
            &categories.size,
            &categories.spacing,
            &categories.omr,
            &categories.print,
        ] {
            issues.extend(category.issues.iter().cloned());
            suggestions.extend(category.suggestions.iter().cloned());
        }

        let overall = ScoreCalculator::overall(&categories, &resolved.thresholds);
        let statistics = StatisticsCalculator::calculate(regions, template);
        let compliance = ComplianceChecker::check(regions, template, &resolved.standards);

        QualityAnalysisResult {
            overall,
            categories,
            issues,
            suggestions,
            statistics,
            compliance,
        }
    }

    /// Analyze a loaded template document
    pub fn analyze_document(&self, document: &TemplateDocument) -> QualityAnalysisResult {
        self.analyze(
            &document.regions,
            &document.config(),
            document.exam_type.as_deref(),
        )
    }

    /// Analyze multiple documents sequentially
    pub fn analyze_many(&self, documents: &[TemplateDocument]) -> Vec<QualityAnalysisResult> {
        documents.iter().map(|d| self.analyze_document(d)).collect()
    }

    /// Analyze multiple documents in parallel using rayon
    pub fn analyze_parallel(&self, documents: &[TemplateDocument]) -> Vec<QualityAnalysisResult> {
        use rayon::prelude::*;

        documents
            .par_iter()
            .map(|d| self.analyze_document(d))
            .collect()
    }

    /// Aggregate stats from multiple results
    pub fn aggregate_stats(results: &[QualityAnalysisResult]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let total_score: f64 = results.iter().map(|r| r.overall.score).sum();
        let average_score = ScoreCalculator::round2(total_score / results.len() as f64);
        let total_regions = results.iter().map(|r| r.statistics.total_regions).sum();
        let total_issues = results.iter().map(|r| r.issues.len()).sum();

        AggregateStats {
            templates_analyzed: results.len(),
            average_score,
            total_regions,
            total_issues,
        }
    }
}

/// Aggregate statistics from multiple template analyses
#[derive(Debug, Default)]
pub struct AggregateStats {
    pub templates_analyzed: usize,
    pub average_score: f64,
    pub total_regions: usize,
    pub total_issues: usize,
}
