//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::QualityAnalysisResult;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn to_string<T: Serialize>(&self, value: &T, fallback: &str) -> String {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        serialized.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single analysis result as JSON
    pub fn report(&self, result: &QualityAnalysisResult) -> String {
        self.to_string(result, "{}")
    }

    /// Report multiple results as a JSON array
    pub fn report_many(&self, results: &[QualityAnalysisResult]) -> String {
        self.to_string(&results, "[]")
    }

    /// Report with an aggregate summary
    pub fn report_with_summary(
        &self,
        results: &[QualityAnalysisResult],
        stats: &AggregateStats,
    ) -> String {
        let output = JsonOutput {
            results,
            summary: JsonSummary {
                templates_analyzed: stats.templates_analyzed,
                average_score: stats.average_score,
                average_grade: crate::grade_badge(stats.average_score).grade,
                total_regions: stats.total_regions,
                total_issues: stats.total_issues,
                generated_at: chrono::Utc::now().to_rfc3339(),
            },
        };
        self.to_string(&output, "{}")
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [QualityAnalysisResult],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    templates_analyzed: usize,
    average_score: f64,
    average_grade: &'static str,
    total_regions: usize,
    total_issues: usize,
    generated_at: String,
}
