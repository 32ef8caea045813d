//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::analyzer::scoring::{
    WEIGHT_OMR, WEIGHT_POSITION, WEIGHT_PRINT, WEIGHT_SIZE, WEIGHT_SPACING,
};
use crate::{grade_badge, CategoryResult, Grade, IssueKind, QualityAnalysisResult, Severity};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to show verbose output (suggestions per category)
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single analysis result
    pub fn report(&self, name: &str, result: &QualityAnalysisResult) {
        self.print_header(name, result);
        self.print_score(result);
        self.print_breakdown(result);

        if !result.issues.is_empty() {
            self.print_issues(result);
        }
        if !result.suggestions.is_empty() && self.verbose {
            self.print_suggestions(result);
        }
        println!();
    }

    /// Report multiple results with a summary
    pub fn report_many(&self, named: &[(String, QualityAnalysisResult)], stats: &AggregateStats) {
        for (name, result) in named {
            self.report(name, result);
            println!("{}", "─".repeat(60));
        }
        self.print_summary(stats);
    }

    /// Report in quiet mode (one line per template)
    pub fn report_quiet(&self, name: &str, result: &QualityAnalysisResult) {
        let grade = self.colorize_grade(result.overall.grade);
        println!("{}: {} ({})", name, result.overall.score, grade);
    }

    fn print_header(&self, name: &str, result: &QualityAnalysisResult) {
        println!();
        println!("{}", format!("Template Quality Analysis: {}", name).bold());
        println!(
            "   Regions: {} | Coverage: {:.2}% | Density: {:.2}/dm²",
            result.statistics.total_regions, result.statistics.coverage, result.statistics.density
        );
        let flags = [
            ("omr", result.compliance.omr_standard),
            ("print", result.compliance.print_ready),
            ("scan", result.compliance.scan_optimized),
        ];
        let rendered: Vec<String> = flags
            .iter()
            .map(|(label, ok)| {
                if *ok {
                    format!("{} {}", "✓".green(), label)
                } else {
                    format!("{} {}", "✗".red(), label)
                }
            })
            .collect();
        println!("   Compliance: {}", rendered.join("  "));
        println!();
    }

    fn print_score(&self, result: &QualityAnalysisResult) {
        let grade = self.colorize_grade(result.overall.grade);
        let bar = self.score_bar(result.overall.score);
        println!("   Score: {} {} {}", bar, result.overall.score, grade.bold());
        println!("   {}", grade_badge(result.overall.score).description.dimmed());
        println!();
    }

    fn print_breakdown(&self, result: &QualityAnalysisResult) {
        println!("   {}", "Category Breakdown:".bold());
        let categories: [(&str, &CategoryResult, f64); 5] = [
            ("Position", &result.categories.position, WEIGHT_POSITION),
            ("OMR Compliance", &result.categories.omr, WEIGHT_OMR),
            ("Print Readiness", &result.categories.print, WEIGHT_PRINT),
            ("Size", &result.categories.size, WEIGHT_SIZE),
            ("Spacing", &result.categories.spacing, WEIGHT_SPACING),
        ];
        for (name, category, weight) in categories {
            let bar = self.mini_bar(category.score);
            let score_str = format!("{:>5.1}", category.score);
            let colored_score = if category.score >= 80.0 {
                score_str.green()
            } else if category.score >= 60.0 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!(
                "   {} {} {} (weight {}%)",
                bar,
                colored_score,
                name,
                (weight * 100.0) as u32
            );
        }
        println!();
    }

    fn print_issues(&self, result: &QualityAnalysisResult) {
        println!("   {}", "Issues:".bold());
        // Highest severity first
        let mut issues: Vec<_> = result.issues.iter().collect();
        issues.sort_by_key(|i| match i.severity {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        });
        for issue in issues {
            let tag = match issue.kind {
                IssueKind::Error => "error".red().bold(),
                IssueKind::Warning => "warning".yellow(),
                IssueKind::Info => "info".blue(),
            };
            let region = issue
                .region_id
                .as_deref()
                .map(|id| format!(" [{}]", id))
                .unwrap_or_default();
            println!("   {} {}{}: {}", tag, issue.title, region.dimmed(), issue.description);
        }
        println!();
    }

    fn print_suggestions(&self, result: &QualityAnalysisResult) {
        println!("   {}", "Suggestions:".bold());
        for suggestion in &result.suggestions {
            println!(
                "   {} {} - {}",
                "→".cyan(),
                suggestion.title,
                suggestion.action.dimmed()
            );
        }
        println!();
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "Summary".bold());
        println!("   Templates analyzed: {}", stats.templates_analyzed);
        println!(
            "   Average score: {} ({})",
            stats.average_score,
            grade_badge(stats.average_score).grade
        );
        println!("   Total regions: {}", stats.total_regions);
        println!("   Total issues: {}", stats.total_issues);
    }

    fn colorize_grade(&self, grade: Grade) -> colored::ColoredString {
        match grade {
            Grade::Excellent => grade.to_string().green(),
            Grade::Good => grade.to_string().cyan(),
            Grade::Acceptable => grade.to_string().yellow(),
            Grade::Poor => grade.to_string().red(),
        }
    }

    fn score_bar(&self, score: f64) -> String {
        let filled = (score / 10.0).round().clamp(0.0, 10.0) as usize;
        format!("[{}{}]", "█".repeat(filled), "░".repeat(10 - filled))
    }

    fn mini_bar(&self, score: f64) -> String {
        let filled = (score / 20.0).round().clamp(0.0, 5.0) as usize;
        format!("{}{}", "▰".repeat(filled), "▱".repeat(5 - filled))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bar_bounds() {
        let reporter = ConsoleReporter::new();
        assert_eq!(reporter.score_bar(100.0), format!("[{}]", "█".repeat(10)));
        assert_eq!(reporter.score_bar(0.0), format!("[{}]", "░".repeat(10)));
        // Half-filled bar keeps total width
        let bar = reporter.score_bar(50.0);
        assert_eq!(bar.chars().count(), 12);
    }

    #[test]
    fn mini_bar_bounds() {
        let reporter = ConsoleReporter::new();
        assert_eq!(reporter.mini_bar(100.0), "▰".repeat(5));
        assert_eq!(reporter.mini_bar(0.0), "▱".repeat(5));
    }
}
