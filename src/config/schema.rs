//! Config schema and deserialization

use crate::standards::{QualityThresholds, StandardsOverride, StandardsProvider};
use serde::Deserialize;
use std::collections::HashMap;

/// Root config structure for .sheetlintrc.json
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum overall score (exit 1 if any template scores below)
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Exam type applied to templates that do not declare their own
    #[serde(default)]
    pub exam_type: Option<String>,

    /// Glob patterns for files/directories to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Custom template file suffixes (default: .template.json, .sheet.json)
    #[serde(default)]
    pub template_patterns: Vec<String>,

    /// Per-exam-type standards overrides, layered over the built-in presets
    #[serde(default)]
    pub standards: HashMap<String, StandardsOverride>,

    /// Grade thresholds override
    #[serde(default)]
    pub thresholds: Option<QualityThresholds>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<f64>, cli_exam_type: Option<String>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if cli_exam_type.is_some() {
            self.exam_type = cli_exam_type;
        }
        self
    }

    /// Merge another config into this one (for extends).
    /// This config's values win over the base.
    pub fn merge_from(&mut self, base: Config) {
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.exam_type.is_none() {
            self.exam_type = base.exam_type;
        }
        if self.thresholds.is_none() {
            self.thresholds = base.thresholds;
        }

        // Merge standards overrides (this config takes precedence per exam type)
        for (exam_type, ov) in base.standards {
            self.standards.entry(exam_type).or_insert(ov);
        }

        // Merge ignore patterns
        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        if self.template_patterns.is_empty() {
            self.template_patterns = base.template_patterns;
        }
    }

    /// Get template file suffixes to match during discovery
    pub fn get_template_patterns(&self) -> Vec<&str> {
        if self.template_patterns.is_empty() {
            vec![".template.json", ".sheet.json"]
        } else {
            self.template_patterns.iter().map(|s| s.as_str()).collect()
        }
    }

    /// Build a standards provider carrying this config's overrides
    pub fn standards_provider(&self) -> StandardsProvider {
        let mut provider = StandardsProvider::new();
        for (exam_type, ov) in &self.standards {
            provider = provider.with_override(exam_type.clone(), ov.clone());
        }
        if let Some(thresholds) = self.thresholds {
            provider = provider.with_thresholds(thresholds);
        }
        provider
    }
}
