//! OMR scanning standards and grade thresholds
//!
//! Standards are plain immutable values: the provider layers built-in
//! exam-type presets and config-file overrides over the defaults and always
//! resolves to fully concrete values. There is no shared mutable state, so
//! tests can construct arbitrary providers without touching globals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Requirements on positioning marks
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningStandards {
    /// Minimum number of positioning marks on the page
    pub min_count: usize,
    /// Max allowed distance (mm) from a mark to its nearest page corner
    pub corner_distance: f64,
}

/// Requirements on bubble/choice zones
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleStandards {
    /// Minimum center-to-center distance (mm) between any two regions
    pub min_spacing: f64,
    /// Minimum bubble width (mm)
    pub min_width: f64,
    /// Minimum bubble height (mm)
    pub min_height: f64,
}

/// Minimum distance of a region's top-left corner from each page edge (mm)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginStandards {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Print constraints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintStandards {
    pub min_dpi: f64,
}

/// Complete OMR scanning standard; never mutated at runtime
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmrStandards {
    pub positioning: PositioningStandards,
    pub bubble: BubbleStandards,
    pub margins: MarginStandards,
    pub print: PrintStandards,
}

impl Default for OmrStandards {
    fn default() -> Self {
        Self {
            positioning: PositioningStandards {
                min_count: 3,
                corner_distance: 15.0,
            },
            bubble: BubbleStandards {
                min_spacing: 5.0,
                min_width: 4.0,
                min_height: 4.0,
            },
            margins: MarginStandards {
                top: 10.0,
                right: 10.0,
                bottom: 10.0,
                left: 10.0,
            },
            print: PrintStandards { min_dpi: 300.0 },
        }
    }
}

/// Grade cutoffs partitioning the 0-100 score space into contiguous bands.
/// Invariant: `excellent > good > acceptable`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityThresholds {
    pub excellent: f64,
    pub good: f64,
    pub acceptable: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        // Matches the fixed display bands in grade_badge()
        Self {
            excellent: 90.0,
            good: 70.0,
            acceptable: 50.0,
        }
    }
}

/// Partial override for `OmrStandards`; every field optional so config
/// files and presets only state what they change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsOverride {
    #[serde(default)]
    pub positioning: PositioningOverride,
    #[serde(default)]
    pub bubble: BubbleOverride,
    #[serde(default)]
    pub margins: MarginsOverride,
    #[serde(default)]
    pub print: PrintOverride,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningOverride {
    #[serde(default)]
    pub min_count: Option<usize>,
    #[serde(default)]
    pub corner_distance: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleOverride {
    #[serde(default)]
    pub min_spacing: Option<f64>,
    #[serde(default)]
    pub min_width: Option<f64>,
    #[serde(default)]
    pub min_height: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginsOverride {
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
    #[serde(default)]
    pub left: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOverride {
    #[serde(default)]
    pub min_dpi: Option<f64>,
}

impl StandardsOverride {
    /// Apply this override on top of a concrete base. Unset fields keep the
    /// base value, so the result is always fully concrete.
    pub fn apply(&self, base: OmrStandards) -> OmrStandards {
        OmrStandards {
            positioning: PositioningStandards {
                min_count: self
                    .positioning
                    .min_count
                    .unwrap_or(base.positioning.min_count),
                corner_distance: self
                    .positioning
                    .corner_distance
                    .unwrap_or(base.positioning.corner_distance),
            },
            bubble: BubbleStandards {
                min_spacing: self.bubble.min_spacing.unwrap_or(base.bubble.min_spacing),
                min_width: self.bubble.min_width.unwrap_or(base.bubble.min_width),
                min_height: self.bubble.min_height.unwrap_or(base.bubble.min_height),
            },
            margins: MarginStandards {
                top: self.margins.top.unwrap_or(base.margins.top),
                right: self.margins.right.unwrap_or(base.margins.right),
                bottom: self.margins.bottom.unwrap_or(base.margins.bottom),
                left: self.margins.left.unwrap_or(base.margins.left),
            },
            print: PrintStandards {
                min_dpi: self.print.min_dpi.unwrap_or(base.print.min_dpi),
            },
        }
    }
}

/// Fully resolved configuration for one analysis run
#[derive(Debug, Clone, Copy)]
pub struct ResolvedStandards {
    pub standards: OmrStandards,
    pub thresholds: QualityThresholds,
}

/// Resolves standards and thresholds for an exam type.
///
/// Resolution order: defaults, then built-in preset matching the exam type,
/// then a config-supplied override for that exam type. Unknown exam types
/// fall back to defaults with no error.
#[derive(Debug, Clone, Default)]
pub struct StandardsProvider {
    overrides: HashMap<String, StandardsOverride>,
    thresholds: Option<QualityThresholds>,
}

impl StandardsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a per-exam-type override (from config)
    pub fn with_override(mut self, exam_type: impl Into<String>, ov: StandardsOverride) -> Self {
        self.overrides.insert(exam_type.into(), ov);
        self
    }

    /// Replace the grade thresholds (from config)
    pub fn with_thresholds(mut self, thresholds: QualityThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Resolve concrete standards and thresholds. Deterministic for a given
    /// exam type; pure, no I/O.
    pub fn resolve(&self, exam_type: Option<&str>) -> ResolvedStandards {
        let mut standards = OmrStandards::default();
        if let Some(kind) = exam_type {
            if let Some(preset) = builtin_preset(kind) {
                standards = preset.apply(standards);
            }
            if let Some(ov) = self.overrides.get(kind) {
                standards = ov.apply(standards);
            }
        }
        ResolvedStandards {
            standards,
            thresholds: self.thresholds.unwrap_or_default(),
        }
    }
}

/// Built-in exam-type presets layered over the defaults
fn builtin_preset(exam_type: &str) -> Option<StandardsOverride> {
    match exam_type {
        // High-stakes exams: stricter geometry, archival print quality
        "highStakes" => Some(StandardsOverride {
            positioning: PositioningOverride {
                min_count: Some(4),
                corner_distance: Some(10.0),
            },
            bubble: BubbleOverride {
                min_spacing: Some(6.0),
                ..BubbleOverride::default()
            },
            print: PrintOverride {
                min_dpi: Some(600.0),
            },
            ..StandardsOverride::default()
        }),
        // In-class quizzes: relaxed, office-printer friendly
        "quickQuiz" => Some(StandardsOverride {
            positioning: PositioningOverride {
                min_count: Some(2),
                ..PositioningOverride::default()
            },
            bubble: BubbleOverride {
                min_spacing: Some(4.0),
                ..BubbleOverride::default()
            },
            print: PrintOverride {
                min_dpi: Some(150.0),
            },
            ..StandardsOverride::default()
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_concrete() {
        let resolved = StandardsProvider::new().resolve(None);
        assert_eq!(resolved.standards.positioning.min_count, 3);
        assert_eq!(resolved.standards.positioning.corner_distance, 15.0);
        assert_eq!(resolved.standards.bubble.min_spacing, 5.0);
        assert_eq!(resolved.standards.print.min_dpi, 300.0);
        assert_eq!(resolved.thresholds.excellent, 90.0);
        assert_eq!(resolved.thresholds.good, 70.0);
        assert_eq!(resolved.thresholds.acceptable, 50.0);
    }

    #[test]
    fn unknown_exam_type_falls_back_to_defaults() {
        let provider = StandardsProvider::new();
        let default = provider.resolve(None);
        let unknown = provider.resolve(Some("midterm-2031"));
        assert_eq!(
            unknown.standards.positioning.min_count,
            default.standards.positioning.min_count
        );
        assert_eq!(
            unknown.standards.print.min_dpi,
            default.standards.print.min_dpi
        );
    }

    #[test]
    fn high_stakes_preset_tightens_standards() {
        let resolved = StandardsProvider::new().resolve(Some("highStakes"));
        assert_eq!(resolved.standards.positioning.min_count, 4);
        assert_eq!(resolved.standards.positioning.corner_distance, 10.0);
        assert_eq!(resolved.standards.bubble.min_spacing, 6.0);
        assert_eq!(resolved.standards.print.min_dpi, 600.0);
        // Unspecified fields keep defaults
        assert_eq!(resolved.standards.margins.left, 10.0);
        assert_eq!(resolved.standards.bubble.min_width, 4.0);
    }

    #[test]
    fn quick_quiz_preset_relaxes_standards() {
        let resolved = StandardsProvider::new().resolve(Some("quickQuiz"));
        assert_eq!(resolved.standards.positioning.min_count, 2);
        assert_eq!(resolved.standards.print.min_dpi, 150.0);
        // corner distance untouched by the preset
        assert_eq!(resolved.standards.positioning.corner_distance, 15.0);
    }

    #[test]
    fn config_override_layers_over_preset() {
        let ov = StandardsOverride {
            print: PrintOverride {
                min_dpi: Some(1200.0),
            },
            ..StandardsOverride::default()
        };
        let provider = StandardsProvider::new().with_override("highStakes", ov);
        let resolved = provider.resolve(Some("highStakes"));
        // Override wins over the preset
        assert_eq!(resolved.standards.print.min_dpi, 1200.0);
        // Preset fields it didn't touch survive
        assert_eq!(resolved.standards.positioning.min_count, 4);
    }

    #[test]
    fn override_deserializes_partially() {
        let ov: StandardsOverride =
            serde_json::from_str(r#"{"print": {"minDpi": 450}}"#).unwrap();
        let standards = ov.apply(OmrStandards::default());
        assert_eq!(standards.print.min_dpi, 450.0);
        assert_eq!(standards.positioning.min_count, 3);
    }

    #[test]
    fn custom_thresholds_resolve() {
        let provider = StandardsProvider::new().with_thresholds(QualityThresholds {
            excellent: 95.0,
            good: 80.0,
            acceptable: 60.0,
        });
        let resolved = provider.resolve(None);
        assert_eq!(resolved.thresholds.excellent, 95.0);
    }
}
