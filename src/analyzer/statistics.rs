//! Region statistics: pure aggregation, no thresholds, cannot fail.

use crate::analyzer::ScoreCalculator;
use crate::{Region, Statistics, TemplateConfig};
use std::collections::BTreeMap;

/// Aggregates region counts, page coverage, and density
pub struct StatisticsCalculator;

impl StatisticsCalculator {
    pub fn calculate(regions: &[Region], template: &TemplateConfig) -> Statistics {
        let mut regions_by_type: BTreeMap<_, usize> = BTreeMap::new();
        for region in regions {
            *regions_by_type.entry(region.kind).or_insert(0) += 1;
        }

        let page_area = template.page_size.area();
        let (coverage, density) = if page_area > 0.0 {
            let covered: f64 = regions.iter().map(Region::area).sum();
            // Coverage is deliberately not clipped at 100: overlapping or
            // out-of-bounds regions pushing it past 100 is itself diagnostic
            let coverage = ScoreCalculator::round2(covered / page_area * 100.0);
            // Fixed scale: regions per 10,000 mm2 of page (one square
            // decimeter; page dimensions are mm)
            let density = ScoreCalculator::round2(regions.len() as f64 / page_area * 10_000.0);
            (coverage, density)
        } else {
            (0.0, 0.0)
        };

        Statistics {
            total_regions: regions.len(),
            regions_by_type,
            coverage,
            density,
        }
    }
}
