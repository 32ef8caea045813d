//! Summary compliance flags.
//!
//! Each flag is a conjunction of facts the category rules already evaluate,
//! derived from the same inputs so the flags cannot drift from the issues.

use crate::standards::OmrStandards;
use crate::{Compliance, Region, RegionType, TemplateConfig};

/// Derives the three informational booleans
pub struct ComplianceChecker;

impl ComplianceChecker {
    pub fn check(
        regions: &[Region],
        template: &TemplateConfig,
        standards: &OmrStandards,
    ) -> Compliance {
        let has_positioning = regions.iter().any(|r| r.kind == RegionType::Positioning);
        let dpi_ok = template.dpi >= standards.print.min_dpi;
        let page_ok = template.page_size.is_valid();

        Compliance {
            omr_standard: has_positioning && !regions.is_empty(),
            print_ready: dpi_ok && page_ok,
            scan_optimized: has_positioning && dpi_ok,
        }
    }
}
