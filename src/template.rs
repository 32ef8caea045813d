//! Template document loading
//!
//! Templates are JSON files produced by the layout editor. Loading is
//! tolerant of data-quality problems (unknown region types, missing
//! properties, absent dpi) - those degrade scores downstream - but an
//! unreadable file or a document whose `regions` is not an array is a
//! contract violation and fails fast with a typed error.

use crate::{Region, TemplateConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised at the template I/O boundary
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid template JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A template file: page description plus the placed regions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exam-type preset to resolve standards against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<String>,
    #[serde(default)]
    pub page_size: crate::PageSize,
    #[serde(default)]
    pub dpi: f64,
    pub regions: Vec<Region>,
}

impl TemplateDocument {
    /// The page-level config the engine consumes
    pub fn config(&self) -> TemplateConfig {
        TemplateConfig {
            page_size: self.page_size,
            dpi: self.dpi,
        }
    }
}

/// Load and parse a template document from disk
pub fn load_template(path: &Path) -> Result<TemplateDocument, TemplateError> {
    let content = fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_template(&content).map_err(|source| TemplateError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a template document from a JSON string
pub fn parse_template(content: &str) -> Result<TemplateDocument, serde_json::Error> {
    serde_json::from_str(content)
}
