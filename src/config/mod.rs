//! Configuration loading for Sheetlint

mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".sheetlintrc.json";

/// Find and load config file with extends resolution. Searches current
/// directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => load_config_with_extends(&path, &mut HashSet::new()),
        None => Ok(Config::default()),
    }
}

/// Load a config file and resolve its extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    // Prevent circular extends
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if visited.contains(&canonical) {
        anyhow::bail!(
            "Circular extends detected in config: {}",
            config_path.display()
        );
    }
    visited.insert(canonical);

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    if let Some(extends) = config.extends.take() {
        let config_dir = config_path.parent().unwrap_or(Path::new("."));
        let extends_path = if Path::new(&extends).is_absolute() {
            PathBuf::from(&extends)
        } else {
            config_dir.join(&extends)
        };
        let extends_path = if extends_path.extension().is_none() {
            extends_path.with_extension("json")
        } else {
            extends_path
        };
        if !extends_path.exists() {
            anyhow::bail!(
                "Extended config not found: {} (referenced from {})",
                extends_path.display(),
                config_path.display()
            );
        }
        let base_config = load_config_with_extends(&extends_path, visited)?;
        config.merge_from(base_config);
    }

    Ok(config)
}

/// Search for .sheetlintrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Build a GlobSet from ignore patterns for path matching
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Check if a path should be ignored based on config glob patterns
pub fn is_ignored(path: &Path, ignore_set: &GlobSet) -> bool {
    ignore_set.is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert!(config.threshold.is_none());
        assert!(config.standards.is_empty());
    }

    #[test]
    fn is_ignored_matches_globs() {
        let set = build_ignore_set(&["**/drafts/**".to_string()]).unwrap();
        assert!(is_ignored(Path::new("a/drafts/x.template.json"), &set));
        assert!(!is_ignored(Path::new("a/final/x.template.json"), &set));
    }

    #[test]
    fn config_extends_chain() {
        let dir = TempDir::new().unwrap();

        let base_path = dir.path().join("base.json");
        let mut base_file = fs::File::create(&base_path).unwrap();
        writeln!(
            base_file,
            r#"{{
                "threshold": 70,
                "examType": "quickQuiz",
                "ignore": ["**/legacy/**"]
            }}"#
        )
        .unwrap();

        let child_path = dir.path().join(CONFIG_FILENAME);
        let mut child_file = fs::File::create(&child_path).unwrap();
        writeln!(
            child_file,
            r#"{{
                "extends": "./base.json",
                "threshold": 80
            }}"#
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        // Child threshold overrides base
        assert_eq!(config.threshold, Some(80.0));
        // Base examType inherited
        assert_eq!(config.exam_type.as_deref(), Some("quickQuiz"));
        // Base ignore inherited
        assert!(config.ignore.contains(&"**/legacy/**".to_string()));
    }

    #[test]
    fn circular_extends_detected() {
        let dir = TempDir::new().unwrap();

        let a_path = dir.path().join("a.json");
        let b_path = dir.path().join("b.json");
        fs::write(&a_path, r#"{"extends": "./b.json"}"#).unwrap();
        fs::write(&b_path, r#"{"extends": "./a.json"}"#).unwrap();

        let err = load_config_with_extends(&a_path, &mut HashSet::new()).unwrap_err();
        assert!(err.to_string().contains("Circular extends"));
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let result = load_config(dir.path(), Some(Path::new("nope.json")));
        assert!(result.is_err());
    }
}
