use crate::error::BriefError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Markers and knobs driving the per-document pipeline.
///
/// The defaults match the EPA "Budget in Brief" series. A JSON file with any
/// subset of the fields can override them (missing fields keep the default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Tried in order; the first one that selects a page marks the table start.
    pub begin_patterns: Vec<String>,
    /// Marks the last page of the table.
    pub end_pattern: String,
    /// Matches at or before this page are treated as table-of-contents hits.
    pub early_page_limit: usize,
    /// Glob applied inside the input directory.
    pub file_pattern: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            begin_patterns: vec![
                "PROGRAM PROJECTS BY PROGRAM AREA".into(),
                "Projects by Program Area".into(),
            ],
            end_pattern: "TOTAL, EPA".into(),
            early_page_limit: 5,
            file_pattern: "*.pdf".into(),
        }
    }
}

/// Load a config from a JSON file.
pub fn load_config(path: &Path) -> Result<ScrapeConfig, BriefError> {
    let content = std::fs::read_to_string(path).map_err(|e| BriefError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: ScrapeConfig =
        serde_json::from_str(&content).map_err(|e| BriefError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a config can drive the pipeline.
pub fn validate_config(config: &ScrapeConfig) -> Result<(), BriefError> {
    if config.begin_patterns.is_empty() {
        return Err(BriefError::ConfigInvalid(
            "begin_patterns must not be empty".into(),
        ));
    }
    if config.begin_patterns.iter().any(|p| p.trim().is_empty()) {
        return Err(BriefError::ConfigInvalid(
            "begin patterns must not be blank".into(),
        ));
    }
    if config.end_pattern.trim().is_empty() {
        return Err(BriefError::ConfigInvalid(
            "end_pattern must not be blank".into(),
        ));
    }
    if config.file_pattern.trim().is_empty() {
        return Err(BriefError::ConfigInvalid(
            "file_pattern must not be blank".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = ScrapeConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.early_page_limit, 5);
        assert_eq!(config.end_pattern, "TOTAL, EPA");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"end_pattern": "TOTAL, AGENCY"}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.end_pattern, "TOTAL, AGENCY");
        assert_eq!(config.begin_patterns.len(), 2);
        assert_eq!(config.file_pattern, "*.pdf");
    }

    #[test]
    fn test_empty_begin_patterns_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"begin_patterns": []}}"#).unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, BriefError::ConfigInvalid(_)));
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, BriefError::ConfigLoad { .. }));
    }
}
