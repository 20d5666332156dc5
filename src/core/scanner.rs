use crate::config::toml_config::ScanConfig;
use crate::core::notebook::Notebook;
use crate::domain::model::{Finding, KeywordRule, Match};
use crate::domain::ports::Storage;
use crate::utils::error::{DetectError, Result};
use regex::Regex;
use std::path::Path;

/// Finds keyword occurrences in Python sources and notebooks. Matching is
/// case-insensitive and bounded by word boundaries, so `pandas_utils` or
/// `mynumpy` never match. Both word boundaries and case folding are
/// ASCII-only: `épandas` matches, `pandaſ` does not.
#[derive(Debug, Clone)]
pub struct KeywordScanner {
    patterns: Vec<(KeywordRule, Regex)>,
    config: ScanConfig,
}

impl KeywordScanner {
    pub fn new(rules: Vec<KeywordRule>) -> Result<Self> {
        Self::from_config(&ScanConfig {
            keywords: rules,
            ..ScanConfig::default()
        })
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let patterns = config
            .keywords
            .iter()
            .map(|rule| -> Result<(KeywordRule, Regex)> {
                let regex = Regex::new(&format!(r"(?i-u:\b{}\b)", regex::escape(&rule.name)))?;
                Ok((rule.clone(), regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            config: config.clone(),
        })
    }

    /// All matches in `text`, ordered by position.
    pub fn scan_text(&self, text: &str) -> Vec<Match> {
        let line_starts: Vec<usize> = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(index, _)| index + 1))
            .collect();

        let mut located: Vec<(usize, Match)> = Vec::new();
        for (rule, regex) in &self.patterns {
            for found in regex.find_iter(text) {
                let line_index = line_starts.partition_point(|&start| start <= found.start()) - 1;
                let line_start = line_starts[line_index];
                let column = text[line_start..found.start()].chars().count() + 1;

                located.push((
                    found.start(),
                    Match {
                        keyword: rule.name.clone(),
                        matched: found.as_str().to_string(),
                        line: line_index + 1,
                        column,
                        message: rule.message.clone(),
                    },
                ));
            }
        }

        located.sort_by_key(|(offset, _)| *offset);
        located.into_iter().map(|(_, found)| found).collect()
    }

    /// Scans one file. Notebooks are scanned cell by cell, and only code
    /// cells are considered.
    pub fn scan_file<S: Storage>(&self, storage: &S, path: &Path) -> Result<Vec<Finding>> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        if !self.config.accepts_extension(extension) {
            return Err(DetectError::UnsupportedFileError {
                path: path.display().to_string(),
            });
        }

        let display_path = path.display().to_string();
        let findings: Vec<Finding> = if extension == "ipynb" {
            let notebook = Notebook::from_file(storage, path)?;
            notebook
                .code_cells()
                .flat_map(|(index, cell)| {
                    self.scan_text(&cell.source.text())
                        .into_iter()
                        .map(move |occurrence| (index, occurrence))
                })
                .map(|(index, occurrence)| Finding {
                    path: display_path.clone(),
                    cell: Some(index),
                    occurrence,
                })
                .collect()
        } else {
            let text = storage.read_to_string(path)?;
            self.scan_text(&text)
                .into_iter()
                .map(|occurrence| Finding {
                    path: display_path.clone(),
                    cell: None,
                    occurrence,
                })
                .collect()
        };

        tracing::debug!(path = %display_path, findings = findings.len(), "file scanned");
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::domain::model::Keyword;
    use tempfile::TempDir;

    fn default_scanner() -> KeywordScanner {
        KeywordScanner::new(Keyword::ALL.into_iter().map(KeywordRule::from).collect()).unwrap()
    }

    #[test]
    fn test_scan_text_positions() {
        let text = "import pandas as pd\nimport numpy as np\n\nx = Pandas.DataFrame()\n";
        let matches = default_scanner().scan_text(text);

        let positions: Vec<(&str, usize, usize)> = matches
            .iter()
            .map(|m| (m.matched.as_str(), m.line, m.column))
            .collect();
        assert_eq!(positions, vec![("pandas", 1, 8), ("numpy", 2, 8), ("Pandas", 4, 5)]);
        assert_eq!(matches[0].message, "Librairie **pandas** détectée.");
        assert_eq!(matches[2].keyword, "pandas");
    }

    #[test]
    fn test_scan_text_respects_word_boundaries() {
        let text = "import pandas_utils\nmynumpy = 1\nfrom numpy.linalg import norm\n";
        let matches = default_scanner().scan_text(text);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].keyword, "numpy");
        assert_eq!((matches[0].line, matches[0].column), (3, 6));
    }

    #[test]
    fn test_columns_count_characters() {
        let matches = default_scanner().scan_text("# données: numpy");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].column, 12);
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        let matches = default_scanner().scan_text("x = épandas");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].matched, "pandas");
        assert_eq!(matches[0].column, 6);
    }

    #[test]
    fn test_case_folding_is_ascii() {
        assert!(default_scanner().scan_text("pandaſ").is_empty());
        assert_eq!(default_scanner().scan_text("NUMPY").len(), 1);
    }

    #[test]
    fn test_rule_names_are_escaped() {
        let scanner = KeywordScanner::new(vec![KeywordRule {
            name: "scikit.learn".to_string(),
            message: "sk".to_string(),
        }])
        .unwrap();
        assert_eq!(scanner.scan_text("scikit.learn").len(), 1);
        assert!(scanner.scan_text("scikitXlearn").is_empty());
    }

    #[test]
    fn test_scan_notebook_reports_cells() {
        let temp_dir = TempDir::new().unwrap();
        let notebook = r#"{
            "cells": [
                {"cell_type": "markdown", "source": ["numpy in prose is ignored"]},
                {"cell_type": "code", "source": ["import numpy as np\n", "import pandas"]}
            ]
        }"#;
        std::fs::write(temp_dir.path().join("nb.ipynb"), notebook).unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        let findings = default_scanner().scan_file(&storage, Path::new("nb.ipynb")).unwrap();

        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.cell == Some(1)));
        assert_eq!(findings[1].occurrence.line, 2);
        assert_eq!(findings[1].to_string(), "nb.ipynb[cell 1]:2:8: Librairie **pandas** détectée.");
    }

    #[test]
    fn test_scan_rejects_other_extensions() {
        let storage = LocalStorage::default();
        let result = default_scanner().scan_file(&storage, Path::new("notes.txt"));
        assert!(matches!(result, Err(DetectError::UnsupportedFileError { .. })));
    }

    #[test]
    fn test_scan_honours_configured_extensions() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.py"), "import pandas\n").unwrap();

        let config = ScanConfig {
            extensions: vec!["ipynb".to_string()],
            ..ScanConfig::default()
        };
        let scanner = KeywordScanner::from_config(&config).unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert!(scanner.scan_file(&storage, Path::new("a.py")).is_err());
    }
}
