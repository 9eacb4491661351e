//! Core types for rule diagnostics and lint results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity assigned to a rule's diagnostics by the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, but does not fail the run.
    Warning,
    /// Must be fixed.
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One rule violation, as returned by [`Rule::run`](crate::Rule::run).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable message.
    pub message: String,
    /// Name of the rule that produced it (e.g., "allowed-tags").
    pub rule: String,
    /// Source line (1-indexed).
    pub line: u32,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(rule: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rule: rule.into(),
            line,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.line, self.message, self.rule)
    }
}

/// A diagnostic together with the severity configured for its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Configured severity.
    pub severity: Severity,
    /// The rule's diagnostic.
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

/// All violations found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the linted document.
    pub file: PathBuf,
    /// Violations in rule-registration order.
    pub violations: Vec<Violation>,
}

impl FileReport {
    /// Creates an empty report for a file.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            violations: Vec::new(),
        }
    }

    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Result of linting a set of documents.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// One report per linted document, clean ones included.
    pub reports: Vec<FileReport>,
    /// Number of documents linted.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the report of one document.
    pub fn push(&mut self, report: FileReport) {
        self.reports.push(report);
        self.files_checked += 1;
    }

    /// Iterates over every violation with the file it belongs to.
    pub fn violations(&self) -> impl Iterator<Item = (&PathBuf, &Violation)> {
        self.reports
            .iter()
            .flat_map(|r| r.violations.iter().map(move |v| (&r.file, v)))
    }

    /// Returns true if no document has violations.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.reports.iter().all(FileReport::is_clean)
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations()
            .any(|(_, v)| v.severity == Severity::Error)
    }

    /// Counts violations as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.violations()
            .fold((0, 0), |(errors, warnings), (_, v)| match v.severity {
                Severity::Error => (errors + 1, warnings),
                Severity::Warning => (errors, warnings + 1),
            })
    }
}
