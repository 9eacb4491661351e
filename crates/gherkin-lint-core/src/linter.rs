//! Orchestrates rule execution over Gherkin documents.

use crate::config::{Config, ConfigError, RuleOptions};
use crate::context::RuleContext;
use crate::document::{DocumentError, GherkinDocument};
use crate::rule::{Rule, RuleBox};
use crate::types::{FileReport, LintResult, Severity, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while building a linter or loading documents.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum LintError {
    /// A rule's configuration was rejected.
    #[error(transparent)]
    #[diagnostic(
        code(gherkin_lint::config),
        help("run `gherkin-lint list-rules` to see each rule's options")
    )]
    Config(#[from] ConfigError),

    /// A document could not be loaded.
    #[error(transparent)]
    #[diagnostic(
        code(gherkin_lint::document),
        help("documents must be Gherkin ASTs in JSON form, with a `tags` array on every tagged node")
    )]
    Document(#[from] DocumentError),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the linter.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter, validating each enabled rule's options once.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule's options are unknown, mistyped or
    /// rejected by the rule.
    pub fn build(self) -> Result<Linter, LintError> {
        let config = self.config.unwrap_or_default();

        for name in config.rules.keys() {
            if !self.rules.iter().any(|r| r.name() == name) {
                warn!("Configuration for unknown rule: {}", name);
            }
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            let name = rule.name();
            if !config.is_rule_enabled(name) {
                debug!("Skipping disabled rule: {}", name);
                continue;
            }

            let options =
                RuleOptions::merge(name, &rule.available_configs(), &config.rule_options(name))?;
            rule.validate_config(&options)?;

            rules.push(ConfiguredRule {
                severity: config.rule_severity(name),
                options,
                rule,
            });
        }

        Ok(Linter { rules })
    }
}

/// A rule bound to its validated options and severity.
struct ConfiguredRule {
    rule: RuleBox,
    options: RuleOptions,
    severity: Severity,
}

/// Runs configured rules over documents.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    rules: Vec<ConfiguredRule>,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the merged options an enabled rule runs with.
    #[must_use]
    pub fn rule_options(&self, rule_name: &str) -> Option<&RuleOptions> {
        self.rules
            .iter()
            .find(|r| r.rule.name() == rule_name)
            .map(|r| &r.options)
    }

    /// Lints an already loaded document.
    ///
    /// Violations are grouped by rule, in registration order, each rule's
    /// diagnostics kept in the order the rule returned them.
    #[must_use]
    pub fn lint_document(&self, document: &GherkinDocument, path: &Path) -> FileReport {
        let ctx = RuleContext::new(path);
        let feature = document.feature.as_ref();
        let mut report = FileReport::new(path);

        for configured in &self.rules {
            let diagnostics = configured.rule.run(feature, &ctx, &configured.options);
            report
                .violations
                .extend(diagnostics.into_iter().map(|diagnostic| Violation {
                    severity: configured.severity,
                    diagnostic,
                }));
        }

        report
    }

    /// Loads and lints a single document file.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or is malformed.
    pub fn lint_file(&self, path: &Path) -> Result<FileReport, LintError> {
        debug!("Linting: {}", path.display());
        let document = GherkinDocument::from_file(path)?;
        Ok(self.lint_document(&document, path))
    }

    /// Lints every given document file.
    ///
    /// # Errors
    ///
    /// Returns the first load error; no partial result is returned.
    pub fn lint_files(&self, paths: &[PathBuf]) -> Result<LintResult, LintError> {
        info!(
            "Linting {} document(s) with {} rule(s)",
            paths.len(),
            self.rules.len()
        );

        let mut result = LintResult::new();
        for path in paths {
            result.push(self.lint_file(path)?);
        }

        let (errors, warnings) = result.count_by_severity();
        info!(
            "Lint complete: {} error(s), {} warning(s) in {} file(s)",
            errors, warnings, result.files_checked
        );

        Ok(result)
    }
}
