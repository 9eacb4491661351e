//! The rule contract shared by every lint rule.

use crate::config::{ConfigError, RuleOptions};
use crate::context::RuleContext;
use crate::document::Feature;
use crate::types::Diagnostic;

/// A lint rule over a Gherkin document tree.
///
/// Every rule is invoked with the same three arguments: the document root,
/// the invocation context and the rule's merged configuration. A rule that
/// has no use for one of them still takes it.
///
/// `run` must be a pure function of its inputs: no I/O, no retained state,
/// and diagnostics in a deterministic order.
///
/// # Example
///
/// ```ignore
/// use gherkin_lint_core::{Diagnostic, Feature, Rule, RuleContext, RuleOptions};
///
/// pub struct NoUntitledFeature;
///
/// impl Rule for NoUntitledFeature {
///     fn name(&self) -> &'static str { "no-untitled-feature" }
///
///     fn run(
///         &self,
///         feature: Option<&Feature>,
///         _context: &RuleContext,
///         _configuration: &RuleOptions,
///     ) -> Vec<Diagnostic> {
///         match feature {
///             Some(f) if f.name.is_empty() => vec![Diagnostic::new(
///                 self.name(),
///                 f.location.map_or(1, |l| l.line),
///                 "Missing Feature name",
///             )],
///             _ => Vec::new(),
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "allowed-tags").
    ///
    /// Used as the configuration key and stamped on every diagnostic.
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Declares the options this rule accepts, with their defaults.
    fn available_configs(&self) -> RuleOptions {
        RuleOptions::new()
    }

    /// Checks option values beyond their TOML type.
    ///
    /// Called once by the linter on the merged options, before any `run`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] for values the rule cannot use.
    fn validate_config(&self, _configuration: &RuleOptions) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Checks a document and returns the violations found.
    ///
    /// # Arguments
    ///
    /// * `feature` - Document root; `None` for an empty feature file
    /// * `context` - Shared invocation state
    /// * `configuration` - Options merged over [`Rule::available_configs`]
    fn run(
        &self,
        feature: Option<&Feature>,
        context: &RuleContext,
        configuration: &RuleOptions,
    ) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
