//! # gherkin-lint-core
//!
//! Core framework for linting Gherkin feature documents.
//!
//! This crate provides the foundational traits and types for building
//! feature-file linters. It includes:
//!
//! - [`GherkinDocument`] and friends, the read-only document tree
//! - [`Rule`] trait, the uniform `(document, context, configuration)` contract
//! - [`Linter`] for orchestrating rule execution
//! - [`Diagnostic`] for representing rule findings
//!
//! ## Example
//!
//! ```ignore
//! use gherkin_lint_core::{Config, Linter};
//!
//! let linter = Linter::builder()
//!     .rule(MyRule::new())
//!     .config(Config::from_file("gherkin-lint.toml".as_ref())?)
//!     .build()?;
//!
//! let result = linter.lint_files(&files)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod document;
mod linter;
mod rule;
mod types;

pub use config::{Config, ConfigError, LinterConfig, RuleConfig, RuleOptions};
pub use context::RuleContext;
pub use document::{
    Background, DocumentError, Examples, Feature, FeatureChild, GherkinDocument, Location, RuleBlock,
    Scenario, Tag, TaggedNode,
};
pub use linter::{LintError, Linter, LinterBuilder};
pub use rule::{Rule, RuleBox};
pub use types::{Diagnostic, FileReport, LintResult, Severity, Violation};
