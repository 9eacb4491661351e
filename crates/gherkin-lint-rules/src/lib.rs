//! # gherkin-lint-rules
//!
//! Built-in lint rules for gherkin-lint.
//!
//! ## Available Rules
//!
//! | Name | Description |
//! |------|-------------|
//! | `allowed-tags` | Only allows tags from the configured list |
//!
//! ## Usage
//!
//! ```ignore
//! use gherkin_lint_core::Linter;
//! use gherkin_lint_rules::AllowedTags;
//!
//! let linter = Linter::builder()
//!     .rule(AllowedTags::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod allowed_tags;
mod registry;

pub use allowed_tags::AllowedTags;
pub use registry::{all_rules, find_rule};

/// Re-export core types for convenience.
pub use gherkin_lint_core::{Diagnostic, Rule, RuleBox};
