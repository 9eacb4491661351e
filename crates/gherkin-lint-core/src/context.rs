//! Invocation context passed to every rule.

use std::path::Path;

/// Cross-rule invocation state shared by all rules for one document.
///
/// Part of the uniform rule signature. Rules that need nothing from it
/// take it and ignore it.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Path of the document being linted.
    pub file: &'a Path,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for the given document path.
    #[must_use]
    pub fn new(file: &'a Path) -> Self {
        Self { file }
    }
}
