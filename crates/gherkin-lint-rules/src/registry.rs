//! Lookup of the built-in rules by name.

use crate::AllowedTags;
use gherkin_lint_core::RuleBox;

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(AllowedTags::new())]
}

/// Returns the rule with the given name, if it exists.
#[must_use]
pub fn find_rule(name: &str) -> Option<RuleBox> {
    all_rules().into_iter().find(|r| r.name() == name)
}
