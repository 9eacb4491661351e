//! Rule to restrict tags to a configured allow-list.
//!
//! # Configuration
//!
//! - `tags`: allowed tag names, compared verbatim (default: `[]`)
//!
//! The default allows no tags at all: with an empty list every tag in the
//! document is reported.
//!
//! # Coverage
//!
//! The feature, each scenario and each scenario's examples tables are
//! checked. Diagnostics follow document order: feature tags first, then
//! every scenario followed by its examples.

use std::collections::HashSet;

use gherkin_lint_core::{
    ConfigError, Diagnostic, Feature, Rule, RuleContext, RuleOptions, TaggedNode,
};

/// Rule name for allowed-tags.
pub const NAME: &str = "allowed-tags";

/// Option key holding the allow-list.
const TAGS: &str = "tags";

/// Reports every tag whose name is not in the allow-list.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowedTags;

impl AllowedTags {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AllowedTags {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Only allows tags from the configured list"
    }

    fn available_configs(&self) -> RuleOptions {
        RuleOptions::new().with(TAGS, toml::Value::Array(Vec::new()))
    }

    fn validate_config(&self, configuration: &RuleOptions) -> Result<(), ConfigError> {
        let all_strings = configuration
            .get(TAGS)
            .and_then(toml::Value::as_array)
            .map_or(true, |tags| tags.iter().all(toml::Value::is_str));
        if all_strings {
            Ok(())
        } else {
            Err(ConfigError::InvalidOption {
                rule: NAME.to_string(),
                key: TAGS.to_string(),
                message: "every entry must be a string".to_string(),
            })
        }
    }

    fn run(
        &self,
        feature: Option<&Feature>,
        _context: &RuleContext,
        configuration: &RuleOptions,
    ) -> Vec<Diagnostic> {
        let Some(feature) = feature else {
            return Vec::new();
        };

        let allowed: HashSet<&str> = configuration.get_str_array(TAGS).into_iter().collect();
        let mut diagnostics = Vec::new();

        check_tags(feature, &allowed, &mut diagnostics);

        for scenario in feature.scenarios() {
            check_tags(scenario, &allowed, &mut diagnostics);

            for examples in scenario.examples.iter().flatten() {
                check_tags(examples, &allowed, &mut diagnostics);
            }
        }

        diagnostics
    }
}

fn check_tags(node: &impl TaggedNode, allowed: &HashSet<&str>, diagnostics: &mut Vec<Diagnostic>) {
    diagnostics.extend(
        node.tags()
            .iter()
            .filter(|tag| !allowed.contains(tag.name.as_str()))
            .map(|tag| {
                Diagnostic::new(
                    NAME,
                    tag.location.line,
                    format!("Not allowed tag {} on {}", tag.name, node.keyword()),
                )
            }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use gherkin_lint_core::{Examples, Scenario, Tag};
    use std::path::Path;

    fn run(feature: Option<&Feature>, allowed: &[&str]) -> Vec<Diagnostic> {
        let options = RuleOptions::new().with(TAGS, allowed.to_vec());
        let ctx = RuleContext::new(Path::new("test.feature.json"));
        AllowedTags::new().run(feature, &ctx, &options)
    }

    fn diag(line: u32, message: &str) -> Diagnostic {
        Diagnostic::new(NAME, line, message)
    }

    /// Feature @smoke, Scenario @wip with Examples @slow.
    fn outline() -> Feature {
        Feature::new("Feature")
            .with_tag(Tag::new("@smoke", 1))
            .with_scenario(
                Scenario::new("Scenario")
                    .with_tag(Tag::new("@wip", 4))
                    .with_examples(Examples::new("Examples").with_tag(Tag::new("@slow", 9))),
            )
    }

    #[test]
    fn absent_feature_yields_nothing() {
        assert!(run(None, &[]).is_empty());
    }

    #[test]
    fn reports_scenario_and_examples_tags() {
        let feature = outline();
        assert_eq!(
            run(Some(&feature), &["@smoke"]),
            vec![
                diag(4, "Not allowed tag @wip on Scenario"),
                diag(9, "Not allowed tag @slow on Examples"),
            ]
        );
    }

    #[test]
    fn empty_allow_list_reports_every_tag() {
        let feature = outline();
        assert_eq!(
            run(Some(&feature), &[]),
            vec![
                diag(1, "Not allowed tag @smoke on Feature"),
                diag(4, "Not allowed tag @wip on Scenario"),
                diag(9, "Not allowed tag @slow on Examples"),
            ]
        );
    }

    #[test]
    fn allowed_tags_are_silent() {
        let feature = outline();
        assert!(run(Some(&feature), &["@smoke", "@wip", "@slow"]).is_empty());
    }

    #[test]
    fn untagged_document_is_clean_under_any_config() {
        let feature = Feature::new("Feature").with_scenario(
            Scenario::new("Scenario Outline").with_examples(Examples::new("Examples")),
        );
        assert!(run(Some(&feature), &[]).is_empty());
        assert!(run(Some(&feature), &["@smoke"]).is_empty());
    }

    #[test]
    fn comparison_is_exact() {
        let feature = Feature::new("Feature")
            .with_tag(Tag::new("@Smoke", 1))
            .with_tag(Tag::new("smoke", 1))
            .with_tag(Tag::new("@smoke-test", 1));
        assert_eq!(run(Some(&feature), &["@smoke"]).len(), 3);
    }

    #[test]
    fn duplicate_tags_each_reported() {
        let feature = Feature::new("Feature")
            .with_tag(Tag::new("@wip", 1))
            .with_tag(Tag::new("@wip", 2));
        assert_eq!(
            run(Some(&feature), &[]),
            vec![
                diag(1, "Not allowed tag @wip on Feature"),
                diag(2, "Not allowed tag @wip on Feature"),
            ]
        );
    }

    #[test]
    fn duplicate_allow_list_entries_are_harmless() {
        let feature = outline();
        assert_eq!(run(Some(&feature), &["@smoke", "@smoke"]).len(), 2);
    }

    #[test]
    fn each_scenario_finishes_before_the_next() {
        let feature = Feature::new("Feature")
            .with_scenario(
                Scenario::new("Scenario Outline")
                    .with_tag(Tag::new("@a", 3))
                    .with_examples(Examples::new("Examples").with_tag(Tag::new("@b", 8)))
                    .with_examples(Examples::new("Examples").with_tag(Tag::new("@c", 12))),
            )
            .with_scenario(Scenario::new("Scenario").with_tag(Tag::new("@d", 15)));

        let lines: Vec<u32> = run(Some(&feature), &[]).iter().map(|d| d.line).collect();
        assert_eq!(lines, [3, 8, 12, 15]);
    }

    #[test]
    fn keyword_is_used_verbatim() {
        let feature = Feature::new("Fonctionnalité").with_scenario(
            Scenario::new("Plan du Scénario").with_tag(Tag::new("@wip", 3)),
        );
        assert_eq!(
            run(Some(&feature), &[]),
            vec![diag(3, "Not allowed tag @wip on Plan du Scénario")]
        );
    }

    #[test]
    fn run_is_repeatable() {
        let feature = outline();
        assert_eq!(run(Some(&feature), &["@smoke"]), run(Some(&feature), &["@smoke"]));
    }

    #[test]
    fn context_is_ignored() {
        let feature = outline();
        let options = AllowedTags.available_configs();
        let a = AllowedTags.run(Some(&feature), &RuleContext::new(Path::new("a")), &options);
        let b = AllowedTags.run(Some(&feature), &RuleContext::new(Path::new("b")), &options);
        assert_eq!(a, b);
    }

    #[test]
    fn declares_empty_tags_default() {
        let defaults = AllowedTags.available_configs();
        assert_eq!(defaults.get(TAGS), Some(&toml::Value::Array(Vec::new())));
        assert!(AllowedTags.validate_config(&defaults).is_ok());
    }

    #[test]
    fn rejects_non_string_entries() {
        let options = RuleOptions::new().with(TAGS, vec![toml::Value::Integer(1)]);
        let err = AllowedTags.validate_config(&options).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { .. }));
    }
}
