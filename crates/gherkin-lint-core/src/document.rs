//! Read-only Gherkin document tree.
//!
//! The tree is produced by an external Gherkin parser and handed to the
//! linter as JSON (the camelCase AST shape emitted by the reference
//! parsers). This module only deserializes it; it never parses `.feature`
//! text.
//!
//! Every tag-bearing node requires a `tags` array. A node without one is a
//! malformed document and fails to load with [`DocumentError::Json`]
//! instead of being treated as untagged.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while loading a document tree.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// IO error reading a document file.
    #[error("Failed to read document {path}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The JSON does not match the Gherkin AST shape.
    #[error("Malformed Gherkin document: {0}")]
    Json(serde_json::Error),
}

/// Root of a parsed feature file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GherkinDocument {
    /// Source URI reported by the parser, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// The feature. Absent for an empty feature file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
}

impl GherkinDocument {
    /// Parses a document from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Json`] if the input is not a well-formed tree.
    pub fn from_json(content: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(content).map_err(DocumentError::Json)
    }

    /// Loads a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }
}

/// Source position of a node or tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed), when the parser reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl Location {
    /// Creates a location on the given line.
    #[must_use]
    pub fn line(line: u32) -> Self {
        Self { line, column: None }
    }
}

/// A tag annotation such as `@smoke`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Literal tag text, including the leading `@`.
    pub name: String,
    /// Where the tag occurs.
    pub location: Location,
}

impl Tag {
    /// Creates a tag on the given line.
    #[must_use]
    pub fn new(name: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            location: Location::line(line),
        }
    }
}

/// Shared read interface of the nodes that carry tags.
pub trait TaggedNode {
    /// Keyword as written in the source (e.g. "Feature", "Scenario Outline").
    fn keyword(&self) -> &str;

    /// Tags in source order; empty when the node is untagged.
    fn tags(&self) -> &[Tag];
}

/// The root `Feature:` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Node keyword.
    pub keyword: String,
    /// Feature title.
    #[serde(default)]
    pub name: String,
    /// Tags on the feature.
    pub tags: Vec<Tag>,
    /// Backgrounds, scenarios and rule blocks in document order.
    #[serde(default)]
    pub children: Vec<FeatureChild>,
    /// Position of the keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Feature {
    /// Creates an empty feature with the given keyword.
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: String::new(),
            tags: Vec::new(),
            children: Vec::new(),
            location: None,
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Appends a scenario child.
    #[must_use]
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.children.push(FeatureChild::Scenario(scenario));
        self
    }

    /// Iterates over the direct scenario children, skipping backgrounds
    /// and rule blocks.
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.children.iter().filter_map(FeatureChild::as_scenario)
    }
}

impl TaggedNode for Feature {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// A child entry of a feature, keyed by its kind in the JSON AST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureChild {
    /// A `Background:` block. Backgrounds cannot be tagged.
    Background(Background),
    /// A `Scenario:` or `Scenario Outline:` block.
    Scenario(Scenario),
    /// A `Rule:` block grouping further scenarios.
    Rule(RuleBlock),
}

impl FeatureChild {
    /// Returns the scenario if this child is one.
    #[must_use]
    pub fn as_scenario(&self) -> Option<&Scenario> {
        match self {
            Self::Scenario(s) => Some(s),
            Self::Background(_) | Self::Rule(_) => None,
        }
    }
}

/// A `Background:` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    /// Node keyword.
    pub keyword: String,
    /// Background title.
    #[serde(default)]
    pub name: String,
    /// Position of the keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A `Rule:` block. Its own children are not descended into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleBlock {
    /// Node keyword.
    pub keyword: String,
    /// Rule title.
    #[serde(default)]
    pub name: String,
    /// Tags on the rule block.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Position of the keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A `Scenario:` or `Scenario Outline:` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Node keyword.
    pub keyword: String,
    /// Scenario title.
    #[serde(default)]
    pub name: String,
    /// Tags on the scenario.
    pub tags: Vec<Tag>,
    /// Example tables; only outlines declare them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Examples>>,
    /// Position of the keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Scenario {
    /// Creates an untagged scenario with no examples.
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: String::new(),
            tags: Vec::new(),
            examples: None,
            location: None,
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Appends an examples table, declaring the sequence if needed.
    #[must_use]
    pub fn with_examples(mut self, examples: Examples) -> Self {
        self.examples.get_or_insert_with(Vec::new).push(examples);
        self
    }
}

impl TaggedNode for Scenario {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// An `Examples:` table of a scenario outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Examples {
    /// Node keyword.
    pub keyword: String,
    /// Table title.
    #[serde(default)]
    pub name: String,
    /// Tags on the table.
    pub tags: Vec<Tag>,
    /// Position of the keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Examples {
    /// Creates an untagged examples table.
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            name: String::new(),
            tags: Vec::new(),
            location: None,
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

impl TaggedNode for Examples {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTLINE: &str = r#"{
  "uri": "features/login.feature",
  "feature": {
    "keyword": "Feature",
    "name": "Login",
    "tags": [{ "name": "@smoke", "location": { "line": 1, "column": 1 } }],
    "location": { "line": 2, "column": 1 },
    "children": [
      { "background": { "keyword": "Background", "name": "" } },
      {
        "scenario": {
          "keyword": "Scenario Outline",
          "name": "valid users",
          "tags": [],
          "examples": [
            { "keyword": "Examples", "tags": [{ "name": "@slow", "location": { "line": 9 } }] }
          ]
        }
      }
    ]
  }
}"#;

    #[test]
    fn parses_gherkin_json_ast() {
        let doc = GherkinDocument::from_json(OUTLINE).unwrap();
        assert_eq!(doc.uri.as_deref(), Some("features/login.feature"));

        let feature = doc.feature.unwrap();
        assert_eq!(feature.keyword(), "Feature");
        assert_eq!(feature.tags()[0].name, "@smoke");
        assert_eq!(feature.children.len(), 2);

        let scenarios: Vec<&Scenario> = feature.scenarios().collect();
        assert_eq!(scenarios.len(), 1);
        let examples = scenarios[0].examples.as_ref().unwrap();
        assert_eq!(examples[0].tags[0], Tag::new("@slow", 9));
    }

    #[test]
    fn empty_document_has_no_feature() {
        let doc = GherkinDocument::from_json("{}").unwrap();
        assert!(doc.feature.is_none());
    }

    #[test]
    fn scenario_without_examples_field() {
        let doc = GherkinDocument::from_json(
            r#"{"feature": {"keyword": "Feature", "tags": [],
                "children": [{"scenario": {"keyword": "Scenario", "tags": []}}]}}"#,
        )
        .unwrap();
        let feature = doc.feature.unwrap();
        assert!(feature.scenarios().next().unwrap().examples.is_none());
    }

    #[test]
    fn rule_children_load_and_are_skipped() {
        let doc = GherkinDocument::from_json(
            r#"{"feature": {"keyword": "Feature", "tags": [], "children": [
                {"scenario": {"keyword": "Scenario", "tags": [{"name": "@wip", "location": {"line": 3}}]}},
                {"rule": {"keyword": "Rule", "name": "business", "tags": [], "children": []}}
            ]}}"#,
        )
        .unwrap();
        let feature = doc.feature.unwrap();
        assert!(matches!(feature.children[1], FeatureChild::Rule(ref r) if r.keyword == "Rule"));
        let scenarios: Vec<&Scenario> = feature.scenarios().collect();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].tags[0].name, "@wip");
    }

    #[test]
    fn malformed_json_error_is_not_chained() {
        let err = GherkinDocument::from_json("[]").unwrap_err();
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn missing_tags_is_a_load_error() {
        let err = GherkinDocument::from_json(r#"{"feature": {"keyword": "Feature"}}"#).unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GherkinDocument::from_file(Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/doc.json"));
    }

    #[test]
    fn builders_preserve_order() {
        let scenario = Scenario::new("Scenario")
            .with_tag(Tag::new("@a", 3))
            .with_tag(Tag::new("@b", 3))
            .with_examples(Examples::new("Examples"));
        let names: Vec<&str> = scenario.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["@a", "@b"]);
        assert_eq!(scenario.examples.map(|e| e.len()), Some(1));
    }
}
