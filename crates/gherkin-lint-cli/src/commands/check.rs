//! Check command implementation.

use anyhow::{Context, Result};
use gherkin_lint_core::{Config, LinterConfig, Linter, RuleBox};
use gherkin_lint_rules::{all_rules, find_rule};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// File name suffix of the documents picked up when walking a directory.
const DOCUMENT_SUFFIX: &str = ".feature.json";

/// Runs the check command.
///
/// Returns `false` when any error-severity violation was found.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<bool> {
    let mut config = load_config(source)?;
    config.linter.exclude.extend(exclude);

    let rules = match rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names)
        }
        None => all_rules(),
    };

    let files = discover_files(path, &config.linter)?;

    let linter = Linter::builder()
        .rules(rules)
        .config(config)
        .build()
        .context("Failed to build linter")?;

    tracing::info!(
        "Checking {} document(s) under {} with {} rule(s)",
        files.len(),
        path.display(),
        linter.rule_count()
    );

    let result = linter.lint_files(&files).context("Lint failed")?;

    super::output::print(&result, format)?;

    Ok(!result.has_errors())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules = Vec::new();
    for name in names {
        match find_rule(name) {
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }
    rules
}

/// Collects the documents to lint under `root`, sorted by path.
///
/// A file given directly is linted whatever its extension; a directory is
/// walked for `*.feature.json` files, honouring `.gitignore` and exclude
/// patterns. Other JSON files (e.g. test run reports) are left alone.
fn discover_files(root: &Path, linter: &LinterConfig) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !is_document(path) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if linter.is_excluded(rel)? {
            tracing::debug!("Excluding: {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_document(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.len() > DOCUMENT_SUFFIX.len() && n.ends_with(DOCUMENT_SUFFIX))
}
