//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# gherkin-lint configuration

[linter]
# Glob patterns (relative to the checked path) of documents to skip
exclude = [
    "**/node_modules/**",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity ("error" or "warning") set

[rules.allowed-tags]
enabled = true
# severity = "warning"
# Every tag not listed here is reported. An empty list allows no tags.
tags = ["@smoke", "@wip"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("gherkin-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created gherkin-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit gherkin-lint.toml to configure rules");
    println!("  2. Run: gherkin-lint check");

    Ok(())
}
