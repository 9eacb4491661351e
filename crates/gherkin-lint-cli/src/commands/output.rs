//! Shared output formatting for lint results.

use anyhow::Result;
use gherkin_lint_core::{LintResult, Severity};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    let (errors, warnings) = result.count_by_severity();

    for report in result.reports.iter().filter(|r| !r.is_clean()) {
        println!("\x1b[4m{}\x1b[0m", report.file.display());
        for violation in &report.violations {
            let severity_indicator = match violation.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
            };
            println!(
                "  {:>4}  {}  {:<60} {}",
                violation.diagnostic.line,
                severity_indicator,
                violation.diagnostic.message,
                violation.diagnostic.rule,
            );
        }
        println!();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for (file, violation) in result.violations() {
        println!(
            "{}:{}: {} [{}] {}",
            file.display(),
            violation.diagnostic.line,
            violation.severity,
            violation.diagnostic.rule,
            violation.diagnostic.message,
        );
    }
}
