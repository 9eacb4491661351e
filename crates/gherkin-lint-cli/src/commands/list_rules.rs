//! List rules command implementation.

use gherkin_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<20} {:<45} Options (defaults)", "Name", "Description");
    println!("{}", "-".repeat(90));

    for rule in all_rules() {
        let options = rule
            .available_configs()
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:<20} {:<45} {}", rule.name(), rule.description(), options);
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  gherkin-lint check --rules allowed-tags");
}
