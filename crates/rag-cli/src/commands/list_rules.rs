//! List rules command implementation.

use rag::rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<30} {:<10} Description", "Id", "Severity");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<30} {:<10} {}",
            rule.id(),
            rule.default_severity(),
            rule.description()
        );
    }

    println!("\nFunctions are classified by name:");
    println!("  hook       - `use` followed by an uppercase letter (useData)");
    println!("  component  - leading uppercase letter (Widget)");
    println!("  utility    - anything else");
}
