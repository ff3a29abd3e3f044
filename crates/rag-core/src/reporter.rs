//! Runs rules over extracted functions and orders the findings.

use tracing::debug;

use crate::rule::{Rule, RuleBox};
use crate::types::{FunctionDescriptor, Violation};

/// Builder for configuring a [`Reporter`].
#[derive(Default)]
pub struct ReporterBuilder {
    rules: Vec<RuleBox>,
}

impl ReporterBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the reporter.
    #[must_use]
    pub fn build(self) -> Reporter {
        Reporter { rules: self.rules }
    }
}

/// Evaluates every rule against every function of a file.
///
/// Use [`Reporter::builder()`] to construct an instance.
pub struct Reporter {
    rules: Vec<RuleBox>,
}

impl Reporter {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ReporterBuilder {
        ReporterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs all rules over `functions` and returns the violations in report order.
    ///
    /// An empty list is a clean result.
    #[must_use]
    pub fn report(&self, functions: &[FunctionDescriptor]) -> Vec<Violation> {
        let mut violations: Vec<Violation> = functions
            .iter()
            .flat_map(|f| self.rules.iter().filter_map(move |rule| rule.check(f)))
            .collect();

        debug!(
            "{} violation(s) from {} function(s) and {} rule(s)",
            violations.len(),
            functions.len(),
            self.rules.len()
        );

        sort_violations(&mut violations);
        violations
    }
}

/// Sorts violations by line, then column, then rule id.
///
/// This order is part of the output contract.
pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort_by(|a, b| {
        a.location
            .cmp(&b.location)
            .then_with(|| a.rule_id.cmp(&b.rule_id))
    });
}
