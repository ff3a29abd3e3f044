//! Rule to forbid hooks from returning markup.
//!
//! # Rationale
//!
//! A hook that returns JSX is a component in disguise: it cannot be
//! memoized or keyed, and it hides rendering from the component tree.
//!
//! # Detected Patterns
//!
//! - `return <div/>;` anywhere in a hook body
//! - `return (<>...</>);` and markup inside a returned conditional
//! - arrow hooks whose expression body is markup: `const useX = () => <b/>;`
//!
//! Returns inside nested functions (render callbacks, `map` bodies) are not
//! reported.

use rag_core::{FunctionDescriptor, Role, Rule, Severity, Violation};
use tracing::trace;

/// Rule id for no-markup-in-hook.
pub const ID: &str = "no-markup-in-hook";

/// Message attached to every violation of this rule.
pub const MESSAGE: &str = "Hooks must not return JSX";

/// Forbids hooks from returning JSX markup.
#[derive(Debug, Clone)]
pub struct NoMarkupInHook {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoMarkupInHook {
    fn default() -> Self {
        Self::new()
    }
}

impl NoMarkupInHook {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoMarkupInHook {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Forbids hooks from returning JSX markup"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, function: &FunctionDescriptor) -> Option<Violation> {
        if function.role != Role::Hook {
            return None;
        }
        let first = *function.jsx_returns.first()?;
        trace!("{ID}: `{}` returns markup at {first}", function.name);
        Some(Violation::new(ID, self.severity, function, first, MESSAGE))
    }
}
