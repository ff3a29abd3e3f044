//! Rule to forbid network calls directly inside components.
//!
//! # Rationale
//!
//! Components should render. Data fetching belongs in hooks or services,
//! where it can be shared, cached and tested without a renderer.
//!
//! # Detected Patterns
//!
//! - `fetch(...)` and `axios(...)` in a component body
//! - `axios.get(...)`, `axios?.post(...)` and any other `axios` member call
//!
//! Calls inside nested callbacks (`useEffect(() => fetch(...))`, event
//! handlers) belong to the callback, not the component, and are not reported.

use rag_core::{FunctionDescriptor, Role, Rule, Severity, Violation};
use tracing::trace;

/// Rule id for no-direct-api-in-component.
pub const ID: &str = "no-direct-api-in-component";

/// Message attached to every violation of this rule.
pub const MESSAGE: &str = "React component should not call API directly";

/// Forbids components from calling network APIs directly.
#[derive(Debug, Clone)]
pub struct NoDirectApiInComponent {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoDirectApiInComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NoDirectApiInComponent {
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

impl Rule for NoDirectApiInComponent {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Forbids direct network calls (fetch, axios) in component bodies"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, function: &FunctionDescriptor) -> Option<Violation> {
        if function.role != Role::Component {
            return None;
        }
        let first = *function.api_calls.first()?;
        trace!("{ID}: `{}` calls an API at {first}", function.name);
        Some(Violation::new(ID, self.severity, function, first, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rag_core::Location;

    fn component(name: &str, calls: Vec<Location>) -> FunctionDescriptor {
        FunctionDescriptor::new(name, Location::new(1, 9)).with_api_calls(calls)
    }

    #[test]
    fn test_fires_at_first_call() {
        let f = component("Widget", vec![Location::new(2, 2), Location::new(5, 4)]);
        let v = NoDirectApiInComponent::new().check(&f).unwrap();
        assert_eq!(v.rule_id, ID);
        assert_eq!(v.message, MESSAGE);
        assert_eq!(v.severity, Severity::Error);
        assert_eq!(v.location, Location::new(2, 2));
        assert_eq!(v.function.name, "Widget");
        assert_eq!(v.function.kind, Role::Component);
    }

    #[test]
    fn test_no_calls_no_violation() {
        let f = component("Widget", vec![]);
        assert!(NoDirectApiInComponent::new().check(&f).is_none());
    }

    #[test]
    fn test_ignores_hooks_and_utilities() {
        let rule = NoDirectApiInComponent::new();
        for name in ["useWidget", "loadWidget", "use"] {
            let f = component(name, vec![Location::new(2, 2)]);
            assert!(rule.check(&f).is_none(), "{name} should not be checked");
        }
    }

    #[test]
    fn test_custom_severity() {
        let rule = NoDirectApiInComponent::new().severity(Severity::Warning);
        let f = component("Widget", vec![Location::new(2, 2)]);
        assert_eq!(rule.check(&f).unwrap().severity, Severity::Warning);
    }
}
