//! Rule trait for per-function lint rules.

use crate::types::{FunctionDescriptor, Severity, Violation};

/// A lint rule evaluated against one function at a time.
///
/// Rules are total: they never fail on a well-formed descriptor, never look
/// at other descriptors, and emit at most one violation per function.
///
/// # Example
///
/// ```ignore
/// use rag_core::{FunctionDescriptor, Role, Rule, Violation};
///
/// pub struct NoUtilityApi;
///
/// impl Rule for NoUtilityApi {
///     fn id(&self) -> &'static str { "no-utility-api" }
///
///     fn check(&self, f: &FunctionDescriptor) -> Option<Violation> {
///         if f.role != Role::Utility {
///             return None;
///         }
///         let first = *f.api_calls.first()?;
///         Some(Violation::new(self.id(), self.default_severity(), f, first, "..."))
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case identifier of this rule (e.g., "no-markup-in-hook").
    fn id(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single function.
    ///
    /// Returns a violation located at the first offending site, if any.
    fn check(&self, function: &FunctionDescriptor) -> Option<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
