//! The built-in rule set.

use crate::{NoDirectApiInComponent, NoMarkupInHook};
use rag_core::RuleBox;

/// Returns every built-in rule.
///
/// Includes:
/// - `no-direct-api-in-component` - Forbids network calls in components
/// - `no-markup-in-hook` - Forbids hooks from returning JSX
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoDirectApiInComponent::new()),
        Box::new(NoMarkupInHook::new()),
    ]
}
