//! # rag
//!
//! Single-file architecture linter for React components and hooks.
//!
//! This is the facade crate: it wires the Tree-sitter extractor, the
//! built-in rules and the reporter into one call per file, and re-exports
//! the core types.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let result = rag::analyze_file("src/Widget.tsx")?;
//! for v in &result.violations {
//!     println!("{}:{} {} {}", v.location.line, v.location.column, v.rule_id, v.message);
//! }
//! println!("{}", serde_json::to_string(&result)?);
//! ```
//!
//! Rules see only [`FunctionDescriptor`]s. Use [`extract_file`] to get them
//! directly, e.g. to map violations back to function spans in an editor.

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use rag_core::*;

/// Built-in rules.
pub mod rules {
    pub use rag_rules::*;
}

mod runner;

pub use runner::{
    analyze_file, analyze_file_as, analyze_source, extract_file, extract_source, Analyzer,
};
