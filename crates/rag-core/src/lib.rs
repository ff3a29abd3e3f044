//! # rag-core
//!
//! Core framework for the rag component/hook architecture linter.
//!
//! This crate holds everything that does not depend on a parser:
//!
//! - [`FunctionDescriptor`], [`Violation`], [`AnalysisResult`] and the
//!   [`SCHEMA_VERSION`] of their wire format
//! - [`Role`] classification of function names
//! - [`Rule`] trait for per-function rules
//! - [`Reporter`] for running rules and ordering violations
//! - [`Config`] for `rag.toml`
//! - [`AnalysisError`] for fatal failures
//!
//! ## Example
//!
//! ```ignore
//! use rag_core::{FunctionDescriptor, Location, Reporter};
//!
//! let reporter = Reporter::builder().rules(rag_rules::all_rules()).build();
//! let functions = vec![FunctionDescriptor::new("App", Location::new(1, 9))];
//! let violations = reporter.report(&functions);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod reporter;
mod rule;
mod types;

pub use config::{Config, ConfigError, OutputConfig};
pub use error::AnalysisError;
pub use reporter::{sort_violations, Reporter, ReporterBuilder};
pub use rule::{Rule, RuleBox};
pub use types::{
    AnalysisResult, Dialect, FunctionDescriptor, FunctionRef, Location, Role, Severity, Violation,
    SCHEMA_VERSION,
};
