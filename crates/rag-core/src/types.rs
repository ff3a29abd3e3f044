//! Core types for function descriptors, violations, and results.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version tag of the serialized [`AnalysisResult`] wire format.
///
/// Bump whenever the shape of [`Violation`] or the report ordering changes.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Position in the analyzed source file.
///
/// Ordering is lexicographic: line first, then column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (0-indexed, UTF-16 code units from the start of the line).
    pub column: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Role of a function, derived from its declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Capitalized name: renders UI.
    Component,
    /// `use` followed by an uppercase letter: reusable non-rendering logic.
    Hook,
    /// Everything else.
    Utility,
}

impl Role {
    /// Classifies a function by its name.
    ///
    /// The hook check runs first, then the component check; anything else
    /// is a utility. Only ASCII uppercase letters count as capitals.
    ///
    /// ```
    /// use rag_core::Role;
    ///
    /// assert_eq!(Role::from_name("useFetch"), Role::Hook);
    /// assert_eq!(Role::from_name("Button"), Role::Component);
    /// assert_eq!(Role::from_name("user"), Role::Utility);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if is_hook_name(name) {
            Self::Hook
        } else if is_component_name(name) {
            Self::Component
        } else {
            Self::Utility
        }
    }

    /// Wire name of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Hook => "hook",
            Self::Utility => "utility",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_hook_name(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.bytes().next())
        .is_some_and(|b| b.is_ascii_uppercase())
}

fn is_component_name(name: &str) -> bool {
    name.bytes().next().is_some_and(|b| b.is_ascii_uppercase())
}

/// Grammar a source file is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Plain JavaScript (JSX is accepted).
    JavaScript,
    /// JavaScript with JSX.
    Jsx,
    /// TypeScript without JSX.
    TypeScript,
    /// TypeScript with JSX.
    Tsx,
}

impl Dialect {
    /// All dialects, in declaration order.
    pub const ALL: [Self; 4] = [Self::JavaScript, Self::Jsx, Self::TypeScript, Self::Tsx];

    /// Infers the dialect from a file extension (with or without the dot).
    ///
    /// Unknown extensions fall back to TypeScript.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "tsx" => Self::Tsx,
            "jsx" => Self::Jsx,
            "js" | "mjs" | "cjs" => Self::JavaScript,
            _ => Self::TypeScript,
        }
    }

    /// Infers the dialect from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(Self::TypeScript, Self::from_extension)
    }

    /// Name used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown dialect '{s}' (expected javascript, jsx, typescript or tsx)")
            })
    }
}

/// One function-like declaration found in a source file.
///
/// Built once during extraction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDescriptor {
    /// Bound name (declaration name or variable name).
    pub name: String,
    /// Role derived from `name`.
    #[serde(rename = "kind")]
    pub role: Role,
    /// Location of the name token.
    pub location: Location,
    /// Direct calls to recognized network targets, in source order.
    pub api_calls: Vec<Location>,
    /// Markup returned directly by this function, in source order.
    pub jsx_returns: Vec<Location>,
}

impl FunctionDescriptor {
    /// Creates a descriptor with no recorded sites; the role is derived from `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        let name = name.into();
        Self {
            role: Role::from_name(&name),
            name,
            location,
            api_calls: Vec::new(),
            jsx_returns: Vec::new(),
        }
    }

    /// Sets the recorded API call sites.
    #[must_use]
    pub fn with_api_calls(mut self, api_calls: Vec<Location>) -> Self {
        self.api_calls = api_calls;
        self
    }

    /// Sets the recorded markup return sites.
    #[must_use]
    pub fn with_jsx_returns(mut self, jsx_returns: Vec<Location>) -> Self {
        self.jsx_returns = jsx_returns;
        self
    }

    /// Reference to this function as carried by a [`Violation`].
    #[must_use]
    pub fn function_ref(&self) -> FunctionRef {
        FunctionRef {
            name: self.name.clone(),
            kind: self.role,
        }
    }
}

/// Name and role of the function a violation points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionRef {
    /// Function name.
    pub name: String,
    /// Function role.
    pub kind: Role,
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Rule identifier (e.g., "no-direct-api-in-component").
    pub rule_id: String,
    /// Human-readable message.
    pub message: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Offending function.
    pub function: FunctionRef,
    /// First offending site.
    pub location: Location,
}

impl Violation {
    /// Creates a new violation against `function`.
    #[must_use]
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        function: &FunctionDescriptor,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            severity,
            function: function.function_ref(),
            location,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {} (in {} `{}`)",
            self.location, self.severity, self.rule_id, self.message, self.function.kind,
            self.function.name
        )
    }
}

/// Result of analyzing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Always [`SCHEMA_VERSION`] for results produced by this crate.
    pub schema_version: String,
    /// Path of the analyzed file, as given by the caller.
    pub file_path: PathBuf,
    /// Violations in report order.
    pub violations: Vec<Violation>,
}

impl AnalysisResult {
    /// Creates a result tagged with the current schema version.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>, violations: Vec<Violation>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            file_path: file_path.into(),
            violations,
        }
    }

    /// Returns true when nothing was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Counts violations as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        (errors, self.violations.len() - errors)
    }
}
