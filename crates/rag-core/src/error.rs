//! Fatal analysis errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

use crate::types::Dialect;

/// Errors that abort the analysis of a file.
///
/// There is no partial result: any of these ends the run.
#[derive(Debug, Error, Diagnostic)]
pub enum AnalysisError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    #[diagnostic(code(rag::io))]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The source does not parse under the declared dialect.
    #[error("syntax error in {} at {line}:{column} ({dialect})", path.display())]
    #[diagnostic(
        code(rag::syntax),
        help("check that the file extension or --dialect matches the source")
    )]
    Syntax {
        /// Path of the offending file.
        path: PathBuf,
        /// Dialect the source was parsed as.
        dialect: Dialect,
        /// Line of the first error (1-indexed).
        line: usize,
        /// Column of the first error (0-indexed).
        column: usize,
        /// Source text, for rendering.
        #[source_code]
        src: NamedSource<String>,
        /// Span of the first error.
        #[label("unexpected syntax here")]
        span: SourceSpan,
    },

    /// The bundled grammar could not be loaded, or the parser gave up.
    #[error("{dialect} parser unavailable: {message}")]
    #[diagnostic(code(rag::grammar))]
    Grammar {
        /// Dialect whose grammar failed.
        dialect: Dialect,
        /// Detail from the parser.
        message: String,
    },
}

impl AnalysisError {
    /// Wraps an IO error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for syntax failures.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_message_names_path() {
        let err = AnalysisError::io(
            "src/Missing.tsx",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "failed to read src/Missing.tsx: not found");
        assert!(!err.is_syntax());
    }

    #[test]
    fn syntax_message_has_position() {
        let err = AnalysisError::Syntax {
            path: PathBuf::from("a.ts"),
            dialect: Dialect::TypeScript,
            line: 3,
            column: 7,
            src: NamedSource::new("a.ts", "x".repeat(40)),
            span: (20, 1).into(),
        };
        assert_eq!(err.to_string(), "syntax error in a.ts at 3:7 (typescript)");
        assert!(err.is_syntax());
    }
}
