//! Language-agnostic extraction trait.
//!
//! `LanguageExtractor` is the seam between parsing and rule evaluation:
//! it turns source text into [`FunctionDescriptor`]s, and nothing downstream
//! ever sees a syntax tree.

use std::path::Path;

use rag_core::{AnalysisError, Dialect, FunctionDescriptor};

/// Trait for Tree-sitter backed function extraction.
pub trait LanguageExtractor: Send + Sync {
    /// Language identifier (e.g., `"javascript"`).
    fn language_id(&self) -> &'static str;

    /// Dialects this extractor can parse.
    fn dialects(&self) -> &'static [Dialect];

    /// Extracts every qualifying function declaration from `source`.
    ///
    /// `path` is only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Syntax`] if `source` does not parse under
    /// `dialect`, or [`AnalysisError::Grammar`] if the parser is unusable.
    fn extract(
        &self,
        path: &Path,
        source: &str,
        dialect: Dialect,
    ) -> Result<Vec<FunctionDescriptor>, AnalysisError>;

    /// Reads `path` once and extracts from its contents.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Io`] if the file cannot be read, otherwise
    /// whatever [`LanguageExtractor::extract`] returns.
    fn extract_file(
        &self,
        path: &Path,
        dialect: Dialect,
    ) -> Result<Vec<FunctionDescriptor>, AnalysisError> {
        let source = std::fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
        self.extract(path, &source, dialect)
    }
}
