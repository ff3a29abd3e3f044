//! Extract → rules → report pipeline for a single file.

use std::path::Path;

use rag_core::{AnalysisError, AnalysisResult, Dialect, FunctionDescriptor, Reporter};
use rag_rules::all_rules;
use rag_ts::{JsExtractor, LanguageExtractor};
use tracing::debug;

/// Runs the built-in rules over one file at a time.
///
/// An `Analyzer` holds no per-file state; one instance can analyze any
/// number of files, and separate instances can run on separate threads.
pub struct Analyzer {
    extractor: JsExtractor,
    reporter: Reporter,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer with every built-in rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractor: JsExtractor::new(),
            reporter: Reporter::builder().rules(all_rules()).build(),
        }
    }

    /// Analyzes already-loaded `source`. `path` is echoed into the result.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Syntax`] if `source` does not parse under
    /// `dialect`.
    pub fn analyze_source(
        &self,
        path: &Path,
        source: &str,
        dialect: Dialect,
    ) -> Result<AnalysisResult, AnalysisError> {
        let functions = self.extractor.extract(path, source, dialect)?;
        Ok(self.finish(path, &functions))
    }

    /// Reads and analyzes the file at `path` as `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Io`] if the file cannot be read, or
    /// [`AnalysisError::Syntax`] if it does not parse.
    pub fn analyze_file_as(
        &self,
        path: &Path,
        dialect: Dialect,
    ) -> Result<AnalysisResult, AnalysisError> {
        let functions = self.extractor.extract_file(path, dialect)?;
        Ok(self.finish(path, &functions))
    }

    /// Reads and analyzes the file at `path`, choosing the dialect from its extension.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::analyze_file_as`].
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_file_as(path, Dialect::from_path(path))
    }

    fn finish(&self, path: &Path, functions: &[FunctionDescriptor]) -> AnalysisResult {
        let violations = self.reporter.report(functions);
        debug!(
            "{}: {} function(s), {} violation(s)",
            path.display(),
            functions.len(),
            violations.len()
        );
        AnalysisResult::new(path, violations)
    }
}

/// Analyzes the file at `path`, choosing the dialect from its extension.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if the file cannot be read, or
/// [`AnalysisError::Syntax`] if it does not parse.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new().analyze_file(path.as_ref())
}

/// Analyzes the file at `path` as `dialect`.
///
/// # Errors
///
/// See [`analyze_file`].
pub fn analyze_file_as(
    path: impl AsRef<Path>,
    dialect: Dialect,
) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new().analyze_file_as(path.as_ref(), dialect)
}

/// Analyzes `source` without touching the filesystem.
///
/// # Errors
///
/// Returns [`AnalysisError::Syntax`] if `source` does not parse.
pub fn analyze_source(
    path: impl AsRef<Path>,
    source: &str,
    dialect: Dialect,
) -> Result<AnalysisResult, AnalysisError> {
    Analyzer::new().analyze_source(path.as_ref(), source, dialect)
}

/// Reads the file at `path` and returns its function descriptors.
///
/// # Errors
///
/// See [`analyze_file`].
pub fn extract_file(
    path: impl AsRef<Path>,
    dialect: Dialect,
) -> Result<Vec<FunctionDescriptor>, AnalysisError> {
    JsExtractor::new().extract_file(path.as_ref(), dialect)
}

/// Returns the function descriptors of `source`.
///
/// # Errors
///
/// Returns [`AnalysisError::Syntax`] if `source` does not parse.
pub fn extract_source(
    path: impl AsRef<Path>,
    source: &str,
    dialect: Dialect,
) -> Result<Vec<FunctionDescriptor>, AnalysisError> {
    JsExtractor::new().extract(path.as_ref(), source, dialect)
}
