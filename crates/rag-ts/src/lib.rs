//! # rag-ts
//!
//! Tree-sitter powered function extraction for JavaScript and TypeScript
//! (including JSX/TSX).
//!
//! Turns source text into [`rag_core::FunctionDescriptor`]s:
//!
//! - [`LanguageExtractor`] trait, the seam between parsing and rules
//! - [`JsExtractor`] for `.js`/`.jsx`/`.ts`/`.tsx` sources
//! - [`Visit`] for the depth-first traversal used by the extractor
//!
//! ```ignore
//! use rag_core::Dialect;
//! use rag_ts::{JsExtractor, LanguageExtractor};
//!
//! let functions = JsExtractor::new().extract_file(path, Dialect::from_path(path))?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod extractor;
pub mod javascript;
mod syntax;
pub mod walk;

pub use extractor::LanguageExtractor;
pub use javascript::JsExtractor;
pub use walk::Visit;
