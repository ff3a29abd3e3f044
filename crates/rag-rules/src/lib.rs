//! # rag-rules
//!
//! Built-in component/hook architecture rules for rag.
//!
//! ## Available Rules
//!
//! | Id | Applies to | Fires at | Message |
//! |----|------------|----------|---------|
//! | `no-direct-api-in-component` | components | first network call | React component should not call API directly |
//! | `no-markup-in-hook` | hooks | first returned markup | Hooks must not return JSX |
//!
//! Both rules report at severity `error` by default.
//!
//! ## Usage
//!
//! ```ignore
//! use rag_core::Reporter;
//! use rag_rules::all_rules;
//!
//! let reporter = Reporter::builder().rules(all_rules()).build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod no_direct_api_in_component;
pub mod no_markup_in_hook;
mod presets;

pub use no_direct_api_in_component::NoDirectApiInComponent;
pub use no_markup_in_hook::NoMarkupInHook;
pub use presets::all_rules;
