//! # termclass Core
//!
//! Core building blocks of the term sheet classifier:
//!
//! - [`normalize_key`] - the single case/whitespace rule applied to every key
//! - [`Document`] - tagged tree of mappings, sequences and scalars
//! - [`KeyExtractor`] - flattens every key of a document into a [`KeySet`]
//! - [`Error`] - error taxonomy shared by the workspace
//!
//! ## Example
//!
//! ```rust
//! use termclass_core::{Document, KeyExtractor};
//! use serde_json::json;
//!
//! let doc = Document::from(json!({
//!     "Trade": {"Notional": 1000000, "Termination Date": "2030-01-01"}
//! }));
//! let keys = KeyExtractor::extract(&doc);
//! assert!(keys.contains("termination date"));
//! ```

pub mod document;
pub mod error;
pub mod normalize;

pub use document::{Document, DocumentVisitor, KeyExtractor};
pub use error::{Error, Result};
pub use normalize::{normalize_key, normalize_keys, KeySet};
