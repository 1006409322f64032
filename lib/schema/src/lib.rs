//! # termclass Schema
//!
//! Reference data for term sheet classification.
//!
//! - [`SchemaRegistry`] - known instrument types, each with a full and a
//!   mandatory key set
//! - [`AliasTable`] - alternate key spellings resolved to canonical keys
//! - [`ClassifierConfig`] - serde representation of both, loadable from JSON
//! - [`Catalogue`] - the validated pair, built once at startup
//!
//! ## Example
//!
//! ```rust
//! use termclass_schema::Catalogue;
//!
//! let catalogue = Catalogue::builtin().unwrap();
//! let swap = catalogue.registry().get("InterestRateSwap").unwrap();
//! assert!(swap.mandatory_keys().contains("maturitydate"));
//! assert_eq!(catalogue.aliases().resolve("end date"), Some("maturitydate"));
//! ```

mod builtin;

pub mod alias;
pub mod catalogue;
pub mod config;
pub mod schema;

pub use alias::{AliasTable, DeadAlias};
pub use catalogue::Catalogue;
pub use config::{AliasConfig, ClassifierConfig, TypeConfig};
pub use schema::{SchemaDefinition, SchemaError, SchemaRegistry};
