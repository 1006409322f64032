pub mod store;

pub use store::{load_document, VersionFile, VersionStore, VERSIONS_DIR, VERSION_EXTENSION};
