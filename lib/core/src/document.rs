//! Document model and key extraction
//!
//! An extracted term sheet is an arbitrarily nested tree of mappings,
//! sequences and scalars. Classification only looks at the keys of that
//! tree, collected by [`KeyExtractor`].

use crate::normalize::{normalize_key, KeySet};
use serde_json::Value;

/// A node of an extracted document
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Keyed mapping (a JSON object), in source order
    Mapping(Vec<(String, Document)>),
    /// Ordered sequence (a JSON array)
    Sequence(Vec<Document>),
    /// Leaf value; contributes no keys
    Scalar(Value),
}

impl Document {
    /// Whether the root is a shape a stored term sheet may have
    pub fn is_container(&self) -> bool {
        matches!(self, Document::Mapping(_) | Document::Sequence(_))
    }

    /// Depth-first walk over the tree
    pub fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Document::Mapping(entries) => {
                for (key, value) in entries {
                    visitor.visit_key(key);
                    value.accept(visitor);
                }
            }
            Document::Sequence(items) => {
                for item in items {
                    item.accept(visitor);
                }
            }
            Document::Scalar(value) => visitor.visit_scalar(value),
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Document::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Document::from(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                Document::Sequence(items.into_iter().map(Document::from).collect())
            }
            scalar => Document::Scalar(scalar),
        }
    }
}

/// Callbacks invoked by [`Document::accept`]
pub trait DocumentVisitor {
    fn visit_key(&mut self, key: &str);

    fn visit_scalar(&mut self, _value: &Value) {}
}

/// Collects every mapping key found at any depth into one normalized set
#[derive(Debug, Default)]
pub struct KeyExtractor {
    keys: KeySet,
}

impl KeyExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the normalized key set of a document
    pub fn extract(document: &Document) -> KeySet {
        let mut extractor = Self::new();
        document.accept(&mut extractor);
        extractor.into_keys()
    }

    pub fn into_keys(self) -> KeySet {
        self.keys
    }
}

impl DocumentVisitor for KeyExtractor {
    fn visit_key(&mut self, key: &str) {
        let normalized = normalize_key(key);
        if !normalized.is_empty() {
            self.keys.insert(normalized);
        }
    }
}
