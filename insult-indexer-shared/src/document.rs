//! Insult document model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute names of an insult document, in the order the source delivers them.
pub const INSULT_FIELDS: [&str; 8] = [
    "number",
    "language",
    "insult",
    "created",
    "shown",
    "createdby",
    "active",
    "comment",
];

/// Typed view of one insult document as returned by the insult API.
///
/// Values are kept as opaque strings. The source is not validated; a
/// missing attribute is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsultRecord {
    pub number: Option<String>,
    pub language: Option<String>,
    pub insult: Option<String>,
    pub created: Option<String>,
    pub shown: Option<String>,
    pub createdby: Option<String>,
    pub active: Option<String>,
    pub comment: Option<String>,
}

impl InsultRecord {
    /// Build a record from a stored JSON document.
    ///
    /// Numbers and booleans are rendered as strings so that a document the
    /// source delivered with non-string scalars still reads back.
    pub fn from_document(document: &Value) -> Self {
        let field = |name: &str| -> Option<String> {
            match document.get(name)? {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other @ (Value::Number(_) | Value::Bool(_)) => Some(other.to_string()),
                _ => None,
            }
        };

        Self {
            number: field("number"),
            language: field("language"),
            insult: field("insult"),
            created: field("created"),
            shown: field("shown"),
            createdby: field("createdby"),
            active: field("active"),
            comment: field("comment"),
        }
    }
}
