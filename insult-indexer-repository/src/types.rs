//! Index definition and index lookup types.

use insult_indexer_shared::INSULT_FIELDS;

/// Name of the insult search index.
pub const INDEX_NAME: &str = "idx:insult";

/// Key prefix of insult documents. Documents live at `insult:{ordinal}`.
pub const KEY_PREFIX: &str = "insult:";

/// Field type in a search index schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Full-text searchable field.
    Text,
}

impl FieldKind {
    /// The schema keyword for this field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "TEXT",
        }
    }
}

/// One field of a search index schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// JSONPath of the attribute in the stored document (e.g. `$.insult`).
    pub path: String,
    /// Name the field is queried by (e.g. `insult`).
    pub alias: String,
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// A text field over the top-level attribute `name`, aliased to the same name.
    pub fn text(name: &str) -> Self {
        Self {
            path: format!("$.{}", name),
            alias: name.to_string(),
            kind: FieldKind::Text,
        }
    }
}

/// Definition of a search index over JSON documents sharing a key prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    pub name: String,
    /// Only documents whose key starts with this prefix are indexed.
    pub prefix: String,
    pub fields: Vec<FieldDefinition>,
}

impl IndexDefinition {
    /// The insult index: eight text fields over `insult:` JSON documents.
    pub fn insults() -> Self {
        Self {
            name: INDEX_NAME.to_string(),
            prefix: KEY_PREFIX.to_string(),
            fields: INSULT_FIELDS
                .iter()
                .map(|name| FieldDefinition::text(name))
                .collect(),
        }
    }

    /// Aliases of all fields, in schema order.
    pub fn aliases(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.alias.as_str()).collect()
    }
}

/// Metadata of an existing index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexInfo {
    pub name: String,
    /// Number of indexed documents, when the store reports it.
    pub num_docs: Option<u64>,
}

/// Result of probing the store for an index.
///
/// Keeps "the index does not exist" apart from "the probe itself failed", so
/// callers only rebuild on a definite `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexLookup {
    Found(IndexInfo),
    NotFound,
    TransientError(String),
}

impl IndexLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, IndexLookup::Found(_))
    }
}

/// A full-text query restricted to one indexed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldQuery {
    /// Field alias to search in.
    pub field: String,
    /// Terms that must all appear in the field.
    pub text: String,
}

impl FieldQuery {
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
        }
    }
}
