//! RediSearch query builders.
//!
//! This module turns a `FieldQuery` into RediSearch query syntax.

use crate::types::FieldQuery;

/// Characters with meaning in the RediSearch query language.
const SPECIAL_CHARS: &[char] = &[
    ',', '.', '<', '>', '{', '}', '[', ']', '"', '\'', ':', ';', '!', '@', '#', '$', '%', '^',
    '&', '*', '(', ')', '-', '+', '=', '~', '|', '/', '\\',
];

/// Build the query string for a field query.
///
/// Terms are grouped so every term is matched against the field, e.g.
/// `FieldQuery::new("createdby", "Martin Luther")` becomes
/// `@createdby:(Martin Luther)`. Without the grouping only the first term
/// would be bound to the field.
pub fn build_query_string(query: &FieldQuery) -> String {
    format!("@{}:({})", query.field, escape_query_text(query.text.trim()))
}

/// Escape query-language punctuation with a backslash.
///
/// Whitespace is kept: it separates terms.
pub fn escape_query_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term() {
        let query = FieldQuery::new("insult", "mom");
        assert_eq!(build_query_string(&query), "@insult:(mom)");
    }

    #[test]
    fn test_multi_term_author() {
        let query = FieldQuery::new("createdby", "Martin Luther");
        assert_eq!(build_query_string(&query), "@createdby:(Martin Luther)");
    }

    #[test]
    fn test_trims_outer_whitespace() {
        let query = FieldQuery::new("language", "  en ");
        assert_eq!(build_query_string(&query), "@language:(en)");
    }

    #[test]
    fn test_escapes_punctuation() {
        assert_eq!(escape_query_text("o'brien"), "o\\'brien");
        assert_eq!(escape_query_text("a-b.c"), "a\\-b\\.c");
        assert_eq!(escape_query_text("@x:(y)"), "\\@x\\:\\(y\\)");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_query_text("Reddit"), "Reddit");
    }
}
