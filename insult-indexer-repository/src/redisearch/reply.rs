//! Parsing of RediSearch replies.

use redis::{FromRedisValue, Value};
use serde_json::Value as JsonValue;

use crate::errors::StoreError;
use crate::types::IndexInfo;
use insult_indexer_shared::{SearchHit, SearchResponse};

/// Check whether an `FT.INFO` error message means the index does not exist.
///
/// RediSearch 2.x answers `Unknown index name` (older builds capitalize
/// `Index`), Redis 8 answers `<name>: no such index`. The client may render the
/// error code with a trailing colon, so colons are ignored.
pub(crate) fn is_missing_index_message(message: &str) -> bool {
    let normalized = message.to_lowercase().replace(':', "");
    normalized.contains("unknown index name") || normalized.contains("no such index")
}

/// Parse an `FT.INFO` reply.
///
/// The RESP2 reply is a flat list of attribute names and values; only
/// `num_docs` is read.
pub(crate) fn parse_index_info(index: &str, reply: &Value) -> Result<IndexInfo, StoreError> {
    let items: Vec<Value> = FromRedisValue::from_redis_value(reply)
        .map_err(|e| StoreError::parse(format!("Unexpected FT.INFO reply: {}", e)))?;

    let mut info = IndexInfo {
        name: index.to_string(),
        num_docs: None,
    };

    for pair in items.chunks(2) {
        let [name, value] = pair else { break };
        let Ok(name) = String::from_redis_value(name) else {
            continue;
        };
        if name == "num_docs" {
            info.num_docs = String::from_redis_value(value)
                .ok()
                .and_then(|raw| raw.parse::<f64>().ok())
                .map(|n| n as u64);
        }
    }

    Ok(info)
}

/// Parse an `FT.SEARCH` reply over a JSON index.
///
/// The RESP2 reply is `[total, key, [field, value, ...], key, [...], ...]`.
/// For JSON documents the whole body is returned under the `$` field; any
/// other field list is folded into a flat JSON object.
pub(crate) fn parse_search_reply(reply: &Value) -> Result<SearchResponse, StoreError> {
    let items: Vec<Value> = FromRedisValue::from_redis_value(reply)
        .map_err(|e| StoreError::parse(format!("Unexpected FT.SEARCH reply: {}", e)))?;

    let Some((total, rest)) = items.split_first() else {
        return Err(StoreError::parse("Empty FT.SEARCH reply"));
    };

    let total = u64::from_redis_value(total)
        .map_err(|e| StoreError::parse(format!("Invalid result count: {}", e)))?;

    if rest.len() % 2 != 0 {
        return Err(StoreError::parse(format!(
            "FT.SEARCH reply has {} trailing entries, expected key/field pairs",
            rest.len()
        )));
    }

    let mut hits = Vec::with_capacity(rest.len() / 2);
    for pair in rest.chunks(2) {
        let key = String::from_redis_value(&pair[0])
            .map_err(|e| StoreError::parse(format!("Invalid document key: {}", e)))?;
        let fields: Vec<String> = FromRedisValue::from_redis_value(&pair[1])
            .map_err(|e| StoreError::parse(format!("Invalid fields for {}: {}", key, e)))?;

        let document = document_from_fields(&key, &fields)?;
        hits.push(SearchHit::new(key, document));
    }

    Ok(SearchResponse { total, hits })
}

fn document_from_fields(key: &str, fields: &[String]) -> Result<JsonValue, StoreError> {
    let mut object = serde_json::Map::new();

    for pair in fields.chunks(2) {
        let [name, value] = pair else { break };
        if name == "$" {
            return serde_json::from_str(value)
                .map_err(|e| StoreError::parse(format!("Invalid JSON stored at {}: {}", key, e)));
        }
        object.insert(name.clone(), JsonValue::String(value.clone()));
    }

    Ok(JsonValue::Object(object))
}
