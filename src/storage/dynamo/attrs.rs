//! Attribute codec between domain records and DynamoDB items.
//!
//! Domain records go through `serde_json` and then to `AttributeValue`
//! maps, so the typed core schema and the open `extra` attributes of an
//! order share one code path. Numbers are decoded as integers when they
//! parse as such, floats otherwise.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::storage::{Result, StorageError};

/// Encode a domain record as a DynamoDB item.
pub(crate) fn to_item<T: Serialize>(record: &T) -> Result<HashMap<String, AttributeValue>> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), json_to_attr(value)))
            .collect()),
        other => Err(StorageError::Malformed(format!(
            "record did not serialize to an object: {}",
            other
        ))),
    }
}

/// Decode a DynamoDB item into a domain record.
pub(crate) fn from_item<T: DeserializeOwned>(
    item: &HashMap<String, AttributeValue>,
) -> Result<T> {
    let mut map = serde_json::Map::with_capacity(item.len());
    for (key, attr) in item {
        map.insert(key.clone(), attr_to_json(attr)?);
    }
    Ok(serde_json::from_value(Value::Object(map))?)
}

fn json_to_attr(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(json_to_attr).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(key, value)| (key.clone(), json_to_attr(value)))
                .collect(),
        ),
    }
}

fn attr_to_json(attr: &AttributeValue) -> Result<Value> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::L(items) => Ok(Value::Array(
            items
                .iter()
                .map(attr_to_json)
                .collect::<Result<Vec<_>>>()?,
        )),
        AttributeValue::M(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                object.insert(key.clone(), attr_to_json(value)?);
            }
            Ok(Value::Object(object))
        }
        other => Err(StorageError::Malformed(format!(
            "unsupported attribute type: {:?}",
            other
        ))),
    }
}

fn parse_number(n: &str) -> Result<Value> {
    if let Ok(int) = n.parse::<i64>() {
        return Ok(Value::Number(Number::from(int)));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| StorageError::Malformed(format!("unparseable number attribute: {}", n)))
}
