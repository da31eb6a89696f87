use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value written by `OrderStore::cancel`.
pub const STATUS_CANCELED: &str = "Canceled";

/// A stored customer order.
///
/// Orders are open records: the typed fields below are the core schema,
/// and any additional caller-supplied attributes ride along in `extra`,
/// stored verbatim. Wire attribute names are camelCase (`userEmail`,
/// `createdAt`) for compatibility with existing tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Non-indexed filter key for "orders by user" queries.
    pub user_email: String,
    /// Enum-like status. The initial value is caller-supplied;
    /// [`STATUS_CANCELED`] is the only transition this layer writes.
    pub status: String,
    /// Server-assigned at creation, immutable thereafter.
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Payload for creating a new order.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_email: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Update applied by `OrderStore::update`.
///
/// Only the status attribute is ever written; everything else on the
/// stored record stays untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_shape_is_camel_case_with_flattened_extras() {
        let wire = json!({
            "id": "o-1",
            "userEmail": "a@b.com",
            "status": "Pending",
            "createdAt": "2025-11-02T09:30:00Z",
            "giftWrap": true
        });

        let order: Order = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(order.user_email, "a@b.com");
        assert_eq!(order.extra.get("giftWrap"), Some(&json!(true)));

        assert_eq!(serde_json::to_value(&order).unwrap(), wire);
    }
}
