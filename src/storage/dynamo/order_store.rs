//! DynamoDB OrderStore implementation.
//!
//! Item schema:
//! - PK: `id` (String, UUID v4 assigned at creation)
//! - `userEmail`, `status`, `createdAt` plus any caller-supplied
//!   attributes, stored verbatim

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::attrs;
use crate::domain::{NewOrder, Order, OrderUpdate, STATUS_CANCELED};
use crate::storage::{OrderStore, Result, StorageError};

const ATTR_ID: &str = "id";
const ATTR_STATUS: &str = "status";

/// DynamoDB implementation of OrderStore.
pub struct DynamoOrderStore {
    client: Client,
    table_name: String,
}

impl DynamoOrderStore {
    /// Create a store over an injected client handle.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Single-attribute status write shared by `update` and `cancel`.
    ///
    /// Conditional on the item existing; `status` is a DynamoDB
    /// reserved word, so it goes through an expression attribute name.
    async fn write_status(&self, id: &str, status: String) -> Result<Order> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .update_expression("SET #status = :status")
            .condition_expression("attribute_exists(id)")
            .expression_attribute_names("#status", ATTR_STATUS)
            .expression_attribute_values(":status", AttributeValue::S(status))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_conditional_check_failed_exception() {
                    StorageError::NotFound {
                        table: self.table_name.clone(),
                        id: id.to_string(),
                    }
                } else {
                    StorageError::Dynamo(format!("DynamoDB update_item failed: {}", err))
                }
            })?;

        let item = result.attributes.ok_or_else(|| {
            StorageError::Malformed("update_item returned no attributes".to_string())
        })?;

        debug!(table = %self.table_name, id = %id, "Updated order status");
        attrs::from_item(&item)
    }
}

#[async_trait]
impl OrderStore for DynamoOrderStore {
    async fn create(&self, new: NewOrder) -> Result<Order> {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_email: new.user_email,
            status: new.status,
            created_at: Utc::now(),
            extra: new.extra,
        };

        let item = attrs::to_item(&order)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| StorageError::Dynamo(format!("DynamoDB put_item failed: {}", e)))?;

        debug!(table = %self.table_name, id = %order.id, "Stored order");
        Ok(order)
    }

    async fn get_all(&self) -> Result<Vec<Order>> {
        let items = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(|e| StorageError::Dynamo(format!("DynamoDB scan failed: {}", e)))?;

        items.iter().map(attrs::from_item).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Order>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StorageError::Dynamo(format!("DynamoDB get_item failed: {}", e)))?;

        match result.item {
            Some(item) => Ok(Some(attrs::from_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn get_by_user_email(&self, email: &str) -> Result<Vec<Order>> {
        let items = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("userEmail = :email")
            .expression_attribute_values(":email", AttributeValue::S(email.to_string()))
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(|e| StorageError::Dynamo(format!("DynamoDB scan failed: {}", e)))?;

        items.iter().map(attrs::from_item).collect()
    }

    async fn update(&self, id: &str, update: OrderUpdate) -> Result<Order> {
        self.write_status(id, update.status).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StorageError::Dynamo(format!("DynamoDB delete_item failed: {}", e)))?;

        debug!(table = %self.table_name, id = %id, "Deleted order");
        Ok(())
    }

    async fn cancel(&self, id: &str) -> Result<Order> {
        self.write_status(id, STATUS_CANCELED.to_string()).await
    }
}
