//! DynamoDB ProductStore implementation.
//!
//! Item schema:
//! - PK: `id` (String, UUID v4 assigned at creation)
//! - `name`, `price`, `image`, `description`, `createdAt`

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::attrs;
use crate::domain::{NewProduct, Product, ProductUpdate};
use crate::storage::{ProductStore, Result, StorageError};

const ATTR_ID: &str = "id";
const ATTR_NAME: &str = "name";

/// DynamoDB implementation of ProductStore.
pub struct DynamoProductStore {
    client: Client,
    table_name: String,
}

impl DynamoProductStore {
    /// Create a store over an injected client handle.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ProductStore for DynamoProductStore {
    async fn create(&self, new: NewProduct) -> Result<Product> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: Some(new.name),
            price: Some(new.price),
            image: new.image,
            description: new.description,
            created_at: Utc::now(),
        };

        let item = attrs::to_item(&product)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| StorageError::Dynamo(format!("DynamoDB put_item failed: {}", e)))?;

        debug!(table = %self.table_name, id = %product.id, "Stored product");
        Ok(product)
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
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

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
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

    async fn update(&self, id: &str, update: ProductUpdate) -> Result<Product> {
        let mut set_parts: Vec<String> = Vec::new();
        let mut remove_parts: Vec<String> = Vec::new();
        let mut values: HashMap<String, AttributeValue> = HashMap::new();

        // All four attribute fates are written on every update: present
        // fields are set, absent fields are removed from the item.
        // `name` is a DynamoDB reserved word, so it goes through #n.
        match update.name {
            Some(name) => {
                set_parts.push("#n = :n".to_string());
                values.insert(":n".to_string(), AttributeValue::S(name));
            }
            None => remove_parts.push("#n".to_string()),
        }
        match update.price {
            Some(price) => {
                set_parts.push("price = :p".to_string());
                values.insert(":p".to_string(), AttributeValue::N(price.to_string()));
            }
            None => remove_parts.push("price".to_string()),
        }
        match update.image {
            Some(image) => {
                set_parts.push("image = :i".to_string());
                values.insert(":i".to_string(), AttributeValue::S(image));
            }
            None => remove_parts.push("image".to_string()),
        }
        match update.description {
            Some(description) => {
                set_parts.push("description = :d".to_string());
                values.insert(":d".to_string(), AttributeValue::S(description));
            }
            None => remove_parts.push("description".to_string()),
        }

        let mut expression = String::new();
        if !set_parts.is_empty() {
            expression.push_str("SET ");
            expression.push_str(&set_parts.join(", "));
        }
        if !remove_parts.is_empty() {
            if !expression.is_empty() {
                expression.push(' ');
            }
            expression.push_str("REMOVE ");
            expression.push_str(&remove_parts.join(", "));
        }

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .update_expression(expression)
            .condition_expression("attribute_exists(id)")
            .expression_attribute_names("#n", ATTR_NAME)
            .set_expression_attribute_values((!values.is_empty()).then_some(values))
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

        debug!(table = %self.table_name, id = %id, "Updated product");
        attrs::from_item(&item)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StorageError::Dynamo(format!("DynamoDB delete_item failed: {}", e)))?;

        debug!(table = %self.table_name, id = %id, "Deleted product");
        Ok(())
    }
}
