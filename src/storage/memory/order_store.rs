//! In-memory OrderStore implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{NewOrder, Order, OrderUpdate, STATUS_CANCELED};
use crate::storage::{OrderStore, Result, StorageError};

/// Logical collection name reported in errors.
const COLLECTION: &str = "orders";

/// In-memory order store keyed by id.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<HashMap<String, Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn write_status(&self, id: &str, status: String) -> Result<Order> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(id) {
            Some(order) => {
                order.status = status;
                Ok(order.clone())
            }
            None => Err(StorageError::NotFound {
                table: COLLECTION.to_string(),
                id: id.to_string(),
            }),
        }
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, new: NewOrder) -> Result<Order> {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_email: new.user_email,
            status: new.status,
            created_at: Utc::now(),
            extra: new.extra,
        };

        self.orders
            .write()
            .await
            .insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn get_all(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(id).cloned())
    }

    async fn get_by_user_email(&self, email: &str) -> Result<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|order| order.user_email == email)
            .cloned()
            .collect())
    }

    async fn update(&self, id: &str, update: OrderUpdate) -> Result<Order> {
        self.write_status(id, update.status).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.orders.write().await.remove(id);
        Ok(())
    }

    async fn cancel(&self, id: &str) -> Result<Order> {
        self.write_status(id, STATUS_CANCELED.to_string()).await
    }
}
