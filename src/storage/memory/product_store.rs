//! In-memory ProductStore implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{NewProduct, Product, ProductUpdate};
use crate::storage::{ProductStore, Result, StorageError};

/// Logical collection name reported in errors.
const COLLECTION: &str = "products";

/// In-memory product store keyed by id.
#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<HashMap<String, Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, new: NewProduct) -> Result<Product> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: Some(new.name),
            price: Some(new.price),
            image: new.image,
            description: new.description,
            created_at: Utc::now(),
        };

        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn update(&self, id: &str, update: ProductUpdate) -> Result<Product> {
        let mut products = self.products.write().await;
        match products.get_mut(id) {
            Some(product) => {
                // All four attribute fates are written, as in the
                // DynamoDB adapter: absent fields are cleared.
                product.name = update.name;
                product.price = update.price;
                product.image = update.image;
                product.description = update.description;
                Ok(product.clone())
            }
            None => Err(StorageError::NotFound {
                table: COLLECTION.to_string(),
                id: id.to_string(),
            }),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.products.write().await.remove(id);
        Ok(())
    }
}
