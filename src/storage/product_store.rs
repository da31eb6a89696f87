//! ProductStore trait definition.

use async_trait::async_trait;

use super::Result;
use crate::domain::{NewProduct, Product, ProductUpdate};

/// Interface for product persistence.
///
/// Structurally parallel to [`OrderStore`](super::OrderStore), with a
/// narrower update contract: updates always write the fate of exactly
/// four fixed attributes.
///
/// Implementations:
/// - `DynamoProductStore`: DynamoDB storage
/// - `MemoryProductStore`: In-memory store for tests and local development
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product.
    ///
    /// Assigns the id and creation timestamp, then writes
    /// unconditionally. Returns the full persisted record.
    async fn create(&self, new: NewProduct) -> Result<Product>;

    /// Retrieve every product via a full-collection scan.
    async fn get_all(&self) -> Result<Vec<Product>>;

    /// Point lookup by id. Absent ids are `Ok(None)`, not an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Write `name`, `price`, `image`, and `description` in one call:
    /// `Some` values are set, `None` values are removed from the stored
    /// record.
    ///
    /// Returns the post-update record. Fails with
    /// [`StorageError::NotFound`](super::StorageError::NotFound) when
    /// the id does not exist.
    async fn update(&self, id: &str, update: ProductUpdate) -> Result<Product>;

    /// Unconditional delete. Deleting an absent id succeeds.
    async fn delete(&self, id: &str) -> Result<()>;
}
