//! OrderStore trait definition.

use async_trait::async_trait;

use super::Result;
use crate::domain::{NewOrder, Order, OrderUpdate};

/// Interface for order persistence.
///
/// Operations are independent, stateless request/response calls with no
/// locking or cross-record transactions. Concurrent callers race with
/// last-write-wins semantics; there is no optimistic concurrency token.
///
/// Implementations:
/// - `DynamoOrderStore`: DynamoDB storage
/// - `MemoryOrderStore`: In-memory store for tests and local development
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order.
    ///
    /// Assigns the id and creation timestamp, then writes
    /// unconditionally (an existing record under the same id would be
    /// overwritten). Returns the full persisted record.
    async fn create(&self, new: NewOrder) -> Result<Order>;

    /// Retrieve every order via a full-collection scan.
    ///
    /// The whole collection is returned in one call; cost scales with
    /// collection size. Known scalability ceiling, not configurable.
    async fn get_all(&self) -> Result<Vec<Order>>;

    /// Point lookup by id.
    ///
    /// Returns `Ok(None)` for an id that was never created; absence is
    /// a valid outcome, not an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<Order>>;

    /// All orders for a user, via a scan filtered on `userEmail`.
    ///
    /// The filter is applied server-side after the scan reads the data,
    /// not via an index: cost scales with total collection size, not
    /// match count. Results come back in no guaranteed order.
    async fn get_by_user_email(&self, email: &str) -> Result<Vec<Order>>;

    /// Write the status attribute, leaving every other attribute of the
    /// stored record untouched.
    ///
    /// Returns the post-update record. Fails with
    /// [`StorageError::NotFound`](super::StorageError::NotFound) when
    /// the id does not exist.
    async fn update(&self, id: &str, update: OrderUpdate) -> Result<Order>;

    /// Unconditional delete. Deleting an absent id succeeds.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Set status to `"Canceled"` regardless of current status.
    ///
    /// No state-machine validation: a delivered order can be canceled,
    /// and repeated calls converge on the same final state.
    async fn cancel(&self, id: &str) -> Result<Order>;
}
