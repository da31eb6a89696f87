//! Storage interfaces and implementations.

use std::sync::Arc;

use tracing::info;

use crate::config::StoreConfig;

pub mod dynamo;
pub mod memory;
mod order_store;
mod product_store;

pub use dynamo::{DynamoOrderStore, DynamoProductStore};
pub use memory::{MemoryOrderStore, MemoryProductStore};
pub use order_store::OrderStore;
pub use product_store::ProductStore;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// "Not found" on a read is not an error; reads return `Ok(None)` for
/// absent ids. Everything the SDK reports that this layer has no
/// interpretation for is carried verbatim in [`StorageError::Dynamo`]
/// for the caller to interpret.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Conditional update against an id with no stored item.
    #[error("Item not found: table={table}, id={id}")]
    NotFound { table: String, id: String },

    /// A stored item that does not decode into its domain shape.
    #[error("Malformed item: {0}")]
    Malformed(String),

    /// Codec error between domain values and item attributes.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Any other DynamoDB failure (network, credentials, throttling),
    /// untranslated.
    #[error("DynamoDB error: {0}")]
    Dynamo(String),
}

/// Initialize both stores against DynamoDB.
///
/// Builds one SDK client from the configuration and shares it across
/// the order and product stores. The client is a long-lived resource;
/// its lifecycle is owned by the process entry point calling this.
pub async fn init_storage(
    config: &StoreConfig,
) -> (Arc<dyn OrderStore>, Arc<dyn ProductStore>) {
    let client = dynamo::connect(config).await;

    info!(
        orders = %config.orders_table(),
        products = %config.products_table(),
        "Storage: DynamoDB"
    );

    let orders: Arc<dyn OrderStore> =
        Arc::new(DynamoOrderStore::new(client.clone(), config.orders_table()));
    let products: Arc<dyn ProductStore> =
        Arc::new(DynamoProductStore::new(client, config.products_table()));

    (orders, products)
}
