//! Rave Lite storage — DynamoDB-backed order and product stores.
//!
//! Two parallel data-access components translate domain calls into
//! requests against a managed document store: point lookups by primary
//! key, filtered full scans, conditional updates, and deletes. The SDK
//! client is built once by the process entry point (see
//! [`storage::init_storage`]) and injected into both stores.

pub mod config;
pub mod domain;
pub mod storage;

pub use config::StoreConfig;
pub use domain::{NewOrder, NewProduct, Order, OrderUpdate, Product, ProductUpdate};
pub use storage::{
    init_storage, DynamoOrderStore, DynamoProductStore, MemoryOrderStore, MemoryProductStore,
    OrderStore, ProductStore, StorageError,
};
