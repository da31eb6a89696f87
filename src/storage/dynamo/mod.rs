//! DynamoDB storage implementations.

mod attrs;
mod order_store;
mod product_store;

pub use order_store::DynamoOrderStore;
pub use product_store::DynamoProductStore;

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use tracing::info;

use crate::config::StoreConfig;

/// Build a DynamoDB client from the store configuration.
///
/// Credentials come from the SDK default provider chain (environment,
/// profile, instance metadata) and are not validated here; a missing or
/// invalid credential surfaces as a request error on first use.
pub async fn connect(config: &StoreConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(ref region) = config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }

    if let Some(ref endpoint) = config.endpoint_url {
        loader = loader.endpoint_url(endpoint.as_str());
    }

    let aws_config = loader.load().await;

    info!(
        region = ?config.region,
        endpoint = ?config.endpoint_url,
        "Connected to DynamoDB"
    );

    Client::new(&aws_config)
}
