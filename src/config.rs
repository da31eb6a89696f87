//! Store configuration.
//!
//! Configuration is read from the process environment at startup and is
//! deliberately not validated there: a missing region or credential
//! surfaces as a store-level error on first use, not at construction.

use serde::Deserialize;

/// Environment variable for the AWS region.
pub const REGION_ENV_VAR: &str = "AWS_REGION";
/// Environment variable for the table name prefix.
pub const TABLE_PREFIX_ENV_VAR: &str = "RAVELITE_TABLE_PREFIX";
/// Environment variable for a custom DynamoDB endpoint (DynamoDB Local).
pub const ENDPOINT_ENV_VAR: &str = "RAVELITE_DYNAMO_ENDPOINT";

/// Default table name prefix.
pub const DEFAULT_TABLE_PREFIX: &str = "rave-lite";

/// Configuration for the DynamoDB-backed stores.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// AWS region (e.g., "us-east-1"). Uses the SDK default provider
    /// chain if not set.
    pub region: Option<String>,
    /// Custom endpoint URL (for DynamoDB Local or LocalStack).
    pub endpoint_url: Option<String>,
    /// Table name prefix (default: "rave-lite").
    pub table_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            table_prefix: DEFAULT_TABLE_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from process environment variables.
    ///
    /// Missing values fall back to defaults. Credentials are not read
    /// here at all; the SDK default provider chain picks them up.
    pub fn from_env() -> Self {
        Self {
            region: std::env::var(REGION_ENV_VAR).ok(),
            endpoint_url: std::env::var(ENDPOINT_ENV_VAR).ok(),
            table_prefix: std::env::var(TABLE_PREFIX_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_TABLE_PREFIX.to_string()),
        }
    }

    /// Set AWS region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set custom endpoint URL (for DynamoDB Local or LocalStack).
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Set table name prefix.
    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Physical table name for the orders collection.
    pub fn orders_table(&self) -> String {
        format!("{}-orders", self.table_prefix)
    }

    /// Physical table name for the products collection.
    pub fn products_table(&self) -> String {
        format!("{}-products", self.table_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_names() {
        let config = StoreConfig::new();
        assert_eq!(config.orders_table(), "rave-lite-orders");
        assert_eq!(config.products_table(), "rave-lite-products");
    }

    #[test]
    fn test_custom_prefix() {
        let config = StoreConfig::new().with_table_prefix("staging");
        assert_eq!(config.orders_table(), "staging-orders");
        assert_eq!(config.products_table(), "staging-products");
    }

    #[test]
    fn test_endpoint_config() {
        let config = StoreConfig::new()
            .with_region("us-west-2")
            .with_endpoint("http://localhost:8000");
        assert_eq!(config.region, Some("us-west-2".to_string()));
        assert_eq!(
            config.endpoint_url,
            Some("http://localhost:8000".to_string())
        );
    }

    #[test]
    fn test_default_has_no_region() {
        let config = StoreConfig::default();
        assert!(config.region.is_none());
        assert!(config.endpoint_url.is_none());
    }
}
