//! Remote-service helper contract.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ConnectorBody, SecretBackedConnector};

/// Operations the provisioning drivers delegate to the remote service.
///
/// Implementations own authenticated HTTP transport, retry/backoff, and
/// resource creation semantics. This crate treats them as opaque: errors
/// propagate unchanged and nothing is retried at the driver layer.
#[async_trait]
pub trait ConnectorHelper: Send + Sync {
    /// Allow-list a trusted endpoint pattern on the remote service.
    ///
    /// `pattern` is a host-scoped regular expression the service must
    /// register before it will make outbound calls to that host.
    async fn register_trusted_endpoint(&self, pattern: &str) -> Result<()>;

    /// Create a role, store a secret, and register a connector referencing
    /// both (managed-service deployments).
    ///
    /// `settle_delay` is waited by the implementation between role/secret
    /// creation and the connector call that references them, to let the
    /// newly created resources become consistent.
    async fn create_connector_with_secret(
        &self,
        secret_name: &str,
        secret_value: &str,
        role_name: &str,
        create_role_name: &str,
        body: &ConnectorBody,
        settle_delay: Duration,
    ) -> Result<SecretBackedConnector>;

    /// Register a connector without any backing role or secret
    /// (self-managed deployments).
    ///
    /// Returns the connector id; an empty id signals that creation failed.
    async fn create_connector(&self, body: &ConnectorBody, role_name: Option<&str>)
    -> Result<String>;

    /// Fetch the full representation of a registered connector.
    async fn get_connector(&self, connector_id: &str) -> Result<serde_json::Value>;
}
