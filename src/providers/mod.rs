//! Provisioning drivers and the workflow helpers they share.
//!
//! Each provider module owns one driver (e.g. [`openai::OpenAiModel`])
//! that walks the full provisioning sequence against a
//! [`ConnectorHelper`](crate::traits::ConnectorHelper). The helpers here
//! cover the steps every driver performs the same way: trusted-endpoint
//! registration, role and secret naming, and credential resolution.

pub mod openai;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ConnectorError, Result};
use crate::traits::{ConnectorHelper, InputCollector};

/// Validate a trusted-endpoint pattern and register it with the helper.
///
/// The pattern is compiled locally first so a malformed literal fails
/// fast instead of round-tripping to the remote service.
pub async fn set_trusted_endpoint(helper: &dyn ConnectorHelper, pattern: &str) -> Result<()> {
    regex::Regex::new(pattern).map_err(|e| {
        ConnectorError::configuration(format!("invalid trusted endpoint pattern: {e}"))
    })?;
    tracing::debug!(pattern, "registering trusted endpoint");
    helper.register_trusted_endpoint(pattern).await
}

/// Derive the connector role names for a managed deployment.
///
/// Returns `(role_name, create_role_name)`; both share one short unique
/// suffix so the pair is recognizable in the remote service's console.
pub fn connector_role_names(prefix: &str, provider_slug: &str) -> (String, String) {
    let id = short_id();
    (
        format!("{prefix}-{provider_slug}-connector-{id}"),
        format!("{prefix}-{provider_slug}-connector-create-{id}"),
    )
}

/// Derive the stored secret name from a caller-chosen base name.
pub fn derive_secret_name(base: &str, provider_slug: &str) -> String {
    format!("{base}-{provider_slug}-{}", short_id())
}

/// Serialize the secret payload stored for a managed connector.
///
/// The payload is a one-entry JSON object keyed
/// `{provider_slug}_api_key`.
pub(crate) fn secret_payload(provider_slug: &str, api_key: &SecretString) -> Result<String> {
    let mut payload = serde_json::Map::new();
    payload.insert(
        format!("{provider_slug}_api_key"),
        serde_json::Value::String(api_key.expose_secret().to_string()),
    );
    serde_json::to_string(&serde_json::Value::Object(payload)).map_err(ConnectorError::from)
}

/// Use the supplied API key or fall back to the collector's masked prompt.
pub(crate) fn resolve_api_key(
    supplied: Option<SecretString>,
    provider: &str,
    collector: &dyn InputCollector,
) -> Result<SecretString> {
    match supplied {
        Some(key) => Ok(key),
        None => collector.api_key(provider),
    }
}

/// Use the supplied role prefix or prompt for one; empty prefixes are
/// rejected.
pub(crate) fn resolve_role_prefix(
    supplied: Option<String>,
    collector: &dyn InputCollector,
) -> Result<String> {
    let prefix = match supplied {
        Some(prefix) => prefix,
        None => collector.role_prefix()?,
    };
    if prefix.trim().is_empty() {
        return Err(ConnectorError::invalid_input(
            "connector role prefix cannot be empty",
        ));
    }
    Ok(prefix)
}

fn short_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}
