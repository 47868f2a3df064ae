//! Whole-document placeholder substitution.
//!
//! Secrets are spliced into a connector body by serializing the document,
//! replacing every occurrence of the literal placeholder, and parsing the
//! result back. The substitution deliberately operates on the serialized
//! form rather than per-field: a placeholder nested inside a request-body
//! string is still replaced.

use crate::error::{ConnectorError, Result};
use crate::types::ConnectorBody;

/// Placeholder for the Authorization header value.
pub const AUTH_PLACEHOLDER: &str = "${auth}";

/// Placeholder for the inline credential used by self-managed deployments.
pub const CREDENTIAL_PLACEHOLDER: &str = "${credential}";

/// Replace every occurrence of `placeholder` in the serialized `body`.
///
/// The replacement value is inserted verbatim, without JSON escaping. A
/// value containing `"` or `\` would corrupt the document; API keys do
/// not contain either.
pub fn substitute_placeholder(
    body: &ConnectorBody,
    placeholder: &str,
    value: &str,
) -> Result<ConnectorBody> {
    let serialized = serde_json::to_string(body)?;
    let replaced = serialized.replace(placeholder, value);
    serde_json::from_str(&replaced).map_err(ConnectorError::from)
}
