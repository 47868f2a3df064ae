//! Interactive input collector contract.

use secrecy::SecretString;

use crate::error::Result;
use crate::templates::TemplateMenuEntry;
use crate::types::ConnectorBody;

/// Prompts used when a value was not supplied programmatically.
///
/// Drivers consult the collector only for the pieces the caller left out
/// of the options, so a fully scripted invocation never prompts.
pub trait InputCollector: Send + Sync {
    /// Choose a model from the deployment mode's menu; returns the
    /// selection key.
    fn choose_model(&self, provider: &str, menu: &[TemplateMenuEntry]) -> Result<String>;

    /// Collect the provider API key through a masked prompt.
    fn api_key(&self, provider: &str) -> Result<SecretString>;

    /// Collect a fully custom connector body, field by field.
    fn custom_connector_body(&self) -> Result<ConnectorBody>;

    /// Collect the connector role prefix (managed deployments).
    fn role_prefix(&self) -> Result<String>;

    /// Collect the base secret name (managed deployments).
    fn secret_name(&self) -> Result<String>;
}
