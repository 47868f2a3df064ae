//! OpenAI connector provisioning driver.
//!
//! Drives the full workflow against the remote service: trusted-endpoint
//! registration, model selection, credential collection, body assembly,
//! secret substitution, the mode-specific creation call, and persistence
//! through the caller's save callback.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Result;
use crate::substitution::{AUTH_PLACEHOLDER, CREDENTIAL_PLACEHOLDER, substitute_placeholder};
use crate::templates::{TemplateChoice, template_registry};
use crate::traits::{ConnectorHelper, InputCollector};
use crate::types::{ConnectorBody, ConnectorRecord, ProvisionedResources, ServiceType};

/// Trusted-endpoint pattern registered for OpenAI connectors.
pub const OPENAI_TRUSTED_ENDPOINT: &str = r"^https://api\.openai\.com/.*$";

/// Wait between role/secret creation and the connector call referencing
/// them, so the newly created resources become consistent.
pub const CONNECTOR_SETTLE_DELAY: Duration = Duration::from_secs(10);

const PROVIDER: &str = "OpenAI";
const PROVIDER_SLUG: &str = "openai";

/// Optional inputs for [`OpenAiModel::create_connector`].
///
/// Everything left unset is collected interactively through the
/// [`InputCollector`]; a fully populated options value never prompts.
#[derive(Debug, Clone, Default)]
pub struct CreateConnectorOptions {
    /// Prefix for the connector role names (managed deployments)
    pub role_prefix: Option<String>,
    /// Model name or menu label used to pick a template without prompting
    pub model_name: Option<String>,
    /// OpenAI API key
    pub api_key: Option<SecretString>,
    /// Pre-built connector body; skips template resolution and assembly
    pub connector_body: Option<ConnectorBody>,
    /// Base name for the stored secret (managed deployments)
    pub secret_name: Option<String>,
}

impl CreateConnectorOptions {
    /// Create empty options; every value will be prompted for.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connector role prefix
    pub fn with_role_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.role_prefix = Some(prefix.into());
        self
    }

    /// Set the model name
    pub fn with_model_name<S: Into<String>>(mut self, model_name: S) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    /// Set the API key
    pub fn with_api_key<S: Into<SecretString>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set a pre-built connector body
    pub fn with_connector_body(mut self, body: ConnectorBody) -> Self {
        self.connector_body = Some(body);
        self
    }

    /// Set the base secret name
    pub fn with_secret_name<S: Into<String>>(mut self, secret_name: S) -> Self {
        self.secret_name = Some(secret_name.into());
        self
    }
}

/// OpenAI provisioning driver, fixed to one deployment mode.
#[derive(Debug, Clone, Copy)]
pub struct OpenAiModel {
    service_type: ServiceType,
}

impl OpenAiModel {
    /// Create a driver for the given deployment mode.
    pub const fn new(service_type: ServiceType) -> Self {
        Self { service_type }
    }

    /// The deployment mode this driver provisions for.
    pub const fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Create an OpenAI connector and persist the result.
    ///
    /// Walks the provisioning sequence in order: trusted endpoint, model
    /// selection, API key, body assembly, `${auth}` substitution, then the
    /// mode branch (role + secret + combined creation for the managed
    /// service; `${credential}` substitution + plain creation otherwise).
    ///
    /// Returns `Ok(true)` after the save callback ran, `Ok(false)` when
    /// the helper reported an empty connector id — in that case the
    /// callback is never invoked. Helper errors propagate unchanged, and
    /// a role or secret already created before such an error is left in
    /// place; cleanup belongs to the operator.
    pub async fn create_connector<F>(
        &self,
        helper: &dyn ConnectorHelper,
        collector: &dyn InputCollector,
        options: CreateConnectorOptions,
        save_config: F,
    ) -> Result<bool>
    where
        F: FnOnce(&ConnectorRecord) -> Result<()>,
    {
        super::set_trusted_endpoint(helper, OPENAI_TRUSTED_ENDPOINT).await?;

        let model_key = self.resolve_model_choice(options.model_name.as_deref(), collector)?;
        let api_key = super::resolve_api_key(options.api_key, PROVIDER, collector)?;

        let body = match options.connector_body {
            Some(body) => body,
            None => self.connector_body(&model_key, collector)?,
        };

        let auth_value = format!("Bearer {}", api_key.expose_secret());
        let body = substitute_placeholder(&body, AUTH_PLACEHOLDER, &auth_value)?;

        let (connector_id, resources) = match self.service_type {
            ServiceType::AmazonOpenSearchService => {
                let prefix = super::resolve_role_prefix(options.role_prefix, collector)?;
                let (role_name, create_role_name) =
                    super::connector_role_names(&prefix, PROVIDER_SLUG);
                let secret_base = match options.secret_name {
                    Some(name) => name,
                    None => collector.secret_name()?,
                };
                let secret_name = super::derive_secret_name(&secret_base, PROVIDER_SLUG);
                let secret_value = super::secret_payload(PROVIDER_SLUG, &api_key)?;

                tracing::info!(%role_name, %secret_name, "creating OpenAI connector");
                let created = helper
                    .create_connector_with_secret(
                        &secret_name,
                        &secret_value,
                        &role_name,
                        &create_role_name,
                        &body,
                        CONNECTOR_SETTLE_DELAY,
                    )
                    .await?;
                (
                    created.connector_id,
                    ProvisionedResources::Managed {
                        role_name,
                        role_arn: created.role_arn,
                        secret_name,
                        secret_arn: created.secret_arn,
                    },
                )
            }
            ServiceType::OpenSource => {
                let body =
                    substitute_placeholder(&body, CREDENTIAL_PLACEHOLDER, api_key.expose_secret())?;
                tracing::info!("creating OpenAI connector");
                let connector_id = helper.create_connector(&body, None).await?;
                (connector_id, ProvisionedResources::SelfManaged)
            }
        };

        if connector_id.is_empty() {
            tracing::warn!("failed to create OpenAI connector");
            return Ok(false);
        }

        tracing::info!(%connector_id, "successfully created OpenAI connector");
        let connector = helper.get_connector(&connector_id).await?;
        let record = ConnectorRecord {
            connector_id,
            connector,
            resources,
            created_at: chrono::Utc::now(),
        };
        save_config(&record)?;
        Ok(true)
    }

    /// Resolve the template selection key from a caller-supplied model
    /// name, falling back to the interactive menu.
    fn resolve_model_choice(
        &self,
        model_name: Option<&str>,
        collector: &dyn InputCollector,
    ) -> Result<String> {
        if let Some(name) = model_name {
            if let Some(key) = template_registry().find_key(self.service_type, name) {
                return Ok(key);
            }
            tracing::debug!(model_name = name, "model name not in the template table");
        }
        let menu = template_registry().menu(self.service_type);
        collector.choose_model(PROVIDER, &menu)
    }

    /// Resolve a selection key to a connector body.
    ///
    /// Unknown keys and the custom sentinel both route to the collector's
    /// custom-body flow; an unknown key additionally warns. This path
    /// never errors on the choice itself.
    fn connector_body(
        &self,
        model_key: &str,
        collector: &dyn InputCollector,
    ) -> Result<ConnectorBody> {
        match template_registry().resolve(self.service_type, model_key) {
            Some(TemplateChoice::Template(template)) => Ok(ConnectorBody::from_template(template)),
            Some(TemplateChoice::Custom) => collector.custom_connector_body(),
            None => {
                tracing::warn!(choice = model_key, "invalid choice, defaulting to custom model");
                collector.custom_connector_body()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectorError;
    use crate::templates::TemplateMenuEntry;
    use tracing_test::traced_test;

    struct ScriptedCollector {
        model_key: &'static str,
    }

    impl InputCollector for ScriptedCollector {
        fn choose_model(&self, _provider: &str, _menu: &[TemplateMenuEntry]) -> Result<String> {
            Ok(self.model_key.to_string())
        }

        fn api_key(&self, _provider: &str) -> Result<SecretString> {
            Ok(SecretString::from("sk-test"))
        }

        fn custom_connector_body(&self) -> Result<ConnectorBody> {
            let mut headers = std::collections::BTreeMap::new();
            headers.insert("Authorization".to_string(), AUTH_PLACEHOLDER.to_string());
            Ok(ConnectorBody {
                name: "custom connector".to_string(),
                description: "collected interactively".to_string(),
                version: crate::types::CONNECTOR_VERSION.to_string(),
                protocol: crate::types::CONNECTOR_PROTOCOL.to_string(),
                parameters: serde_json::Map::new(),
                credential: None,
                actions: vec![crate::types::ConnectorAction {
                    action_type: "predict".to_string(),
                    method: "POST".to_string(),
                    headers,
                    url: "https://api.openai.com/v1/custom".to_string(),
                    request_body: "{}".to_string(),
                    pre_process_function: None,
                    post_process_function: None,
                }],
            })
        }

        fn role_prefix(&self) -> Result<String> {
            Err(ConnectorError::InputError("not scripted".to_string()))
        }

        fn secret_name(&self) -> Result<String> {
            Err(ConnectorError::InputError("not scripted".to_string()))
        }
    }

    #[test]
    fn test_resolve_model_choice_from_supplied_name() {
        let model = OpenAiModel::new(ServiceType::OpenSource);
        let collector = ScriptedCollector { model_key: "9" };
        let key = model
            .resolve_model_choice(Some("gpt-3.5-turbo-instruct"), &collector)
            .unwrap();
        assert_eq!(key, "2");
    }

    #[test]
    fn test_resolve_model_choice_prompts_for_unknown_name() {
        let model = OpenAiModel::new(ServiceType::OpenSource);
        let collector = ScriptedCollector { model_key: "3" };
        let key = model
            .resolve_model_choice(Some("gpt-imaginary"), &collector)
            .unwrap();
        assert_eq!(key, "3");
    }

    #[test]
    fn test_connector_body_from_template_key() {
        let model = OpenAiModel::new(ServiceType::OpenSource);
        let collector = ScriptedCollector { model_key: "1" };
        let body = model.connector_body("1", &collector).unwrap();
        assert_eq!(body.parameters["model"], "gpt-3.5-turbo");
    }

    #[test]
    fn test_connector_body_custom_sentinel() {
        let model = OpenAiModel::new(ServiceType::AmazonOpenSearchService);
        let collector = ScriptedCollector { model_key: "2" };
        let body = model.connector_body("2", &collector).unwrap();
        assert_eq!(body.name, "custom connector");
    }

    #[traced_test]
    #[test]
    fn test_connector_body_unknown_key_warns_and_degrades() {
        let model = OpenAiModel::new(ServiceType::AmazonOpenSearchService);
        let collector = ScriptedCollector { model_key: "2" };
        let body = model.connector_body("42", &collector).unwrap();
        assert_eq!(body.name, "custom connector");
        assert!(logs_contain("invalid choice, defaulting to custom model"));
    }
}
