//! Core data model for connector provisioning.
//!
//! The central document is [`ConnectorBody`], the JSON-serializable
//! descriptor the remote ML service consumes when registering a connector.
//! Optional fields are modeled explicitly and skipped during serialization
//! when absent, so the emitted document only carries what the source
//! template declared.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::templates::ConnectorTemplate;

/// Connector descriptor version emitted for every assembled body.
pub const CONNECTOR_VERSION: &str = "1.0";

/// Connector protocol emitted for every assembled body.
pub const CONNECTOR_PROTOCOL: &str = "http";

/// Deployment mode of the remote ML service.
///
/// The mode is fixed at driver construction and selects both the template
/// subset and the provisioning branch: the managed service requires an
/// IAM-style role and a stored secret, while a self-managed deployment
/// embeds the credential directly in the connector body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Managed cloud offering; connectors reference a role and a secret
    #[serde(rename = "amazon-opensearch-service")]
    AmazonOpenSearchService,
    /// Self-managed/open-source deployment; credentials ride inline
    #[serde(rename = "open-source")]
    OpenSource,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AmazonOpenSearchService => write!(f, "amazon-opensearch-service"),
            Self::OpenSource => write!(f, "open-source"),
        }
    }
}

/// A single action entry of a connector body.
///
/// Assembled bodies always contain exactly one predict action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorAction {
    /// Action type, `"predict"` for every built-in template
    pub action_type: String,
    /// HTTP method the remote service uses when invoking the model API
    pub method: String,
    /// Request headers; `Authorization` starts as the `${auth}` placeholder
    pub headers: BTreeMap<String, String>,
    /// Model API endpoint
    pub url: String,
    /// Request body template, `${parameters.*}` placeholders unresolved
    pub request_body: String,
    /// Optional pre-process function identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_process_function: Option<String>,
    /// Optional post-process function identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_process_function: Option<String>,
}

/// Fully assembled connector descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorBody {
    /// Connector display name
    pub name: String,
    /// Connector description
    pub description: String,
    /// Descriptor version, fixed at [`CONNECTOR_VERSION`]
    pub version: String,
    /// Transport protocol, fixed at [`CONNECTOR_PROTOCOL`]
    pub protocol: String,
    /// Merged parameters: base model name plus template defaults
    pub parameters: serde_json::Map<String, serde_json::Value>,
    /// Inline credential map; only present for self-managed templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<BTreeMap<String, String>>,
    /// Action list; exactly one entry for assembled bodies
    pub actions: Vec<ConnectorAction>,
}

impl ConnectorBody {
    /// Assemble a connector body from a resolved template.
    ///
    /// Base parameters are `{ "model": template.model }`; template defaults
    /// are merged on top and win on key collision. The `${auth}`
    /// Authorization placeholder and any `${parameters.*}` placeholders in
    /// the request body are left unresolved for later substitution.
    pub fn from_template(template: &ConnectorTemplate) -> Self {
        let mut parameters = serde_json::Map::new();
        parameters.insert(
            "model".to_string(),
            serde_json::Value::String(template.model.clone()),
        );
        for (key, value) in &template.parameters {
            parameters.insert(key.clone(), value.clone());
        }

        let mut headers = BTreeMap::new();
        headers.insert(
            "Authorization".to_string(),
            crate::substitution::AUTH_PLACEHOLDER.to_string(),
        );

        Self {
            name: template.name.clone(),
            description: template.description.clone(),
            version: CONNECTOR_VERSION.to_string(),
            protocol: CONNECTOR_PROTOCOL.to_string(),
            parameters,
            credential: template.credential.clone(),
            actions: vec![ConnectorAction {
                action_type: "predict".to_string(),
                method: "POST".to_string(),
                headers,
                url: template.url.clone(),
                request_body: template.request_body.clone(),
                pre_process_function: template.pre_process_function.clone(),
                post_process_function: template.post_process_function.clone(),
            }],
        }
    }
}

/// Identifiers returned by the helper's combined connector-with-secret call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretBackedConnector {
    /// Id of the registered connector; empty means the creation failed
    pub connector_id: String,
    /// ARN of the role the connector assumes
    pub role_arn: String,
    /// ARN of the secret holding the API key
    pub secret_arn: String,
}

/// Resources provisioned alongside a connector, tagged by deployment mode.
///
/// The managed branch carries the role and secret identifiers it created;
/// the self-managed branch has nothing beyond the connector itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionedResources {
    /// Managed-service provisioning: role and secret back the connector
    Managed {
        /// Name of the role the connector assumes
        role_name: String,
        /// ARN of that role
        role_arn: String,
        /// Name of the stored secret
        secret_name: String,
        /// ARN of that secret
        secret_arn: String,
    },
    /// Self-managed provisioning: credentials ride inline, nothing else created
    SelfManaged,
}

impl ProvisionedResources {
    /// Role name, if the managed branch created one.
    pub fn role_name(&self) -> Option<&str> {
        match self {
            Self::Managed { role_name, .. } => Some(role_name),
            Self::SelfManaged => None,
        }
    }

    /// Role ARN, if the managed branch created one.
    pub fn role_arn(&self) -> Option<&str> {
        match self {
            Self::Managed { role_arn, .. } => Some(role_arn),
            Self::SelfManaged => None,
        }
    }

    /// Secret name, if the managed branch created one.
    pub fn secret_name(&self) -> Option<&str> {
        match self {
            Self::Managed { secret_name, .. } => Some(secret_name),
            Self::SelfManaged => None,
        }
    }

    /// Secret ARN, if the managed branch created one.
    pub fn secret_arn(&self) -> Option<&str> {
        match self {
            Self::Managed { secret_arn, .. } => Some(secret_arn),
            Self::SelfManaged => None,
        }
    }
}

/// Record handed to the save callback after a successful provisioning run.
#[derive(Debug, Clone)]
pub struct ConnectorRecord {
    /// Id of the registered connector
    pub connector_id: String,
    /// Full connector representation fetched from the remote service
    pub connector: serde_json::Value,
    /// Mode-tagged resources created alongside the connector
    pub resources: ProvisionedResources,
    /// When the record was produced
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_with_extras() -> ConnectorTemplate {
        let mut parameters = serde_json::Map::new();
        parameters.insert("max_tokens".to_string(), serde_json::json!(7));
        let mut credential = BTreeMap::new();
        credential.insert("openAI_key".to_string(), "${credential}".to_string());
        ConnectorTemplate {
            name: "test connector".to_string(),
            description: "a test connector".to_string(),
            model: "test-model".to_string(),
            url: "https://api.example.com/v1/test".to_string(),
            request_body: "{ \"model\": \"${parameters.model}\" }".to_string(),
            credential: Some(credential),
            pre_process_function: Some("pre".to_string()),
            post_process_function: None,
            parameters,
        }
    }

    #[test]
    fn test_from_template_merges_parameters() {
        let body = ConnectorBody::from_template(&template_with_extras());
        assert_eq!(body.parameters["model"], "test-model");
        assert_eq!(body.parameters["max_tokens"], 7);
        assert_eq!(body.version, CONNECTOR_VERSION);
        assert_eq!(body.protocol, CONNECTOR_PROTOCOL);
    }

    #[test]
    fn test_from_template_template_defaults_win_on_collision() {
        let mut template = template_with_extras();
        template
            .parameters
            .insert("model".to_string(), serde_json::json!("override"));
        let body = ConnectorBody::from_template(&template);
        assert_eq!(body.parameters["model"], "override");
    }

    #[test]
    fn test_from_template_single_predict_action() {
        let body = ConnectorBody::from_template(&template_with_extras());
        assert_eq!(body.actions.len(), 1);
        let action = &body.actions[0];
        assert_eq!(action.action_type, "predict");
        assert_eq!(action.method, "POST");
        assert_eq!(
            action.headers["Authorization"],
            crate::substitution::AUTH_PLACEHOLDER
        );
        assert_eq!(action.pre_process_function.as_deref(), Some("pre"));
        assert_eq!(action.post_process_function, None);
    }

    #[test]
    fn test_optional_fields_skipped_in_serialization() {
        let mut template = template_with_extras();
        template.credential = None;
        template.pre_process_function = None;
        let body = ConnectorBody::from_template(&template);
        let serialized = serde_json::to_string(&body).unwrap();
        assert!(!serialized.contains("credential"));
        assert!(!serialized.contains("pre_process_function"));
        assert!(!serialized.contains("post_process_function"));
    }

    #[test]
    fn test_resources_accessors() {
        let managed = ProvisionedResources::Managed {
            role_name: "r".to_string(),
            role_arn: "arn:r".to_string(),
            secret_name: "s".to_string(),
            secret_arn: "arn:s".to_string(),
        };
        assert_eq!(managed.role_name(), Some("r"));
        assert_eq!(managed.secret_arn(), Some("arn:s"));
        assert_eq!(ProvisionedResources::SelfManaged.role_name(), None);
        assert_eq!(ProvisionedResources::SelfManaged.secret_name(), None);
    }
}
