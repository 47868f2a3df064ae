//! Connector template registry.
//!
//! This module provides a configuration-driven registry of connector
//! templates, keyed by deployment mode and a menu selection key. Instead
//! of hand-building a body per model, provisioning drivers resolve a
//! template and assemble it into a [`ConnectorBody`](crate::types::ConnectorBody).
//!
//! A key can also map to the "Custom model" sentinel, which tells the
//! driver to collect a fully custom body interactively instead of using a
//! template. Unknown keys degrade to the same custom flow; resolution
//! never fails.

pub mod openai;

use std::collections::{BTreeMap, HashMap};

use crate::types::ServiceType;

/// A static connector template.
///
/// Templates are read-only data baked into the registry; assembly copies
/// out of them and never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorTemplate {
    /// Connector display name
    pub name: String,
    /// Connector description
    pub description: String,
    /// Model identifier the connector targets
    pub model: String,
    /// Model API endpoint
    pub url: String,
    /// Request body with `${parameters.*}` placeholders
    pub request_body: String,
    /// Inline credential map, for self-managed deployments only
    pub credential: Option<BTreeMap<String, String>>,
    /// Optional pre-process function identifier
    pub pre_process_function: Option<String>,
    /// Optional post-process function identifier
    pub post_process_function: Option<String>,
    /// Default parameters merged on top of the base model parameter
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

/// What a selection key resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateChoice {
    /// A concrete template
    Template(ConnectorTemplate),
    /// The "Custom model" sentinel: prompt for a fully custom body
    Custom,
}

/// One entry of the interactive model-selection menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMenuEntry {
    /// Selection key ("1", "2", ...)
    pub key: String,
    /// Display label: the template name, or "Custom model"
    pub label: String,
}

/// Label shown for the custom-model sentinel.
pub const CUSTOM_MODEL_LABEL: &str = "Custom model";

/// Registry of built-in connector templates.
pub struct TemplateRegistry {
    tables: HashMap<ServiceType, BTreeMap<String, TemplateChoice>>,
}

impl TemplateRegistry {
    /// Create a new registry with the built-in templates.
    pub fn new() -> Self {
        let mut registry = Self {
            tables: HashMap::new(),
        };
        openai::register_openai_templates(&mut registry);
        registry
    }

    /// Register a template choice under `(service_type, key)`.
    pub fn register(&mut self, service_type: ServiceType, key: &str, choice: TemplateChoice) {
        self.tables
            .entry(service_type)
            .or_default()
            .insert(key.to_string(), choice);
    }

    /// Resolve a selection key for the given deployment mode.
    ///
    /// `None` means the key is not registered; callers treat that the same
    /// as [`TemplateChoice::Custom`], after warning about the invalid
    /// choice.
    pub fn resolve(&self, service_type: ServiceType, key: &str) -> Option<&TemplateChoice> {
        self.tables.get(&service_type)?.get(key)
    }

    /// Menu entries for the given deployment mode, in key order.
    pub fn menu(&self, service_type: ServiceType) -> Vec<TemplateMenuEntry> {
        self.tables
            .get(&service_type)
            .map(|table| {
                table
                    .iter()
                    .map(|(key, choice)| TemplateMenuEntry {
                        key: key.clone(),
                        label: match choice {
                            TemplateChoice::Template(template) => template.name.clone(),
                            TemplateChoice::Custom => CUSTOM_MODEL_LABEL.to_string(),
                        },
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Find the selection key whose template matches a model name.
    ///
    /// Matches case-insensitively against the template's model identifier
    /// and display name, so callers can pass either
    /// `"text-embedding-ada-002"` or the menu label.
    pub fn find_key(&self, service_type: ServiceType, model_name: &str) -> Option<String> {
        let needle = model_name.to_lowercase();
        self.tables.get(&service_type)?.iter().find_map(|(key, choice)| {
            match choice {
                TemplateChoice::Template(template)
                    if template.model.to_lowercase() == needle
                        || template.name.to_lowercase() == needle =>
                {
                    Some(key.clone())
                }
                _ => None,
            }
        })
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    static ref TEMPLATE_REGISTRY: TemplateRegistry = TemplateRegistry::new();
}

/// Access the global template registry.
pub fn template_registry() -> &'static TemplateRegistry {
    &TEMPLATE_REGISTRY
}
