//! Built-in OpenAI connector templates.
//!
//! The managed service exposes the embedding connector only (chat and
//! completion go through the custom flow there); self-managed deployments
//! get chat, completion, and embedding templates carrying an inline
//! `openAI_key` credential.

use std::collections::BTreeMap;

use super::{ConnectorTemplate, TemplateChoice, TemplateRegistry};
use crate::types::ServiceType;

/// OpenAI model constants
pub mod models {
    /// Chat model used by the self-managed chat template
    pub const CHAT: &str = "gpt-3.5-turbo";

    /// Completion model used by the self-managed completion template
    pub const COMPLETION: &str = "gpt-3.5-turbo-instruct";

    /// Embedding model used by both deployment modes
    pub const EMBEDDING: &str = "text-embedding-ada-002";
}

const EMBEDDING_URL: &str = "https://api.openai.com/v1/embeddings";
const CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const COMPLETION_URL: &str = "https://api.openai.com/v1/completions";

const EMBEDDING_PRE_PROCESS: &str = "connector.pre_process.openai.embedding";
const EMBEDDING_POST_PROCESS: &str = "connector.post_process.openai.embedding";

fn openai_credential() -> Option<BTreeMap<String, String>> {
    let mut credential = BTreeMap::new();
    credential.insert(
        "openAI_key".to_string(),
        crate::substitution::CREDENTIAL_PLACEHOLDER.to_string(),
    );
    Some(credential)
}

fn embedding_template(credential: Option<BTreeMap<String, String>>) -> ConnectorTemplate {
    ConnectorTemplate {
        name: "OpenAI embedding model connector".to_string(),
        description: "Connector for OpenAI embedding model".to_string(),
        model: models::EMBEDDING.to_string(),
        url: EMBEDDING_URL.to_string(),
        request_body: "{ \"input\": ${parameters.input}, \"model\": \"${parameters.model}\" }"
            .to_string(),
        credential,
        pre_process_function: Some(EMBEDDING_PRE_PROCESS.to_string()),
        post_process_function: Some(EMBEDDING_POST_PROCESS.to_string()),
        parameters: serde_json::Map::new(),
    }
}

fn chat_template() -> ConnectorTemplate {
    ConnectorTemplate {
        name: "OpenAI chat model connector".to_string(),
        description: "The connector to the OpenAI chat model".to_string(),
        model: models::CHAT.to_string(),
        url: CHAT_URL.to_string(),
        request_body:
            "{ \"model\": \"${parameters.model}\", \"messages\": ${parameters.messages} }"
                .to_string(),
        credential: openai_credential(),
        pre_process_function: None,
        post_process_function: None,
        parameters: serde_json::Map::new(),
    }
}

fn completion_template() -> ConnectorTemplate {
    let mut parameters = serde_json::Map::new();
    parameters.insert("max_tokens".to_string(), serde_json::json!(7));
    parameters.insert("temperature".to_string(), serde_json::json!(0));
    ConnectorTemplate {
        name: "OpenAI completion model connector".to_string(),
        description: "The connector to the OpenAI completion model".to_string(),
        model: models::COMPLETION.to_string(),
        url: COMPLETION_URL.to_string(),
        request_body: "{ \"model\": \"${parameters.model}\", \"prompt\": \"${parameters.prompt}\", \"max_tokens\": ${parameters.max_tokens}, \"temperature\": ${parameters.temperature} }"
            .to_string(),
        credential: openai_credential(),
        pre_process_function: None,
        post_process_function: None,
        parameters,
    }
}

/// Register the built-in OpenAI templates for both deployment modes.
pub(super) fn register_openai_templates(registry: &mut TemplateRegistry) {
    registry.register(
        ServiceType::AmazonOpenSearchService,
        "1",
        TemplateChoice::Template(embedding_template(None)),
    );
    registry.register(
        ServiceType::AmazonOpenSearchService,
        "2",
        TemplateChoice::Custom,
    );

    registry.register(
        ServiceType::OpenSource,
        "1",
        TemplateChoice::Template(chat_template()),
    );
    registry.register(
        ServiceType::OpenSource,
        "2",
        TemplateChoice::Template(completion_template()),
    );
    registry.register(
        ServiceType::OpenSource,
        "3",
        TemplateChoice::Template(embedding_template(openai_credential())),
    );
    registry.register(ServiceType::OpenSource, "4", TemplateChoice::Custom);
}
