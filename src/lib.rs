//! # osml-connect — Connector Provisioning for ML Gateways
//!
//! osml-connect builds provider-specific connector descriptors for an
//! ML-model gateway and drives the multi-step provisioning workflow
//! against the remote service: trusted-endpoint registration, model
//! selection, credential collection, body assembly, secret substitution,
//! role/secret naming, and connector registration.
//!
//! The hard parts — authenticated HTTP, retry/backoff, resource creation —
//! live behind the [`traits::ConnectorHelper`] contract supplied by the
//! caller; interactive prompting sits behind [`traits::InputCollector`].
//! This crate owns template resolution, body assembly, and the workflow
//! ordering.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use osml_connect::prelude::*;
//!
//! # async fn run(helper: &dyn ConnectorHelper, collector: &dyn InputCollector)
//! #     -> Result<(), ConnectorError> {
//! let model = OpenAiModel::new(ServiceType::OpenSource);
//! let options = CreateConnectorOptions::new()
//!     .with_model_name("gpt-3.5-turbo")
//!     .with_api_key("sk-...");
//!
//! let created = model
//!     .create_connector(helper, collector, options, |record| {
//!         println!("connector {} registered", record.connector_id);
//!         Ok(())
//!     })
//!     .await?;
//! assert!(created);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod error;
pub mod providers;
pub mod substitution;
pub mod templates;
pub mod traits;
pub mod types;

pub use error::{ConnectorError, Result};

/// Common imports for downstream code.
pub mod prelude {
    pub use crate::error::{ConnectorError, Result};
    pub use crate::providers::openai::{CreateConnectorOptions, OpenAiModel};
    pub use crate::substitution::{AUTH_PLACEHOLDER, CREDENTIAL_PLACEHOLDER};
    pub use crate::templates::{TemplateChoice, TemplateMenuEntry, template_registry};
    pub use crate::traits::{ConnectorHelper, InputCollector};
    pub use crate::types::{
        ConnectorAction, ConnectorBody, ConnectorRecord, ProvisionedResources,
        SecretBackedConnector, ServiceType,
    };
}
