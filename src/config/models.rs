//! Typed delivery config model
//!
//! Only the structure the preprocessor touches is modeled: the root
//! `application`/`serviceAccount`/`environments` keys, each environment's
//! `resources`, and each resource's `spec`. Every other key, at every level,
//! is captured by a flattened [`Mapping`] and serialized back verbatim.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Root delivery config document.
///
/// `application` and `environments` are required; a document missing either
/// fails deserialization, which is the only structural validation performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Application identifier, copied onto every resource's metadata
    pub application: String,
    /// Delivery system identity; always rewritten to `"keel"` on output
    #[serde(
        rename = "serviceAccount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_account: Option<String>,
    /// Deployment environments, in authored order
    pub environments: Vec<Environment>,
    /// Root keys the preprocessor does not model
    #[serde(flatten)]
    pub extra: Mapping,
}

/// A named deployment target (e.g. staging, production).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// Deployable resources, in authored order
    pub resources: Vec<Resource>,
    /// Environment keys the preprocessor does not model (name, constraints, ...)
    #[serde(flatten)]
    pub extra: Mapping,
}

/// A single deployable unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Desired-state block; must be a mapping
    pub spec: ResourceSpec,
    /// Resource keys the preprocessor does not model (kind, apiVersion, ...)
    #[serde(flatten)]
    pub extra: Mapping,
}

/// A resource's desired-state block.
///
/// `metadata` is held loosely typed: whatever the author wrote there is
/// discarded and replaced wholesale by the preprocessor, so its input shape
/// never matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSpec {
    /// Replaced with `{application: <root application>}` on output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// The rest of the spec, passed through unchanged
    #[serde(flatten)]
    pub extra: Mapping,
}
