//! # delivery-preprocess
//!
//! Pipeline filter that augments a Keel delivery config with fields the
//! delivery system requires but config authors do not write:
//!
//! - sets the root `serviceAccount` to `"keel"`,
//! - stamps `spec.metadata.application` onto every resource in every
//!   environment, copied from the root `application` field.
//!
//! The binary reads one YAML document from stdin and writes the augmented
//! document to stdout, so it slots between a config author and the delivery
//! orchestrator:
//!
//! ```bash
//! cat config.yaml | preprocess-delivery-config | next-stage
//! ```
//!
//! ## Library usage
//!
//! ```rust
//! use delivery_preprocess::pipeline::preprocess;
//!
//! let input = "\
//! application: myapp
//! environments:
//!   - resources:
//!       - spec:
//!           replicas: 2
//! ";
//! let output = preprocess(input).unwrap();
//! assert!(output.contains("serviceAccount: keel"));
//! ```

pub mod config;
pub mod pipeline;
pub mod transform;
pub mod utils;

pub use config::{DeliveryConfig, Environment, Resource, ResourceSpec};
pub use transform::{SERVICE_ACCOUNT, apply_delivery_defaults};
pub use utils::error::{PreprocessError, Result};
