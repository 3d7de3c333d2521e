//! Delivery-system field injection
//!
//! The two mutations the delivery system expects of every config it receives:
//! a fixed service account at the root, and per-resource metadata carrying the
//! application identifier.

use crate::config::DeliveryConfig;
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Service account identity stamped onto every preprocessed config.
pub const SERVICE_ACCOUNT: &str = "keel";

const METADATA_APPLICATION_KEY: &str = "application";

/// Apply the delivery-system defaults in place.
///
/// Sets the root `serviceAccount` to [`SERVICE_ACCOUNT`] and rewrites every
/// resource's `spec.metadata` to `{application: <root application>}`. Both
/// writes overwrite unconditionally; prior values at those two keys are
/// discarded, never merged.
pub fn apply_delivery_defaults(config: &mut DeliveryConfig) {
    config.service_account = Some(SERVICE_ACCOUNT.to_string());

    let mut resource_count = 0usize;
    for environment in &mut config.environments {
        for resource in &mut environment.resources {
            resource.spec.metadata = Some(resource_metadata(&config.application));
            resource_count += 1;
        }
    }

    debug!(
        application = %config.application,
        environments = config.environments.len(),
        resources = resource_count,
        "applied delivery defaults"
    );
}

fn resource_metadata(application: &str) -> Value {
    let mut metadata = Mapping::new();
    metadata.insert(
        Value::String(METADATA_APPLICATION_KEY.to_string()),
        Value::String(application.to_string()),
    );
    Value::Mapping(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> DeliveryConfig {
        serde_yaml::from_str(input).unwrap()
    }

    #[test]
    fn sets_service_account() {
        let mut config = parse("application: myapp\nenvironments: []\n");
        apply_delivery_defaults(&mut config);
        assert_eq!(config.service_account.as_deref(), Some(SERVICE_ACCOUNT));
    }

    #[test]
    fn overwrites_existing_service_account() {
        let mut config = parse(
            "application: myapp\nserviceAccount: someone-else\nenvironments: []\n",
        );
        apply_delivery_defaults(&mut config);
        assert_eq!(config.service_account.as_deref(), Some("keel"));
    }

    #[test]
    fn stamps_metadata_on_every_resource() {
        let mut config = parse(
            "\
application: myapp
environments:
  - resources:
      - spec:
          replicas: 2
      - spec:
          replicas: 3
  - resources:
      - spec:
          image: nginx
",
        );
        apply_delivery_defaults(&mut config);

        for environment in &config.environments {
            for resource in &environment.resources {
                let metadata = resource.spec.metadata.as_ref().unwrap();
                assert_eq!(
                    metadata.get("application"),
                    Some(&Value::String("myapp".into()))
                );
            }
        }
    }

    #[test]
    fn replaces_existing_metadata_entirely() {
        let mut config = parse(
            "\
application: myapp
environments:
  - resources:
      - spec:
          metadata:
            application: other
            team: platform
",
        );
        apply_delivery_defaults(&mut config);

        let metadata = config.environments[0].resources[0]
            .spec
            .metadata
            .as_ref()
            .unwrap();
        let mapping = metadata.as_mapping().unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.get("application"),
            Some(&Value::String("myapp".into()))
        );
    }

    #[test]
    fn empty_environments_is_a_no_op() {
        let mut config = parse("application: myapp\nenvironments: []\n");
        apply_delivery_defaults(&mut config);
        assert!(config.environments.is_empty());
    }

    #[test]
    fn empty_resources_is_a_no_op() {
        let mut config = parse(
            "application: myapp\nenvironments:\n  - resources: []\n",
        );
        apply_delivery_defaults(&mut config);
        assert!(config.environments[0].resources.is_empty());
    }
}
