//! Resource types for the PodAutoscaler API.
//!
//! `ServingState` and `ConcurrencyModel` are string-backed rather than closed
//! enums: the wire format reserves the empty string for "not set by the
//! author", and unrecognized members must survive defaulting untouched so the
//! validation stage can reject them with a real error message. A closed enum
//! would reject them at deserialization instead.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the workload a PodAutoscaler manages.
///
/// Recognized members are [`ServingState::active`], [`ServingState::reserve`],
/// and [`ServingState::retired`]. The empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServingState(String);

impl ServingState {
    /// The workload should be actively serving traffic.
    pub fn active() -> Self {
        Self("Active".to_string())
    }

    /// The workload is provisioned but held out of the serving path.
    pub fn reserve() -> Self {
        Self("Reserve".to_string())
    }

    /// The workload is permanently out of service.
    pub fn retired() -> Self {
        Self("Retired".to_string())
    }

    /// True when the author left the field unset.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServingState {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How a single workload instance accepts concurrent requests.
///
/// Recognized members are [`ConcurrencyModel::single`] and
/// [`ConcurrencyModel::multi`]. The empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcurrencyModel(String);

impl ConcurrencyModel {
    /// One request in flight per instance.
    pub fn single() -> Self {
        Self("Single".to_string())
    }

    /// Arbitrarily many requests in flight per instance.
    pub fn multi() -> Self {
        Self("Multi".to_string())
    }

    /// True when the author left the field unset.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConcurrencyModel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Specification half of a PodAutoscaler resource.
///
/// Authors populate zero or more fields; absent wire fields deserialize to
/// the unset sentinel and are completed by the defaulting stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodAutoscalerSpec {
    pub serving_state: ServingState,
    pub concurrency_model: ConcurrencyModel,
}

/// Declarative autoscaling intent for a workload (namespace-scoped).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodAutoscaler {
    pub namespace: String,
    pub name: String,
    pub spec: PodAutoscalerSpec,
}

impl PodAutoscaler {
    /// Build the composite key for cluster-wide lookups.
    pub fn resource_key(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_as_unset() {
        let spec: PodAutoscalerSpec = serde_json::from_str("{}").unwrap();
        assert!(spec.serving_state.is_unset());
        assert!(spec.concurrency_model.is_unset());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let pa: PodAutoscaler = serde_json::from_str(
            r#"{
                "namespace": "default",
                "name": "api",
                "spec": { "servingState": "Reserve", "concurrencyModel": "Single" }
            }"#,
        )
        .unwrap();

        assert_eq!(pa.spec.serving_state, ServingState::reserve());
        assert_eq!(pa.spec.concurrency_model, ConcurrencyModel::single());
        assert_eq!(pa.resource_key(), "default/api");
    }

    #[test]
    fn unrecognized_members_survive_deserialization() {
        let spec: PodAutoscalerSpec =
            serde_json::from_str(r#"{ "servingState": "Hibernating" }"#).unwrap();
        assert_eq!(spec.serving_state.as_str(), "Hibernating");
        assert!(!spec.serving_state.is_unset());
    }
}
