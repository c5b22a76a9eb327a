//! Defaulting stage for PodAutoscaler specs.
//!
//! Runs on every admission review, before validation and persistence. Each
//! field rule is independent: test against the unset sentinel, assign the
//! canonical value from the [`SpecDefaults`] table, otherwise leave the field
//! untouched. Unrecognized values pass through for validation to reject.
//!
//! The transform is total (never fails), idempotent, and free of I/O, so it
//! needs no coordination across callers operating on distinct resources.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{ConcurrencyModel, PodAutoscaler, PodAutoscalerSpec, ServingState};

/// Canonical values assigned to unset PodAutoscalerSpec fields.
///
/// An explicit policy table rather than hard-coded literals, so an admission
/// pipeline (or a test) can carry an alternate policy without touching the
/// defaulting logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDefaults {
    pub serving_state: ServingState,
    pub concurrency_model: ConcurrencyModel,
}

impl Default for SpecDefaults {
    fn default() -> Self {
        Self {
            serving_state: ServingState::active(),
            concurrency_model: ConcurrencyModel::multi(),
        }
    }
}

/// Complete the unset fields of a PodAutoscaler spec.
///
/// Fields already holding a non-sentinel value are returned unchanged; no
/// normalization or validation happens here.
pub fn default_pod_autoscaler_spec(spec: &mut PodAutoscalerSpec, defaults: &SpecDefaults) {
    if spec.serving_state.is_unset() {
        debug!(value = defaults.serving_state.as_str(), "defaulted servingState");
        spec.serving_state = defaults.serving_state.clone();
    }
    if spec.concurrency_model.is_unset() {
        debug!(value = defaults.concurrency_model.as_str(), "defaulted concurrencyModel");
        spec.concurrency_model = defaults.concurrency_model.clone();
    }
}

/// Complete the unset fields of a PodAutoscaler resource.
///
/// The parent has no defaultable fields of its own; this delegates to
/// [`default_pod_autoscaler_spec`].
pub fn default_pod_autoscaler(pa: &mut PodAutoscaler, defaults: &SpecDefaults) {
    default_pod_autoscaler_spec(&mut pa.spec, defaults);
}

impl PodAutoscalerSpec {
    /// Method-syntax forwarder to [`default_pod_autoscaler_spec`] with the
    /// canonical policy.
    pub fn apply_defaults(&mut self) {
        default_pod_autoscaler_spec(self, &SpecDefaults::default());
    }
}

impl PodAutoscaler {
    /// Method-syntax forwarder to [`default_pod_autoscaler`] with the
    /// canonical policy.
    pub fn apply_defaults(&mut self) {
        default_pod_autoscaler(self, &SpecDefaults::default());
    }
}
