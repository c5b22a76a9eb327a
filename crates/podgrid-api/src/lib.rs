//! podgrid-api — the PodAutoscaler resource model and its defaulting stage.
//!
//! A `PodAutoscaler` declares autoscaling intent for a workload: whether the
//! workload should be serving traffic (`ServingState`) and how an instance
//! accepts concurrent requests (`ConcurrencyModel`). Resource authors may
//! leave either field unset; before a spec is validated or persisted, the
//! admission path runs it through [`defaults::default_pod_autoscaler`] so
//! every downstream consumer (validation, the reconciler, metrics collectors)
//! sees fully-populated specs and never branches on "unset".
//!
//! Defaulting is a pure single-pass transform: idempotent, total, and safe to
//! apply on every admission review without overwriting explicit user values.
//! Validation of the populated values is a separate stage and lives with the
//! hosting controller, not here.

pub mod defaults;
pub mod types;

pub use defaults::{SpecDefaults, default_pod_autoscaler, default_pod_autoscaler_spec};
pub use types::*;
