//! Allocation Policy Module
//!
//! The tunable heuristic that drives simulated outcomes.
//!
//! # Overview
//!
//! A policy decides how rotable kits are shared between cabin classes:
//! - `biases`: priority given to each class during allocation
//! - `distanceThresholds`: short / medium / long haul breakpoints (km)
//! - `costAlpha`: operational-cost vs. penalty sensitivity per class
//! - `holdOnLong`: suppress movement of a class on long-haul flights
//! - `episodes` / `seed`: run settings
//!
//! Callers submit a `PolicyParams` (wire form), or raw JSON through
//! `ParamsDocument`. `validate` checks it and produces a `ValidParams`, the
//! only form the simulation accepts.
//!
//! # Example Usage
//!
//! ```rust
//! use kit_simulator_core_rs::models::CabinClass;
//! use kit_simulator_core_rs::policy::{validate, PolicyParams};
//!
//! let params = PolicyParams::default().with_bias(CabinClass::F, 1.4);
//! let valid = validate(&params).expect("default-derived params are valid");
//! assert_eq!(valid.biases()[CabinClass::F], 1.4);
//! ```

pub mod document;
pub mod params;
pub mod validation;

pub use document::ParamsDocument;
pub use params::{DistanceThresholds, PolicyParams, ValidParams};
pub use validation::{
    validate, ValidationError, ValidationIssue, ValidationResult, BIAS_RANGE, COST_ALPHA_RANGE,
};
