//! Simulation Transform
//!
//! Maps a validated policy and the reference dataset to a comparison of
//! the fixed baseline against the tuned outcome.
//!
//! # Critical Invariants
//!
//! 1. Deterministic: identical inputs give bit-identical results
//! 2. The baseline is returned unchanged
//! 3. Penalties never fall below 68% and operational cost never below 90%
//!    of the reference figures
//! 4. The penalty breakdown keeps the reference categories, order and
//!    colors
//! 5. Every figure is rounded half-up to an integer

mod insight;
pub mod transform;

pub use transform::{
    round_half_up, scale_factors, simulate, ScaleFactors, OPERATIONAL_SCALE_FLOOR,
    PENALTY_SCALE_FLOOR, REFERENCE_BIAS_F, REFERENCE_BIAS_J, TUNED_NAME,
};
