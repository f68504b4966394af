//! Python bindings (PyO3)
//!
//! Only compiled with the `pyo3` feature.

pub mod service;
pub mod types;
