//! Error types for trajectory integration.

use thiserror::Error;

/// Argument domain errors. Numerical blow-up during a run is not an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegratorError {
    /// Step size is zero, negative, or not finite.
    #[error("Invalid step size dt = {dt}: must be finite and positive")]
    InvalidStep {
        /// Offending step size
        dt: f64,
    },

    /// Initial state has a NaN or infinite component.
    #[error("Non-finite initial state ({x}, {y}, {z})")]
    NonFiniteInitialState { x: f64, y: f64, z: f64 },

    /// A vector field parameter is NaN or infinite.
    #[error("Non-finite parameter {name} = {value}")]
    NonFiniteParameter {
        /// Parameter name (s, r or b)
        name: &'static str,
        /// Offending value
        value: f64,
    },
}
