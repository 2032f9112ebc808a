//! Integrator Module: Fixed-Step Trajectory Generation
//!
//! Drives forward Euler integration of the Lorenz vector field over a fixed
//! number of steps and returns the full time series:
//!
//!   X(0)   = X₀
//!   X(i+1) = X(i) + f(X(i)) · dt
//!
//! The output buffer is sized once at `num_steps + 1`. There is no step-size
//! control and no stability check: a diverging run keeps its non-finite
//! values.

mod error;
mod euler;
mod trajectory;

pub use error::IntegratorError;
pub use euler::{integrate, integrate_with, IntegratorConfig};
pub use trajectory::Trajectory;
