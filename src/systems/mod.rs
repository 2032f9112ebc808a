//! Physical Systems Module: Dynamical Models
//!
//! - **Lorenz**: Convection rolls, from fixed points to the strange attractor
//!
//! The Lorenz module also exposes the pure vector field used by the
//! trajectory integrator.

pub mod lorenz;
pub mod traits;

pub use lorenz::{derivative, LorenzParams, LorenzState, LorenzSystem};
pub use traits::{Bifurcating, Controllable, DynamicalSystem};
