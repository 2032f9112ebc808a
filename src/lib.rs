//! # Lorenz-Dynamics
//!
//! Forward Euler integration of the Lorenz system across a sweep of the
//! control parameter r, with PNG rendering of each trajectory.
//!
//! ## The System
//!
//!   dx/dt = s (y - x)
//!   dy/dt = r x - y - x z
//!   dz/dt = x y - b z
//!
//! with s = 10, b = 2.667 and r ∈ {5, 15, 28}, integrated from
//! (0, 1, 1.05) with dt = 0.01 for 10 000 steps.
//!
//! ## Pipeline
//!
//! 1. **Derivative Evaluator** ([`systems::derivative`]): the pure vector
//!    field
//!
//! 2. **Trajectory Integrator** ([`integrator::integrate`]): fixed-step
//!    Euler stepping into a pre-sized buffer of `num_steps + 1` states
//!
//! 3. **Sweep** ([`sweep::run_sweep`]): one independent run per r, each
//!    handed whole to a [`render::TrajectorySink`]
//!
//! Euler integration of a chaotic flow accumulates error and can overflow
//! for large steps. Such values are kept in the trajectory, not reported as
//! errors.
//!
//! ## References
//!
//! - Lorenz, E. N. (1963). Deterministic Nonperiodic Flow. J. Atmos. Sci. 20, 130
//! - Strogatz, S. (1994). Nonlinear Dynamics and Chaos, ch. 9

pub mod integrator;
pub mod render;
pub mod sweep;
pub mod systems;

// Re-exports from systems
pub use systems::{
    // Traits
    Bifurcating,
    Controllable,
    DynamicalSystem,
    // Lorenz
    derivative,
    LorenzParams,
    LorenzState,
    LorenzSystem,
};

// Re-exports from integrator
pub use integrator::{integrate, integrate_with, IntegratorConfig, IntegratorError, Trajectory};

// Re-exports from render
pub use render::{CollectingSink, FigureConfig, FigureSink, RenderError, SaveMode, TrajectorySink};

// Re-exports from sweep
pub use sweep::{run_sweep, SweepConfig, SweepError, SweepRun, STANDARD_R_VALUES};
