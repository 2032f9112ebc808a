//! Dynamical System Traits: Standardized Stepping API
//!
//! This module defines the traits a stateful system implements to be
//! advanced step by step, swept over a control parameter, and described
//! by its known bifurcation points.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DynamicalSystem Trait                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  + step()              - Advance system by dt               │
//! │  + run(n)              - Run n steps                        │
//! │  + record(n)           - Run n steps, collecting states     │
//! │  + state()             - Current state snapshot             │
//! │  + state_dimension()   - Dimension of phase space           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

/// Trait for deterministic, fixed-step dynamical systems
pub trait DynamicalSystem {
    /// State type for this system
    type State;

    /// Advance system by one timestep
    fn step(&mut self);

    /// Run multiple timesteps
    fn run(&mut self, n_steps: usize) {
        for _ in 0..n_steps {
            self.step();
        }
    }

    /// Run `n_steps` timesteps and return every visited state,
    /// including the current one (length `n_steps + 1`)
    fn record(&mut self, n_steps: usize) -> Vec<Self::State> {
        let mut states = Vec::with_capacity(n_steps + 1);
        states.push(self.state());
        for _ in 0..n_steps {
            self.step();
            states.push(self.state());
        }
        states
    }

    /// Get current state snapshot
    fn state(&self) -> Self::State;

    /// Dimension of state space
    fn state_dimension(&self) -> usize;

    /// Number of steps taken since construction
    fn steps_taken(&self) -> usize;

    /// Integration timestep
    fn dt(&self) -> f64;

    /// Elapsed simulation time
    fn time(&self) -> f64 {
        self.steps_taken() as f64 * self.dt()
    }
}

/// Trait for systems with controllable parameters
pub trait Controllable {
    /// Parameter type (Rayleigh number, coupling, temperature, ...)
    type Parameter;

    /// Set control parameter
    fn set_parameter(&mut self, param: Self::Parameter);

    /// Get current parameter value
    fn get_parameter(&self) -> Self::Parameter;

    /// Ramp parameter gradually, running `steps_per_increment` steps
    /// between each change of size `rate`
    fn ramp_parameter(&mut self, target: Self::Parameter, rate: f64, steps_per_increment: usize);
}

/// Trait for systems exhibiting bifurcations
pub trait Bifurcating: DynamicalSystem + Controllable {
    /// Theoretical critical parameter value (if known)
    fn critical_parameter(&self) -> Option<f64> {
        None
    }

    /// Name of the bifurcation type
    fn bifurcation_type(&self) -> &'static str;
}
