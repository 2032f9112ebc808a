//! Lorenz System: Convection and the Strange Attractor
//!
//! The Lorenz equations model a thin layer of fluid heated from below:
//!
//!   dx/dt = s (y - x)
//!   dy/dt = r x - y - x z
//!   dz/dt = x y - b z
//!
//! where:
//! - x: Intensity of convective motion
//! - y, z: Temperature deviations (horizontal, vertical)
//! - s: Prandtl number (fixed)
//! - b: Geometric factor (fixed)
//! - r: Rayleigh number analog (control parameter)
//!
//! ## Regimes
//!
//! - r < 1: Origin is the only stable fixed point (conduction)
//! - 1 < r < r_H: Two stable fixed points C± = (±√(b(r-1)), ±√(b(r-1)), r-1)
//! - r > r_H: Fixed points lose stability, trajectories wander on the
//!   strange attractor
//!
//! with the subcritical Hopf point r_H = s (s + b + 3) / (s - b - 1).
//! For s = 10, b = 2.667: r_H ≈ 24.74.
//!
//! ## References
//!
//! - Lorenz, E. N. (1963). Deterministic Nonperiodic Flow. J. Atmos. Sci.
//! - Sparrow, C. (1982). The Lorenz Equations. Springer.

use std::ops::{Add, Mul};

use super::traits::{Bifurcating, Controllable, DynamicalSystem};

/// Point in the (x, y, z) phase space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LorenzState {
    /// Initial condition used for every sweep run
    pub const INITIAL: LorenzState = LorenzState { x: 0.0, y: 1.0, z: 1.05 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance to another state
    pub fn distance(&self, other: &LorenzState) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

impl Default for LorenzState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Add for LorenzState {
    type Output = LorenzState;

    fn add(self, rhs: LorenzState) -> LorenzState {
        LorenzState {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Mul<f64> for LorenzState {
    type Output = LorenzState;

    fn mul(self, rhs: f64) -> LorenzState {
        LorenzState {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Parameters (s, r, b) of the vector field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzParams {
    /// Prandtl number
    pub s: f64,
    /// Rayleigh number analog (control parameter)
    pub r: f64,
    /// Geometric factor
    pub b: f64,
}

impl LorenzParams {
    pub const fn new(s: f64, r: f64, b: f64) -> Self {
        Self { s, r, b }
    }

    /// Same s and b, different r
    pub fn with_r(self, r: f64) -> Self {
        Self { r, ..self }
    }

    pub fn is_finite(&self) -> bool {
        self.s.is_finite() && self.r.is_finite() && self.b.is_finite()
    }

    /// Subcritical Hopf point r_H = s (s + b + 3) / (s - b - 1)
    ///
    /// Only defined for s > b + 1.
    pub fn hopf_r(&self) -> Option<f64> {
        let denom = self.s - self.b - 1.0;
        if denom > 0.0 {
            Some(self.s * (self.s + self.b + 3.0) / denom)
        } else {
            None
        }
    }

    /// Non-trivial fixed points C± (exist for r > 1)
    pub fn fixed_points(&self) -> Option<(LorenzState, LorenzState)> {
        if self.r <= 1.0 {
            return None;
        }
        let c = (self.b * (self.r - 1.0)).sqrt();
        let z = self.r - 1.0;
        Some((LorenzState::new(c, c, z), LorenzState::new(-c, -c, z)))
    }
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self { s: 10.0, r: 28.0, b: 2.667 }
    }
}

/// Lorenz vector field evaluated at `state`
///
/// Total over the reals; non-finite input propagates.
#[inline]
pub fn derivative(state: LorenzState, params: &LorenzParams) -> LorenzState {
    let LorenzState { x, y, z } = state;
    LorenzState {
        x: params.s * (y - x),
        y: params.r * x - y - x * z,
        z: x * y - params.b * z,
    }
}

/// One forward Euler step: state + f(state) * dt
#[inline]
pub fn euler_step(state: LorenzState, params: &LorenzParams, dt: f64) -> LorenzState {
    state + derivative(state, params) * dt
}

/// Stateful Lorenz integrator advancing one Euler step at a time
#[derive(Debug, Clone)]
pub struct LorenzSystem {
    /// Current point in phase space
    state: LorenzState,
    /// Vector field parameters
    params: LorenzParams,
    /// Integration timestep
    dt: f64,
    /// Steps taken so far
    steps: usize,
}

impl LorenzSystem {
    /// Create new system at `initial`
    pub fn new(params: LorenzParams, initial: LorenzState, dt: f64) -> Self {
        Self {
            state: initial,
            params,
            dt,
            steps: 0,
        }
    }

    /// Default parameters with the given r, starting at (0, 1, 1.05), dt = 0.01
    pub fn standard(r: f64) -> Self {
        Self::new(LorenzParams::default().with_r(r), LorenzState::INITIAL, 0.01)
    }

    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    /// Set r, keeping s and b
    pub fn set_r(&mut self, r: f64) {
        self.params.r = r;
    }

    pub fn get_r(&self) -> f64 {
        self.params.r
    }
}

impl DynamicalSystem for LorenzSystem {
    type State = LorenzState;

    fn step(&mut self) {
        self.state = euler_step(self.state, &self.params, self.dt);
        self.steps += 1;
    }

    fn state(&self) -> LorenzState {
        self.state
    }

    fn state_dimension(&self) -> usize {
        3
    }

    fn steps_taken(&self) -> usize {
        self.steps
    }

    fn dt(&self) -> f64 {
        self.dt
    }
}

impl Controllable for LorenzSystem {
    type Parameter = f64;

    fn set_parameter(&mut self, param: f64) {
        self.set_r(param);
    }

    fn get_parameter(&self) -> f64 {
        self.get_r()
    }

    fn ramp_parameter(&mut self, target: f64, rate: f64, steps_per_increment: usize) {
        if !rate.is_finite() || rate <= 0.0 {
            self.params.r = target;
            return;
        }
        while (self.params.r - target).abs() > rate {
            self.run(steps_per_increment);
            if self.params.r < target {
                self.params.r += rate;
            } else {
                self.params.r -= rate;
            }
        }
        self.params.r = target;
    }
}

impl Bifurcating for LorenzSystem {
    fn critical_parameter(&self) -> Option<f64> {
        self.params.hopf_r()
    }

    fn bifurcation_type(&self) -> &'static str {
        "Hopf (subcritical)"
    }
}
