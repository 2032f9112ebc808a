//! Trajectory: the time series produced by one integration run.

use ndarray::Array2;

use crate::systems::{LorenzParams, LorenzState};

/// Ordered sequence of states, indexed by time step
///
/// `states[0]` is the initial condition and `states[i + 1]` is a function of
/// `states[i]`, `params` and `dt` only. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<LorenzState>,
    params: LorenzParams,
    dt: f64,
}

impl Trajectory {
    pub(crate) fn from_parts(states: Vec<LorenzState>, params: LorenzParams, dt: f64) -> Self {
        debug_assert!(!states.is_empty());
        Self { states, params, dt }
    }

    /// Number of states (num_steps + 1)
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of Euler steps taken
    pub fn num_steps(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn states(&self) -> &[LorenzState] {
        &self.states
    }

    pub fn get(&self, step: usize) -> Option<&LorenzState> {
        self.states.get(step)
    }

    pub fn initial(&self) -> LorenzState {
        self.states[0]
    }

    pub fn final_state(&self) -> LorenzState {
        self.states[self.states.len() - 1]
    }

    /// States from step `k` to the end
    pub fn tail_from(&self, k: usize) -> &[LorenzState] {
        &self.states[k.min(self.states.len())..]
    }

    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn xs(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.y).collect()
    }

    pub fn zs(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.z).collect()
    }

    /// (len, 3) matrix with columns x, y, z
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.states.len(), 3), |(i, j)| {
            let s = &self.states[i];
            match j {
                0 => s.x,
                1 => s.y,
                _ => s.z,
            }
        })
    }

    /// Per-axis (min, max) over finite samples; `None` for an axis with none
    pub fn bounds(&self) -> [Option<(f64, f64)>; 3] {
        let mut out = [None; 3];
        for s in &self.states {
            for (axis, v) in s.to_array().into_iter().enumerate() {
                if !v.is_finite() {
                    continue;
                }
                out[axis] = Some(match out[axis] {
                    Some((lo, hi)) => (f64::min(lo, v), f64::max(hi, v)),
                    None => (v, v),
                });
            }
        }
        out
    }

    /// True when every state is finite
    pub fn is_finite(&self) -> bool {
        self.states.iter().all(LorenzState::is_finite)
    }
}
