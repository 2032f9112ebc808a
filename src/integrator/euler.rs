//! Forward Euler trajectory integration.

use tracing::{debug, warn};

use super::{IntegratorError, Trajectory};
use crate::systems::lorenz::euler_step;
use crate::systems::{LorenzParams, LorenzState};

/// Step size, step count and starting point for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorConfig {
    /// Integration timestep
    pub dt: f64,
    /// Number of Euler steps (trajectory holds num_steps + 1 states)
    pub num_steps: usize,
    /// State at step 0
    pub initial: LorenzState,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,
            num_steps: 10_000,
            initial: LorenzState::INITIAL,
        }
    }
}

impl IntegratorConfig {
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_num_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = num_steps;
        self
    }

    pub fn with_initial(mut self, initial: LorenzState) -> Self {
        self.initial = initial;
        self
    }
}

fn validate(
    params: &LorenzParams,
    initial: &LorenzState,
    dt: f64,
) -> Result<(), IntegratorError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(IntegratorError::InvalidStep { dt });
    }
    if !initial.is_finite() {
        return Err(IntegratorError::NonFiniteInitialState {
            x: initial.x,
            y: initial.y,
            z: initial.z,
        });
    }
    for (name, value) in [("s", params.s), ("r", params.r), ("b", params.b)] {
        if !value.is_finite() {
            return Err(IntegratorError::NonFiniteParameter { name, value });
        }
    }
    Ok(())
}

/// Integrate `num_steps` Euler steps from `initial`
///
/// Returns a trajectory of exactly `num_steps + 1` states. Only the
/// arguments are validated; values that overflow during the run are kept.
pub fn integrate(
    params: LorenzParams,
    initial: LorenzState,
    dt: f64,
    num_steps: usize,
) -> Result<Trajectory, IntegratorError> {
    validate(&params, &initial, dt)?;

    debug!(s = params.s, r = params.r, b = params.b, dt, num_steps, "integrating trajectory");

    let mut states = Vec::with_capacity(num_steps + 1);
    let mut current = initial;
    states.push(current);
    for _ in 0..num_steps {
        current = euler_step(current, &params, dt);
        states.push(current);
    }

    if !current.is_finite() {
        warn!(r = params.r, "trajectory diverged to a non-finite state");
    }
    debug!(x = current.x, y = current.y, z = current.z, "final state");

    Ok(Trajectory::from_parts(states, params, dt))
}

/// Integrate using the step size, step count and initial state in `config`
pub fn integrate_with(
    params: LorenzParams,
    config: &IntegratorConfig,
) -> Result<Trajectory, IntegratorError> {
    integrate(params, config.initial, config.dt, config.num_steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{DynamicalSystem, LorenzSystem};

    #[test]
    fn test_trajectory_length() {
        let params = LorenzParams::default();
        for n in [0, 1, 7, 1000] {
            let t = integrate(params, LorenzState::INITIAL, 0.01, n).unwrap();
            assert_eq!(t.len(), n + 1);
            assert_eq!(t.num_steps(), n);
        }
    }

    #[test]
    fn test_zero_steps_is_initial_only() {
        let t = integrate(LorenzParams::default(), LorenzState::INITIAL, 0.01, 0).unwrap();
        assert_eq!(t.states(), &[LorenzState::INITIAL]);
        assert_eq!(t.final_state(), LorenzState::INITIAL);
    }

    #[test]
    fn test_default_run_second_point() {
        let t = integrate_with(LorenzParams::default(), &IntegratorConfig::default()).unwrap();
        assert_eq!(t.len(), 10_001);
        assert_eq!(t.initial(), LorenzState::new(0.0, 1.0, 1.05));

        let p1 = t.states()[1];
        assert!((p1.x - 0.1).abs() < 1e-12);
        assert!((p1.y - 0.99).abs() < 1e-12);
        assert!((p1.z - 1.022).abs() < 1e-5);
        assert!((p1.z - 1.0219965).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let params = LorenzParams::default();
        let a = integrate(params, LorenzState::INITIAL, 0.01, 10_000).unwrap();
        let b = integrate(params, LorenzState::INITIAL, 0.01, 10_000).unwrap();
        for (sa, sb) in a.states().iter().zip(b.states()) {
            assert_eq!(sa.x.to_bits(), sb.x.to_bits());
            assert_eq!(sa.y.to_bits(), sb.y.to_bits());
            assert_eq!(sa.z.to_bits(), sb.z.to_bits());
        }
    }

    #[test]
    fn test_markov_restart_matches_tail() {
        let params = LorenzParams::default();
        let n = 5_000;
        let full = integrate(params, LorenzState::INITIAL, 0.01, n).unwrap();

        for k in [0, 1, 1234, 4999, 5000] {
            let restarted = integrate(params, full.states()[k], 0.01, n - k).unwrap();
            assert_eq!(restarted.states(), full.tail_from(k));
        }
    }

    #[test]
    fn test_matches_stateful_system() {
        let t = integrate(LorenzParams::default().with_r(15.0), LorenzState::INITIAL, 0.01, 500)
            .unwrap();
        let mut system = LorenzSystem::standard(15.0);
        assert_eq!(system.record(500), t.states());
    }

    #[test]
    fn test_runs_are_independent_across_r() {
        let base = LorenzParams::default();
        let first = integrate(base.with_r(5.0), LorenzState::INITIAL, 0.01, 100).unwrap();
        let _other = integrate(base.with_r(28.0), LorenzState::INITIAL, 0.01, 100).unwrap();
        let again = integrate(base.with_r(5.0), LorenzState::INITIAL, 0.01, 100).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_rejects_bad_step() {
        let params = LorenzParams::default();
        for dt in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let err = integrate(params, LorenzState::INITIAL, dt, 10).unwrap_err();
            assert!(matches!(err, IntegratorError::InvalidStep { .. }));
        }
    }

    #[test]
    fn test_rejects_non_finite_inputs() {
        let err = integrate(
            LorenzParams::default(),
            LorenzState::new(0.0, f64::NAN, 1.0),
            0.01,
            10,
        )
        .unwrap_err();
        assert!(matches!(err, IntegratorError::NonFiniteInitialState { .. }));

        let err = integrate(
            LorenzParams::default().with_r(f64::INFINITY),
            LorenzState::INITIAL,
            0.01,
            10,
        )
        .unwrap_err();
        assert_eq!(
            err,
            IntegratorError::NonFiniteParameter { name: "r", value: f64::INFINITY }
        );
    }

    #[test]
    fn test_divergence_is_kept() {
        // Step far too large for the stiff direction; Euler blows up
        let t = integrate(LorenzParams::default(), LorenzState::INITIAL, 1.0, 200).unwrap();
        assert_eq!(t.len(), 201);
        assert!(!t.final_state().is_finite());
    }

    #[test]
    fn test_config_builders() {
        let config = IntegratorConfig::default()
            .with_dt(0.005)
            .with_num_steps(20)
            .with_initial(LorenzState::new(1.0, 1.0, 1.0));
        let t = integrate_with(LorenzParams::default(), &config).unwrap();
        assert_eq!(t.len(), 21);
        assert_eq!(t.dt(), 0.005);
        assert_eq!(t.initial(), LorenzState::new(1.0, 1.0, 1.0));
    }
}
