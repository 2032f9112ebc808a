//! Parameter Sweep: One Trajectory per Rayleigh Number
//!
//! Runs the integrator once per value of r, holding s, b, dt, the step count
//! and the initial state fixed, and hands each trajectory to a sink as soon
//! as it is complete. The standard sweep r ∈ {5, 15, 28} crosses from a
//! stable fixed point (r = 5), through long transient oscillation (r = 15),
//! into the chaotic regime (r = 28).

use thiserror::Error;
use tracing::info;

use crate::integrator::{integrate_with, IntegratorConfig, IntegratorError, Trajectory};
use crate::render::{RenderError, TrajectorySink};
use crate::systems::{LorenzParams, LorenzState};

/// r values of the standard sweep
pub const STANDARD_R_VALUES: [f64; 3] = [5.0, 15.0, 28.0];

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Integration failed for r = {r}: {source}")]
    Integrate {
        r: f64,
        #[source]
        source: IntegratorError,
    },

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Sweep has no r values")]
    Empty,
}

impl From<std::convert::Infallible> for SweepError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// s and b are taken from here; r is overridden per run
    pub params: LorenzParams,
    pub r_values: Vec<f64>,
    pub integrator: IntegratorConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            params: LorenzParams::default(),
            r_values: STANDARD_R_VALUES.to_vec(),
            integrator: IntegratorConfig::default(),
        }
    }
}

impl SweepConfig {
    pub fn with_r_values(mut self, r_values: impl Into<Vec<f64>>) -> Self {
        self.r_values = r_values.into();
        self
    }

    pub fn with_sigma(mut self, s: f64) -> Self {
        self.params.s = s;
        self
    }

    pub fn with_beta(mut self, b: f64) -> Self {
        self.params.b = b;
        self
    }

    pub fn with_integrator(mut self, integrator: IntegratorConfig) -> Self {
        self.integrator = integrator;
        self
    }
}

/// Summary of one completed run
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRun {
    pub r: f64,
    pub len: usize,
    pub initial: LorenzState,
    pub final_state: LorenzState,
}

impl SweepRun {
    fn from_trajectory(trajectory: &Trajectory) -> Self {
        Self {
            r: trajectory.params().r,
            len: trajectory.len(),
            initial: trajectory.initial(),
            final_state: trajectory.final_state(),
        }
    }
}

/// Integrate once per r and feed every trajectory to `sink`, in order
///
/// Each run starts from the configured initial state; nothing carries over
/// between runs. `sink.finish()` is called after the last run.
pub fn run_sweep<S>(config: &SweepConfig, sink: &mut S) -> Result<Vec<SweepRun>, SweepError>
where
    S: TrajectorySink,
    SweepError: From<S::Error>,
{
    if config.r_values.is_empty() {
        return Err(SweepError::Empty);
    }

    let mut runs = Vec::with_capacity(config.r_values.len());
    for &r in &config.r_values {
        let params = config.params.with_r(r);
        let trajectory = integrate_with(params, &config.integrator)
            .map_err(|source| SweepError::Integrate { r, source })?;

        let run = SweepRun::from_trajectory(&trajectory);
        info!(
            r,
            states = run.len,
            x = run.final_state.x,
            y = run.final_state.y,
            z = run.final_state.z,
            "sweep run complete"
        );

        sink.consume(&trajectory)?;
        runs.push(run);
    }
    sink.finish()?;

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CollectingSink;

    #[test]
    fn test_standard_sweep_order_and_shape() {
        let mut sink = CollectingSink::default();
        let runs = run_sweep(&SweepConfig::default(), &mut sink).unwrap();

        assert!(sink.finished);
        assert_eq!(sink.trajectories.len(), 3);
        let rs: Vec<f64> = runs.iter().map(|run| run.r).collect();
        assert_eq!(rs, vec![5.0, 15.0, 28.0]);

        for (run, t) in runs.iter().zip(&sink.trajectories) {
            assert_eq!(t.len(), 10_001);
            assert_eq!(t.initial(), LorenzState::INITIAL);
            assert_eq!(t.params().s, 10.0);
            assert_eq!(t.params().b, 2.667);
            assert_eq!(run.final_state, t.final_state());
        }
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let config = SweepConfig::default()
            .with_r_values(vec![28.0, 5.0, 28.0])
            .with_integrator(IntegratorConfig::default().with_num_steps(500));
        let mut sink = CollectingSink::default();
        run_sweep(&config, &mut sink).unwrap();
        assert_eq!(sink.trajectories[0], sink.trajectories[2]);
        assert_ne!(sink.trajectories[0], sink.trajectories[1]);
    }

    #[test]
    fn test_r5_run_settles() {
        let config = SweepConfig::default().with_r_values(vec![5.0]);
        let mut sink = CollectingSink::default();
        let runs = run_sweep(&config, &mut sink).unwrap();

        let (c_plus, c_minus) = LorenzParams::default().with_r(5.0).fixed_points().unwrap();
        let end = runs[0].final_state;
        assert!(end.distance(&c_plus).min(end.distance(&c_minus)) < 1e-3);
    }

    #[test]
    fn test_empty_sweep_rejected() {
        let config = SweepConfig::default().with_r_values(Vec::<f64>::new());
        let mut sink = CollectingSink::default();
        assert!(matches!(run_sweep(&config, &mut sink), Err(SweepError::Empty)));
        assert!(!sink.finished);
    }

    #[test]
    fn test_invalid_step_reports_r() {
        let config = SweepConfig::default()
            .with_integrator(IntegratorConfig::default().with_dt(0.0));
        let mut sink = CollectingSink::default();
        match run_sweep(&config, &mut sink) {
            Err(SweepError::Integrate { r, source }) => {
                assert_eq!(r, 5.0);
                assert_eq!(source, IntegratorError::InvalidStep { dt: 0.0 });
            }
            other => panic!("expected integration error, got {:?}", other),
        }
        assert!(sink.trajectories.is_empty());
    }
}
