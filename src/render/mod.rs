//! Render Module: Visualization Sinks for Trajectories
//!
//! A sink receives each finished trajectory once, in sweep order, and is
//! closed with [`TrajectorySink::finish`]. [`FigureSink`] draws the four
//! standard views into one PNG per trajectory:
//!
//! ```text
//! ┌──────────────────────┬──────────────────────┐
//! │  X vs time step      │  Y vs time step      │
//! ├──────────────────────┼──────────────────────┤
//! │  Z vs time step      │  (x, y, z) 3D path   │
//! └──────────────────────┴──────────────────────┘
//! ```

mod error;
mod figure;
pub mod labels;

pub use error::RenderError;
pub use figure::{FigureConfig, FigureSink, SaveMode};

use crate::integrator::Trajectory;

/// Consumer of complete trajectories
pub trait TrajectorySink {
    type Error;

    /// Receive one finished trajectory; `r` is `trajectory.params().r`
    fn consume(&mut self, trajectory: &Trajectory) -> Result<(), Self::Error>;

    /// Called once after the last trajectory
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Sink that keeps every trajectory in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub trajectories: Vec<Trajectory>,
    pub finished: bool,
}

impl TrajectorySink for CollectingSink {
    type Error = std::convert::Infallible;

    fn consume(&mut self, trajectory: &Trajectory) -> Result<(), Self::Error> {
        self.trajectories.push(trajectory.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.finished = true;
        Ok(())
    }
}
