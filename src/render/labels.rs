//! Figure titles, file names and annotation text.

use crate::integrator::Trajectory;
use crate::systems::LorenzState;

/// `lorenz_attractor_r={r}.png`
pub fn figure_file_name(r: f64) -> String {
    format!("lorenz_attractor_r={}.png", r)
}

/// Title of a single-component time series panel
pub fn component_title(axis: char, r: f64) -> String {
    format!("Lorenz Attractor: {} Component (r = {})", axis, r)
}

/// Y label of a single-component time series panel
pub fn component_label(axis: char) -> String {
    format!("{} Coordinate", axis)
}

pub fn attractor_title(r: f64) -> String {
    format!("Lorenz Attractor (r = {})", r)
}

fn state_values(s: &LorenzState) -> String {
    format!("X = {:.2}, Y = {:.2}, Z = {:.2}", s.x, s.y, s.z)
}

/// Three text lines drawn on the phase-space panel
pub fn annotation_lines(trajectory: &Trajectory) -> [String; 3] {
    [
        format!("r = {}", trajectory.params().r),
        format!("Final values: {}", state_values(&trajectory.final_state())),
        format!("Initial values: {}", state_values(&trajectory.initial())),
    ]
}
