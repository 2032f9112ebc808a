//! PNG figure sink backed by plotters.

use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::{debug, info};

use super::labels::{
    annotation_lines, attractor_title, component_label, component_title, figure_file_name,
};
use super::{RenderError, TrajectorySink};
use crate::integrator::Trajectory;

/// When figures are written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// One image per consumed trajectory
    #[default]
    PerRun,
    /// Only the last consumed trajectory, written at `finish`
    LastOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    pub output_dir: PathBuf,
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    pub save_mode: SaveMode,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            width: 1600,
            height: 1200,
            save_mode: SaveMode::PerRun,
        }
    }
}

impl FigureConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_save_mode(mut self, save_mode: SaveMode) -> Self {
        self.save_mode = save_mode;
        self
    }
}

/// Renders X/Y/Z time series and the 3D phase portrait into PNG files
#[derive(Debug)]
pub struct FigureSink {
    config: FigureConfig,
    /// Held back under `SaveMode::LastOnly`
    pending: Option<Trajectory>,
    written: Vec<PathBuf>,
}

impl FigureSink {
    /// Create sink, creating the output directory if missing
    pub fn new(config: FigureConfig) -> Result<Self, RenderError> {
        std::fs::create_dir_all(&config.output_dir).map_err(|source| RenderError::OutputDir {
            path: config.output_dir.clone(),
            source,
        })?;
        Ok(Self {
            config,
            pending: None,
            written: Vec::new(),
        })
    }

    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    /// Paths of figures written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// r of the trajectory waiting for `finish` (LastOnly mode)
    pub fn pending_r(&self) -> Option<f64> {
        self.pending.as_ref().map(|t| t.params().r)
    }

    /// Output path for a given r
    pub fn path_for(&self, r: f64) -> PathBuf {
        self.config.output_dir.join(figure_file_name(r))
    }

    fn write(&mut self, trajectory: &Trajectory) -> Result<PathBuf, RenderError> {
        let path = self.path_for(trajectory.params().r);
        draw_figure(&path, trajectory, (self.config.width, self.config.height)).map_err(|e| {
            RenderError::Plot {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        info!(path = %path.display(), r = trajectory.params().r, "wrote figure");
        self.written.push(path.clone());
        Ok(path)
    }
}

impl TrajectorySink for FigureSink {
    type Error = RenderError;

    fn consume(&mut self, trajectory: &Trajectory) -> Result<(), RenderError> {
        match self.config.save_mode {
            SaveMode::PerRun => {
                self.write(trajectory)?;
            }
            SaveMode::LastOnly => {
                debug!(r = trajectory.params().r, "holding figure until finish");
                self.pending = Some(trajectory.clone());
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        if let Some(trajectory) = self.pending.take() {
            self.write(&trajectory)?;
        }
        Ok(())
    }
}

/// Axis range with 5% padding; unit range when no finite sample exists
fn padded_range(bounds: Option<(f64, f64)>) -> Range<f64> {
    match bounds {
        None => 0.0..1.0,
        Some((lo, hi)) if hi - lo < 1e-9 => (lo - 0.5)..(hi + 0.5),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad)..(hi + pad)
        }
    }
}

fn draw_figure(
    path: &Path,
    trajectory: &Trajectory,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    let r = trajectory.params().r;
    let bounds = trajectory.bounds();
    let steps = (trajectory.len().saturating_sub(1)).max(1) as f64;

    let data = trajectory.to_array();
    let series = [('X', &BLUE), ('Y', &RED), ('Z', &GREEN)];

    for (axis_index, (panel, (axis, color))) in panels.iter().zip(series.iter()).enumerate() {
        let mut chart = ChartBuilder::on(panel)
            .caption(component_title(*axis, r), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..steps, padded_range(bounds[axis_index]))?;

        chart
            .configure_mesh()
            .x_desc("Time Step")
            .y_desc(component_label(*axis))
            .draw()?;

        chart.draw_series(LineSeries::new(
            data.column(axis_index)
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, v)| (i as f64, *v)),
            *color,
        ))?;
    }

    let phase = &panels[3];
    let x_range = padded_range(bounds[0]);
    let y_range = padded_range(bounds[1]);
    let z_range = padded_range(bounds[2]);
    {
        let mut chart = ChartBuilder::on(phase)
            .caption(attractor_title(r), ("sans-serif", 20))
            .margin(20)
            .build_cartesian_3d(x_range.clone(), y_range.clone(), z_range.clone())?;

        chart.with_projection(|mut pb| {
            pb.pitch = 0.3;
            pb.yaw = 0.7;
            pb.scale = 0.85;
            pb.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(3)
            .draw()?;

        chart.draw_series(LineSeries::new(
            trajectory
                .states()
                .iter()
                .filter(|s| s.is_finite())
                .map(|s| (s.x, s.y, s.z)),
            &BLUE,
        ))?;

        let axis_font = ("sans-serif", 14).into_font();
        let axis_names = [
            ("X Axis", (x_range.end, y_range.start, z_range.start)),
            ("Y Axis", (x_range.start, y_range.end, z_range.start)),
            ("Z Axis", (x_range.start, y_range.start, z_range.end)),
        ];
        for (name, anchor) in axis_names {
            chart.draw_series(std::iter::once(Text::new(name, anchor, axis_font.clone())))?;
        }
    }

    let (w, h) = phase.dim_in_pixel();
    for (i, line) in annotation_lines(trajectory).into_iter().enumerate() {
        let x = (w as f64 * 0.05) as i32;
        let y = (h as f64 * (0.08 + 0.04 * i as f64)) as i32;
        phase.draw(&Text::new(line, (x, y), ("sans-serif", 14).into_font()))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::integrate;
    use crate::systems::{LorenzParams, LorenzState};

    fn short_run(r: f64) -> Trajectory {
        integrate(LorenzParams::default().with_r(r), LorenzState::INITIAL, 0.01, 50).unwrap()
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range(None), 0.0..1.0);
        assert_eq!(padded_range(Some((2.0, 2.0))), 1.5..2.5);
        let r = padded_range(Some((0.0, 10.0)));
        assert!((r.start + 0.5).abs() < 1e-12);
        assert!((r.end - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_new_creates_output_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("figures").join("nested");
        let sink = FigureSink::new(FigureConfig::default().with_output_dir(&dir)).unwrap();
        assert!(dir.is_dir());
        assert_eq!(sink.path_for(15.0), dir.join("lorenz_attractor_r=15.png"));
    }

    fn png_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".png"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_last_only_writes_single_figure_at_finish() {
        let tmp = tempfile::tempdir().unwrap();
        let config = FigureConfig::default()
            .with_output_dir(tmp.path())
            .with_size(640, 480)
            .with_save_mode(SaveMode::LastOnly);
        let mut sink = FigureSink::new(config).unwrap();

        for r in [5.0, 15.0, 28.0] {
            sink.consume(&short_run(r)).unwrap();
        }
        assert!(sink.written().is_empty());
        assert_eq!(sink.pending_r(), Some(28.0));
        assert!(png_files(tmp.path()).is_empty());

        sink.finish().unwrap();
        assert_eq!(sink.pending_r(), None);
        assert_eq!(sink.written(), &[tmp.path().join("lorenz_attractor_r=28.png")]);
        assert_eq!(png_files(tmp.path()), vec!["lorenz_attractor_r=28.png"]);
    }

    #[test]
    fn test_per_run_writes_one_figure_per_r() {
        let tmp = tempfile::tempdir().unwrap();
        let config = FigureConfig::default()
            .with_output_dir(tmp.path())
            .with_size(640, 480);
        let mut sink = FigureSink::new(config).unwrap();

        for r in [5.0, 15.0, 28.0] {
            sink.consume(&short_run(r)).unwrap();
            assert!(sink.path_for(r).is_file());
        }
        sink.finish().unwrap();

        assert_eq!(sink.written().len(), 3);
        assert_eq!(
            png_files(tmp.path()),
            vec![
                "lorenz_attractor_r=15.png",
                "lorenz_attractor_r=28.png",
                "lorenz_attractor_r=5.png",
            ]
        );
    }

    #[test]
    fn test_diverged_trajectory_still_renders() {
        let diverged =
            integrate(LorenzParams::default(), LorenzState::INITIAL, 1.0, 200).unwrap();
        assert!(!diverged.final_state().is_finite());

        let tmp = tempfile::tempdir().unwrap();
        let config = FigureConfig::default()
            .with_output_dir(tmp.path())
            .with_size(640, 480);
        let mut sink = FigureSink::new(config).unwrap();

        assert!(sink.consume(&diverged).is_ok());
        assert!(sink.path_for(28.0).is_file());
    }

    #[test]
    fn test_default_config() {
        let config = FigureConfig::default();
        assert_eq!(config.save_mode, SaveMode::PerRun);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!((config.width, config.height), (1600, 1200));
    }
}
