//! Lorenz Sweep: Euler Trajectories for Several Rayleigh Numbers
//!
//! Integrates the Lorenz system from (0, 1, 1.05) for each requested r and
//! writes one figure per run (X, Y, Z time series and the 3D phase
//! portrait). With no flags this is the standard sweep r ∈ {5, 15, 28},
//! s = 10, b = 2.667, dt = 0.01, 10 000 steps.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use lorenz_dynamics::{
    run_sweep, FigureConfig, FigureSink, IntegratorConfig, LorenzParams, SaveMode, SweepConfig,
    STANDARD_R_VALUES,
};

/// Forward Euler integration of the Lorenz system across r values
#[derive(Parser)]
#[command(name = "lorenz_sweep")]
#[command(version)]
#[command(about = "Integrate the Lorenz system for several r values and plot each trajectory")]
struct Cli {
    /// Rayleigh number analog; repeat for several runs
    #[arg(short = 'r', long = "r", num_args = 1.., default_values_t = STANDARD_R_VALUES.to_vec())]
    r_values: Vec<f64>,

    /// Prandtl number s
    #[arg(long, default_value_t = LorenzParams::default().s)]
    sigma: f64,

    /// Geometric factor b
    #[arg(long, default_value_t = LorenzParams::default().b)]
    beta: f64,

    /// Integration timestep
    #[arg(long, default_value_t = IntegratorConfig::default().dt)]
    dt: f64,

    /// Number of Euler steps per run
    #[arg(long, default_value_t = IntegratorConfig::default().num_steps)]
    steps: usize,

    /// Directory for the PNG figures
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Save only the figure of the last r value
    #[arg(long)]
    last_only: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config = SweepConfig::default()
        .with_r_values(cli.r_values)
        .with_sigma(cli.sigma)
        .with_beta(cli.beta)
        .with_integrator(
            IntegratorConfig::default()
                .with_dt(cli.dt)
                .with_num_steps(cli.steps),
        );

    let save_mode = if cli.last_only {
        SaveMode::LastOnly
    } else {
        SaveMode::PerRun
    };
    let mut sink = FigureSink::new(
        FigureConfig::default()
            .with_output_dir(&cli.output_dir)
            .with_save_mode(save_mode),
    )
    .with_context(|| format!("preparing output directory {}", cli.output_dir.display()))?;

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Lorenz System: Forward Euler Sweep");
    println!("═══════════════════════════════════════════════════════════════\n");
    println!("Parameters:");
    println!("  s = {}, b = {}", config.params.s, config.params.b);
    println!("  dt = {}, steps = {}", config.integrator.dt, config.integrator.num_steps);
    println!("  r ∈ {:?}\n", config.r_values);

    let runs = run_sweep(&config, &mut sink).context("running Lorenz sweep")?;

    println!("  r      | states | initial (x, y, z)       | final (x, y, z)");
    println!("---------|--------|-------------------------|-------------------------");
    for run in &runs {
        println!(
            "  {:<6} | {:>6} | ({:>6.2}, {:>6.2}, {:>6.2}) | ({:>6.2}, {:>6.2}, {:>6.2})",
            run.r,
            run.len,
            run.initial.x,
            run.initial.y,
            run.initial.z,
            run.final_state.x,
            run.final_state.y,
            run.final_state.z,
        );
    }

    println!();
    for path in sink.written() {
        println!("Saved {}", path.display());
    }

    Ok(())
}
