//! Single-run 2D Ising simulation driver.
//!
//! Equilibrates an all-up lattice at the requested temperature while
//! streaming a per-sweep trace, then samples the mean spin per site over a
//! measurement phase and prints `<s> = …`.

use std::{fs::File, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use csv::WriterBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use ising::lattice::Lattice;
use ising::metropolis::run_metropolis;
use ising::params::Params;

#[derive(Parser)]
#[command(version, about = "2D Ising model Metropolis-Hastings simulator")]
struct Cli {
    /// Flip proposals used to drive the lattice to thermal equilibrium
    equil_steps: usize,

    /// Flip proposals over which the mean spin is sampled
    measure_steps: usize,

    /// Temperature T; beta = 1/(k_B * T)
    temperature: f64,

    /// Lattice edge length L (the lattice has L*L sites)
    #[arg(long, short, default_value_t = 50)]
    size: usize,

    /// Nearest-neighbor coupling constant
    #[arg(long, default_value_t = 1.0)]
    coupling: f64,

    /// Uniform external magnetic field
    #[arg(long, default_value_t = 0.0)]
    field: f64,

    /// RNG seed for a reproducible run; defaults to OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Equilibration trace file, one `sweep,total_spin` line per sweep
    #[arg(long, default_value = "equilibration_data.csv")]
    trace: PathBuf,

    /// Suppress the progress bars
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.size == 0 {
        bail!("lattice size must be positive");
    }
    if !cli.temperature.is_finite() || cli.temperature <= 0.0 {
        bail!("temperature must be positive and finite, got {}", cli.temperature);
    }

    let params = Params {
        size: cli.size,
        coupling: cli.coupling,
        field: cli.field,
        ..Params::default()
    };
    let num_sites = params.num_sites();

    // A measurement run shorter than one sweep has a zero sweep count and
    // nothing to average over; reject it before the engine runs.
    if cli.measure_steps < num_sites {
        bail!(
            "{} measurement steps cover less than one sweep ({num_sites} sites); \
             increase the step count or shrink the lattice",
            cli.measure_steps
        );
    }

    let beta = params.beta(cli.temperature);
    let mut rng = match cli.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    let mut lattice = Lattice::new(params.size, params.spin);

    let mut trace = WriterBuilder::new()
        .from_path(&cli.trace)
        .with_context(|| format!("cannot create {}", cli.trace.display()))?;

    let style = ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} sweeps [{elapsed_precise}]",
    )
    .unwrap();
    let bar = |steps: usize| {
        (!cli.quiet)
            .then(|| ProgressBar::new((steps / num_sites) as u64).with_style(style.clone()))
    };

    println!(
        "Equilibrating {0}x{0} lattice at T = {1} (beta = {2:.4})",
        params.size, cli.temperature, beta
    );
    let equil_bar = bar(cli.equil_steps);
    run_metropolis(
        &mut lattice,
        &params,
        cli.equil_steps,
        beta,
        &mut rng,
        false,
        Some(&mut trace),
        equil_bar.as_ref(),
    )
    .with_context(|| format!("cannot write trace to {}", cli.trace.display()))?;
    if let Some(b) = equil_bar {
        b.finish();
    }
    trace
        .flush()
        .with_context(|| format!("cannot write trace to {}", cli.trace.display()))?;
    println!("Equilibration trace -> {}", cli.trace.display());

    println!("Measuring over {} steps", cli.measure_steps);
    let measure_bar = bar(cli.measure_steps);
    let mean_spin = run_metropolis(
        &mut lattice,
        &params,
        cli.measure_steps,
        beta,
        &mut rng,
        true,
        None::<&mut csv::Writer<File>>,
        measure_bar.as_ref(),
    )?;
    if let Some(b) = measure_bar {
        b.finish();
    }

    println!("<s> = {mean_spin}");
    Ok(())
}
