//! Jitterscope - Watch timing jitter smear a sine wave's spectrum
//!
//! Generates a sine, perturbs its sample timing and prints where the
//! spectral energy ends up.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jitterscope::cli::{Args, DumpMode};
use jitterscope::{compute_runs, PipelineOutput, Result, SamplingConfig};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let surface = args.control_surface()?;
    surface.validate()?;

    let config = SamplingConfig::default();
    let policy = surface.jitter_policy();

    info!(
        frequency_hz = surface.frequency_hz,
        distribution = %policy.distribution(),
        runs = args.runs,
        "running pipeline"
    );

    let summary = compute_runs(surface.frequency_hz, &policy, &config, args.runs)?;
    let output = &summary.last;

    print_summary(output, &config);
    if summary.runs > 1 {
        println!(
            "Mean energy over {} runs: {:.3}",
            summary.runs, summary.mean_energy
        );
    }

    match args.dump {
        DumpMode::None => {}
        DumpMode::Time => {
            println!("t,amplitude");
            for (t, x) in config.time_axis().iter().zip(&output.time_domain.samples) {
                println!("{},{}", t, x);
            }
        }
        DumpMode::Spectrum => {
            println!("frequency,magnitude");
            for (f, m) in config
                .frequency_axis()
                .iter()
                .zip(&output.frequency_domain.magnitudes)
            {
                println!("{},{}", f, m);
            }
        }
    }

    Ok(())
}

fn print_summary(output: &PipelineOutput, config: &SamplingConfig) {
    let spectrum = &output.frequency_domain;
    match spectrum.peak_bin() {
        Some(bin) => println!(
            "Peak: bin {} ({:.1} Hz), magnitude {:.3}",
            bin,
            config.bin_frequency(bin),
            spectrum.magnitudes[bin]
        ),
        None => println!("Peak: none (empty spectrum)"),
    }
    println!("Energy: {:.3}", spectrum.energy());
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
