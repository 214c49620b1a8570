//! Command-line argument parsing.

use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::params::{ControlSurface, JitterDistribution};

/// Which series to print as CSV after the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DumpMode {
    #[default]
    None,
    /// `t,amplitude` rows of the jittered waveform
    Time,
    /// `frequency,magnitude` rows of the spectrum
    Spectrum,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Jitterscope")]
#[command(about = "Sine synthesis with timing jitter and FFT magnitude analysis", long_about = None)]
pub struct Args {
    /// Sine frequency in Hz (1-100)
    #[arg(short, long, value_name = "HZ", default_value = "5")]
    pub frequency: f64,

    /// Jitter distribution: uniform (default), gaussian
    #[arg(short, long, value_name = "KIND", default_value = "uniform")]
    pub distribution: String,

    /// Uniform max delay in samples (0-50)
    #[arg(long, value_name = "SAMPLES", default_value = "0")]
    pub max_delay: u32,

    /// Gaussian mean delay in samples (-10 to 10)
    #[arg(long, value_name = "SAMPLES", default_value = "0", allow_hyphen_values = true)]
    pub mean: f64,

    /// Gaussian standard deviation in samples (1-20)
    #[arg(long, value_name = "SAMPLES", default_value = "5")]
    pub std_dev: f64,

    /// Number of independent pipeline runs
    #[arg(long, value_name = "COUNT", default_value = "1")]
    pub runs: usize,

    /// Print a series as CSV after the summary
    #[arg(long, value_enum, default_value_t = DumpMode::None)]
    pub dump: DumpMode,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the control surface from command-line arguments
    pub fn control_surface(&self) -> Result<ControlSurface> {
        let distribution: JitterDistribution = self.distribution.parse()?;
        Ok(ControlSurface {
            frequency_hz: self.frequency,
            distribution,
            max_delay: self.max_delay,
            mean: self.mean,
            std_dev: self.std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::JitterPolicy;

    #[test]
    fn test_defaults_match_control_surface() {
        let args = Args::parse_from(["jitterscope"]);
        assert_eq!(args.control_surface().unwrap(), ControlSurface::default());
        assert_eq!(args.runs, 1);
        assert_eq!(args.dump, DumpMode::None);
    }

    #[test]
    fn test_gaussian_arguments() {
        let args = Args::parse_from([
            "jitterscope",
            "--frequency",
            "12",
            "--distribution",
            "Gaussian",
            "--mean",
            "-4",
            "--std-dev",
            "2",
            "--dump",
            "spectrum",
        ]);
        let surface = args.control_surface().unwrap();

        assert_eq!(
            surface.jitter_policy(),
            JitterPolicy::Gaussian {
                mean: -4.0,
                std_dev: 2.0
            }
        );
        assert_eq!(surface.frequency_hz, 12.0);
        assert_eq!(args.dump, DumpMode::Spectrum);
    }

    #[test]
    fn test_unknown_distribution() {
        let args = Args::parse_from(["jitterscope", "--distribution", "poisson"]);
        assert!(args.control_surface().is_err());
    }
}
