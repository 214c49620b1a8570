//! End-to-end computation: generate → jitter → analyze.
//!
//! Each call is self-contained. Nothing is cached between calls, so the caller
//! may invoke it on every parameter change without resetting any state.

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::jitter::apply_jitter_with;
use crate::params::{ranges, JitterPolicy, SamplingConfig};
use crate::signal::{generate, Waveform};
use crate::spectrum::{MagnitudeSpectrum, SpectrumAnalyzer};

/// Both pipeline outputs, recomputed in full on every run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Jittered time-domain samples
    pub time_domain: Waveform,

    /// Magnitude spectrum of `time_domain`
    pub frequency_domain: MagnitudeSpectrum,
}

/// Run the pipeline with the thread-local PRNG
pub fn compute_pipeline(
    frequency_hz: f64,
    policy: &JitterPolicy,
    config: &SamplingConfig,
) -> Result<PipelineOutput> {
    compute_pipeline_with(frequency_hz, policy, config, &mut rand::thread_rng())
}

/// Run the pipeline drawing jitter from `rng`
pub fn compute_pipeline_with<R: Rng + ?Sized>(
    frequency_hz: f64,
    policy: &JitterPolicy,
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<PipelineOutput> {
    if !ranges::FREQUENCY_HZ.contains(frequency_hz) {
        return Err(Error::InvalidFrequency(frequency_hz));
    }
    policy.validate()?;
    let analyzer = SpectrumAnalyzer::new(config)?;

    let signal = generate(frequency_hz, config);
    let time_domain = apply_jitter_with(&signal, policy, rng)?;
    let frequency_domain = analyzer.analyze(&time_domain)?;

    debug!(
        frequency_hz,
        ?policy,
        peak_bin = ?frequency_domain.peak_bin(),
        energy = frequency_domain.energy(),
        "pipeline computed"
    );

    Ok(PipelineOutput {
        time_domain,
        frequency_domain,
    })
}

/// Outcome of several independent pipeline runs with the same parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Output of the final run
    pub last: PipelineOutput,

    /// Number of runs actually performed (at least 1)
    pub runs: usize,

    /// Mean spectral energy across all runs
    pub mean_energy: f64,
}

/// Run the pipeline `runs` times (0 counts as 1), each with fresh jitter draws
pub fn compute_runs(
    frequency_hz: f64,
    policy: &JitterPolicy,
    config: &SamplingConfig,
    runs: usize,
) -> Result<RunSummary> {
    let runs = runs.max(1);

    let mut last = compute_pipeline(frequency_hz, policy, config)?;
    let mut total_energy = last.frequency_domain.energy();
    for _ in 1..runs {
        last = compute_pipeline(frequency_hz, policy, config)?;
        total_energy += last.frequency_domain.energy();
    }

    Ok(RunSummary {
        last,
        runs,
        mean_energy: total_energy / runs as f64,
    })
}
