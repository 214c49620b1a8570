//! Magnitude spectrum via a real-input FFT.

use realfft::{RealFftPlanner, RealToComplex};
use rustfft::num_complex::Complex;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::params::SamplingConfig;
use crate::signal::Waveform;

/// Raw FFT magnitudes for bins `0..N/2` (no normalization)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MagnitudeSpectrum {
    pub magnitudes: Vec<f64>,
}

impl MagnitudeSpectrum {
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Index of the largest magnitude (first one on ties)
    pub fn peak_bin(&self) -> Option<usize> {
        self.magnitudes
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &m)| match best {
                Some((_, best_m)) if best_m >= m => best,
                _ => Some((i, m)),
            })
            .map(|(i, _)| i)
    }

    /// Sum of squared magnitudes
    pub fn energy(&self) -> f64 {
        self.magnitudes.iter().map(|m| m * m).sum()
    }
}

/// Expand the `n/2 + 1` bins of a real transform into all `n` bins
///
/// Uses the conjugate symmetry of real input: `X[n - k] = conj(X[k])`.
pub fn complete_spectrum(half: &[Complex<f64>], n: usize) -> Vec<Complex<f64>> {
    (0..n)
        .map(|k| {
            if k <= n / 2 {
                half[k]
            } else {
                half[n - k].conj()
            }
        })
        .collect()
}

/// Forward real FFT planned once for a fixed sampling grid
pub struct SpectrumAnalyzer {
    fft: Arc<dyn RealToComplex<f64>>,
    fft_size: usize,
}

impl SpectrumAnalyzer {
    /// Plan the transform for `config.sample_count` samples
    pub fn new(config: &SamplingConfig) -> Result<Self> {
        config.validate()?;

        let mut planner = RealFftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(config.sample_count);

        Ok(Self {
            fft,
            fft_size: config.sample_count,
        })
    }

    /// Full two-sided spectrum of `signal`
    pub fn full_spectrum(&self, signal: &Waveform) -> Result<Vec<Complex<f64>>> {
        if signal.len() != self.fft_size {
            return Err(Error::LengthMismatch {
                expected: self.fft_size,
                actual: signal.len(),
            });
        }

        // The transform uses its input as scratch space
        let mut input = signal.samples.clone();
        let mut half = self.fft.make_output_vec();
        self.fft.process(&mut input, &mut half)?;

        Ok(complete_spectrum(&half, self.fft_size))
    }

    /// Magnitudes `sqrt(re² + im²)` of the first `N/2` bins
    pub fn analyze(&self, signal: &Waveform) -> Result<MagnitudeSpectrum> {
        let spectrum = self.full_spectrum(signal)?;
        let magnitudes = spectrum[..self.fft_size / 2]
            .iter()
            .map(|c| c.norm())
            .collect();

        Ok(MagnitudeSpectrum { magnitudes })
    }
}

/// One-shot analysis: plan, transform and reduce to magnitudes
pub fn analyze(signal: &Waveform, config: &SamplingConfig) -> Result<MagnitudeSpectrum> {
    SpectrumAnalyzer::new(config)?.analyze(signal)
}
