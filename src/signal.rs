//! Clean sine waveform synthesis.

use std::f64::consts::PI;

use crate::params::SamplingConfig;

/// Real-valued samples over the sampling grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waveform {
    pub samples: Vec<f64>,
}

impl Waveform {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<f64>> for Waveform {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

/// Generate `sin(2π · f · t_i)` for every sample time of the grid
///
/// # Arguments
/// * `frequency_hz` - Sine frequency (Hz)
/// * `config` - Sampling grid
pub fn generate(frequency_hz: f64, config: &SamplingConfig) -> Waveform {
    let samples = (0..config.sample_count)
        .map(|i| (2.0 * PI * frequency_hz * config.time_at(i)).sin())
        .collect();
    Waveform::new(samples)
}
