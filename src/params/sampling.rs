//! Sampling configuration: the fixed time and frequency grid.

use crate::error::{Error, Result};

/// Sampling grid shared by every pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Sample rate (Hz)
    /// Fixed at 1024 for a session
    pub sample_rate_hz: usize,

    /// Samples per waveform (must be power of 2)
    /// Fixed at 1024 for a session
    pub sample_count: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 1024,
            sample_count: 1024,
        }
    }
}

impl SamplingConfig {
    /// Time of sample `index` (seconds)
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate_hz as f64
    }

    /// Time axis for a full waveform (seconds)
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.sample_count).map(|i| self.time_at(i)).collect()
    }

    /// Centre frequency of FFT bin `index` (Hz)
    pub fn bin_frequency(&self, index: usize) -> f64 {
        (index * self.sample_rate_hz) as f64 / self.sample_count as f64
    }

    /// Frequency axis for a magnitude spectrum (Hz), DC up to just below Nyquist
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.spectrum_len())
            .map(|i| self.bin_frequency(i))
            .collect()
    }

    /// Convert frequency (Hz) to the nearest FFT bin index
    pub fn hz_to_bin(&self, hz: f64) -> usize {
        (hz * self.sample_count as f64 / self.sample_rate_hz as f64).round() as usize
    }

    /// Nyquist frequency (Hz)
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz as f64 / 2.0
    }

    /// Number of magnitude bins produced by the analyzer
    pub fn spectrum_len(&self) -> usize {
        self.sample_count / 2
    }

    /// Validate configuration (sample count must be power of 2, etc.)
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate_hz == 0 {
            return Err(Error::InvalidSampling("sample rate must be > 0".to_string()));
        }
        if !self.sample_count.is_power_of_two() {
            return Err(Error::InvalidSampling(format!(
                "sample count must be power of 2, got {}",
                self.sample_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axes() {
        let config = SamplingConfig::default();

        // 1024 Hz over 1024 samples: one second, 1 Hz per bin
        assert_eq!(config.time_at(0), 0.0);
        assert_eq!(config.time_at(512), 0.5);
        assert_eq!(config.bin_frequency(10), 10.0);
        assert_eq!(config.frequency_axis().len(), 512);
        assert_eq!(config.time_axis().len(), 1024);
        assert_eq!(config.nyquist_hz(), 512.0);
    }

    #[test]
    fn test_hz_to_bin() {
        let config = SamplingConfig {
            sample_rate_hz: 2048,
            sample_count: 1024,
        };

        // 2 Hz per bin
        assert_eq!(config.hz_to_bin(0.0), 0);
        assert_eq!(config.hz_to_bin(10.0), 5);
        assert_eq!(config.hz_to_bin(11.2), 6);
    }

    #[test]
    fn test_validate() {
        assert!(SamplingConfig::default().validate().is_ok());

        let not_pow2 = SamplingConfig {
            sample_rate_hz: 1024,
            sample_count: 1000,
        };
        assert!(matches!(not_pow2.validate(), Err(Error::InvalidSampling(_))));

        let zero_rate = SamplingConfig {
            sample_rate_hz: 0,
            sample_count: 1024,
        };
        assert!(zero_rate.validate().is_err());

        let zero_count = SamplingConfig {
            sample_rate_hz: 1024,
            sample_count: 0,
        };
        assert!(zero_count.validate().is_err());
    }
}
