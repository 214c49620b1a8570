//! Control surface: the user-editable parameters and their allowed ranges.

use super::jitter::{JitterDistribution, JitterPolicy};
use crate::error::{Error, Result};

/// Inclusive slider range with a fixed step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// True when `value` lies on the slider grid `min + k · step`
    pub fn on_step(&self, value: f64) -> bool {
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }

    /// Check `value` against the range and step, naming the control on failure
    pub fn check(&self, name: &'static str, value: f64) -> Result<()> {
        if !self.contains(value) {
            return Err(Error::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if !self.on_step(value) {
            return Err(Error::OffStep {
                name,
                value,
                min: self.min,
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Slider ranges (compile-time, match the interactive tool)
pub mod ranges {
    use super::ParameterRange;

    /// Signal frequency (Hz)
    pub const FREQUENCY_HZ: ParameterRange = ParameterRange::new(1.0, 100.0, 1.0);

    /// Uniform jitter max delay (samples)
    pub const MAX_DELAY: ParameterRange = ParameterRange::new(0.0, 50.0, 1.0);

    /// Gaussian jitter mean (samples)
    pub const MEAN: ParameterRange = ParameterRange::new(-10.0, 10.0, 1.0);

    /// Gaussian jitter standard deviation (samples)
    pub const STD_DEV: ParameterRange = ParameterRange::new(1.0, 20.0, 1.0);
}

/// Current state of every control, active or not
///
/// Controls for the inactive distribution are kept but ignored, so switching
/// distributions back and forth restores the previous slider positions without
/// leaking them into the policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSurface {
    /// Sine frequency (Hz)
    pub frequency_hz: f64,

    /// Selected jitter distribution
    pub distribution: JitterDistribution,

    /// Uniform max delay (samples)
    pub max_delay: u32,

    /// Gaussian mean (samples)
    pub mean: f64,

    /// Gaussian standard deviation (samples)
    pub std_dev: f64,
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self {
            frequency_hz: 5.0,
            distribution: JitterDistribution::Uniform,
            max_delay: 0,
            mean: 0.0,
            std_dev: 5.0,
        }
    }
}

impl ControlSurface {
    /// Jitter policy for the selected distribution
    pub fn jitter_policy(&self) -> JitterPolicy {
        match self.distribution {
            JitterDistribution::Uniform => JitterPolicy::Uniform {
                max_delay: self.max_delay,
            },
            JitterDistribution::Gaussian => JitterPolicy::Gaussian {
                mean: self.mean,
                std_dev: self.std_dev,
            },
        }
    }

    /// Validate the frequency and the controls of the active distribution
    pub fn validate(&self) -> Result<()> {
        ranges::FREQUENCY_HZ.check("frequency", self.frequency_hz)?;
        match self.distribution {
            JitterDistribution::Uniform => {
                ranges::MAX_DELAY.check("max delay", self.max_delay as f64)?;
            }
            JitterDistribution::Gaussian => {
                ranges::MEAN.check("mean", self.mean)?;
                ranges::STD_DEV.check("std-dev", self.std_dev)?;
            }
        }
        Ok(())
    }
}
