//! Jitter policy: which delay distribution perturbs the sample indices.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Distribution tag, independent of its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JitterDistribution {
    #[default]
    Uniform,
    Gaussian,
}

impl fmt::Display for JitterDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JitterDistribution::Uniform => write!(f, "uniform"),
            JitterDistribution::Gaussian => write!(f, "gaussian"),
        }
    }
}

impl FromStr for JitterDistribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "uniform" => Ok(JitterDistribution::Uniform),
            "gaussian" => Ok(JitterDistribution::Gaussian),
            other => Err(Error::InvalidJitter(format!(
                "unknown distribution '{}' (expected uniform or gaussian)",
                other
            ))),
        }
    }
}

/// Three-sigma clamp for Gaussian delays (samples)
///
/// Floored so that integer delays stay inside ±3σ for fractional σ. Saturates at
/// `i64::MAX` for huge σ; negative or NaN σ gives 0.
pub fn three_sigma_bound(std_dev: f64) -> i64 {
    (3.0 * std_dev).floor().max(0.0) as i64
}

/// Timing-jitter model applied to every output sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JitterPolicy {
    /// Integer delay drawn uniformly from [-max_delay, +max_delay] (samples)
    Uniform { max_delay: u32 },

    /// Rounded normal delay, clamped to three standard deviations (samples)
    Gaussian { mean: f64, std_dev: f64 },
}

impl Default for JitterPolicy {
    fn default() -> Self {
        Self::none()
    }
}

impl JitterPolicy {
    /// Policy that leaves every sample in place
    pub const fn none() -> Self {
        JitterPolicy::Uniform { max_delay: 0 }
    }

    /// Distribution tag of the active variant
    pub fn distribution(&self) -> JitterDistribution {
        match self {
            JitterPolicy::Uniform { .. } => JitterDistribution::Uniform,
            JitterPolicy::Gaussian { .. } => JitterDistribution::Gaussian,
        }
    }

    /// True when applying this policy is guaranteed to return the input unchanged
    pub fn is_identity(&self) -> bool {
        matches!(self, JitterPolicy::Uniform { max_delay: 0 })
    }

    /// Validate parameters (std-dev must be positive, etc.)
    pub fn validate(&self) -> Result<()> {
        if let JitterPolicy::Gaussian { mean, std_dev } = *self {
            if !mean.is_finite() {
                return Err(Error::InvalidJitter(format!(
                    "mean must be finite, got {}",
                    mean
                )));
            }
            if !std_dev.is_finite() || std_dev <= 0.0 {
                return Err(Error::InvalidJitter(format!(
                    "std-dev must be a finite value > 0, got {}",
                    std_dev
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_policy() {
        assert!(JitterPolicy::none().is_identity());
        assert!(JitterPolicy::default().is_identity());
        assert!(!JitterPolicy::Uniform { max_delay: 1 }.is_identity());
        assert!(!JitterPolicy::Gaussian {
            mean: 0.0,
            std_dev: 1.0
        }
        .is_identity());
    }

    #[test]
    fn test_distribution_tag() {
        assert_eq!(JitterPolicy::none().distribution(), JitterDistribution::Uniform);
        let gaussian = JitterPolicy::Gaussian {
            mean: 0.0,
            std_dev: 1.0,
        };
        assert_eq!(gaussian.distribution(), JitterDistribution::Gaussian);
        assert_eq!(gaussian.distribution().to_string(), "gaussian");
    }

    #[test]
    fn test_parse_distribution() {
        assert_eq!(
            "Gaussian".parse::<JitterDistribution>().unwrap(),
            JitterDistribution::Gaussian
        );
        assert_eq!(
            "uniform".parse::<JitterDistribution>().unwrap(),
            JitterDistribution::Uniform
        );
        assert!("poisson".parse::<JitterDistribution>().is_err());
    }

    #[test]
    fn test_three_sigma_bound() {
        assert_eq!(three_sigma_bound(5.0), 15);
        assert_eq!(three_sigma_bound(1.5), 4);
        assert_eq!(three_sigma_bound(1e20), i64::MAX);
        assert_eq!(three_sigma_bound(-2.0), 0);
        assert_eq!(three_sigma_bound(f64::NAN), 0);
    }

    #[test]
    fn test_validate_rejects_degenerate_gaussian() {
        for std_dev in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let policy = JitterPolicy::Gaussian { mean: 0.0, std_dev };
            assert!(
                matches!(policy.validate(), Err(Error::InvalidJitter(_))),
                "std_dev {} should be rejected",
                std_dev
            );
        }

        let bad_mean = JitterPolicy::Gaussian {
            mean: f64::NAN,
            std_dev: 1.0,
        };
        assert!(bad_mean.validate().is_err());

        assert!(JitterPolicy::Uniform { max_delay: 50 }.validate().is_ok());
    }
}
