//! Normally distributed delays via the Box–Muller transform.

use rand::Rng;
use std::f64::consts::PI;

use crate::params::three_sigma_bound;

/// Uniform draw from the open interval (0, 1)
fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let mut u = 0.0;
    while u == 0.0 {
        u = rng.gen();
    }
    u
}

/// Standard normal variate from two independent uniform draws
///
/// Both draws exclude 0 so `ln(u)` stays finite.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u = open_unit(rng);
    let v = open_unit(rng);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Draw `round(z · σ + μ)` clamped to `±floor(3σ)` (samples)
pub fn gaussian_delay<R: Rng + ?Sized>(mean: f64, std_dev: f64, rng: &mut R) -> i64 {
    let delay = (standard_normal(rng) * std_dev + mean).round() as i64;
    let bound = three_sigma_bound(std_dev);
    delay.clamp(-bound, bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_delays_within_three_sigma() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let delay = gaussian_delay(0.0, 5.0, &mut rng);
            assert!((-15..=15).contains(&delay), "delay {} outside ±3σ", delay);
        }
    }

    #[test]
    fn test_large_mean_saturates_at_bound() {
        let mut rng = StdRng::seed_from_u64(3);

        // μ = 10 with σ = 1 sits far beyond +3σ, so almost every draw clamps
        let delays: Vec<i64> = (0..1_000)
            .map(|_| gaussian_delay(10.0, 1.0, &mut rng))
            .collect();
        assert!(delays.iter().all(|d| (-3..=3).contains(d)));
        assert!(delays.iter().filter(|&&d| d == 3).count() > 990);
    }

    #[test]
    fn test_degenerate_std_dev_yields_zero_delay() {
        let mut rng = StdRng::seed_from_u64(17);
        for std_dev in [-1.0, f64::NAN] {
            assert_eq!(gaussian_delay(0.0, std_dev, &mut rng), 0);
        }
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 50_000;
        let draws: Vec<f64> = (0..n).map(|_| standard_normal(&mut rng)).collect();

        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(draws.iter().all(|z| z.is_finite()));
        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((var - 1.0).abs() < 0.05, "variance {}", var);
    }
}
