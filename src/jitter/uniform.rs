//! Uniform integer delays.

use rand::Rng;

/// Draw an integer delay uniformly from `[-max_delay, +max_delay]` (samples)
pub fn uniform_delay<R: Rng + ?Sized>(max_delay: u32, rng: &mut R) -> i64 {
    let max_delay = max_delay as i64;
    let span = (2 * max_delay + 1) as f64;
    let u: f64 = rng.gen();
    (u * span).floor() as i64 - max_delay
}
