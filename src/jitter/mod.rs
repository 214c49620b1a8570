//! Timing-jitter engine.
//!
//! Jitter is modelled as index perturbation: every output sample copies the
//! input sample at `i + delay`, clamped to the waveform bounds. Values are never
//! interpolated or wrapped, so samples near either edge tend to repeat their
//! neighbour. Each output index draws a fresh delay.

mod gaussian;
mod uniform;

use rand::Rng;
use tracing::trace;

use crate::error::Result;
use crate::params::JitterPolicy;
use crate::signal::Waveform;

pub use gaussian::{gaussian_delay, standard_normal};
pub use uniform::uniform_delay;

/// Source index for output `index` after shifting by `delay`, clamped to `[0, len - 1]`
pub fn perturbed_index(index: usize, delay: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    (index as i64).saturating_add(delay).clamp(0, len as i64 - 1) as usize
}

/// Draw a single delay (samples) from the policy
pub fn draw_delay<R: Rng + ?Sized>(policy: &JitterPolicy, rng: &mut R) -> i64 {
    match *policy {
        JitterPolicy::Uniform { max_delay } => uniform_delay(max_delay, rng),
        JitterPolicy::Gaussian { mean, std_dev } => gaussian_delay(mean, std_dev, rng),
    }
}

/// Apply jitter using the thread-local PRNG
pub fn apply_jitter(signal: &Waveform, policy: &JitterPolicy) -> Result<Waveform> {
    apply_jitter_with(signal, policy, &mut rand::thread_rng())
}

/// Apply jitter drawing delays from `rng`
///
/// Returns a new waveform of the same length; `signal` is left untouched.
/// Fails with `Error::InvalidJitter` if the policy does not validate.
pub fn apply_jitter_with<R: Rng + ?Sized>(
    signal: &Waveform,
    policy: &JitterPolicy,
    rng: &mut R,
) -> Result<Waveform> {
    policy.validate()?;

    if policy.is_identity() || signal.is_empty() {
        trace!(len = signal.len(), "jitter skipped");
        return Ok(signal.clone());
    }

    let len = signal.len();
    let samples = (0..len)
        .map(|i| {
            let delay = draw_delay(policy, rng);
            signal.samples[perturbed_index(i, delay, len)]
        })
        .collect();

    Ok(Waveform::new(samples))
}
