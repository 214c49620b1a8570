//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (Hz, seconds, samples)
//! - Documented ranges and meanings
//! - Type safety where possible

mod jitter;
mod sampling;
mod surface;

// Re-export all types
pub use jitter::{three_sigma_bound, JitterDistribution, JitterPolicy};
pub use sampling::SamplingConfig;
pub use surface::{ranges, ControlSurface, ParameterRange};
