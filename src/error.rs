//! Error type shared by every pipeline stage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid frequency: {0} Hz (expected a finite value in [1, 100])")]
    InvalidFrequency(f64),

    #[error("Invalid jitter policy: {0}")]
    InvalidJitter(String),

    #[error("Invalid sampling config: {0}")]
    InvalidSampling(String),

    #[error("{name} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name} must be a multiple of {step} from {min}, got {value}")]
    OffStep {
        name: &'static str,
        value: f64,
        min: f64,
        step: f64,
    },

    #[error("Waveform length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("FFT error: {0}")]
    Fft(#[from] realfft::FftError),
}

pub type Result<T> = std::result::Result<T, Error>;
