//! Jitterscope library - Sine synthesis, timing jitter and spectrum analysis

pub mod cli;
pub mod error;
pub mod jitter;
pub mod params;
pub mod pipeline;
pub mod signal;
pub mod spectrum;

pub use error::{Error, Result};
pub use jitter::{apply_jitter, apply_jitter_with};
pub use params::{ControlSurface, JitterDistribution, JitterPolicy, SamplingConfig};
pub use pipeline::{compute_pipeline, compute_pipeline_with, compute_runs, PipelineOutput, RunSummary};
pub use signal::{generate, Waveform};
pub use spectrum::{analyze, MagnitudeSpectrum, SpectrumAnalyzer};
