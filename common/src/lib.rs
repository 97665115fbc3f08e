pub mod metrics;
pub mod tracer;

/// Scalar type used for samples, times and oscillator parameters.
pub type Real = f64;

/// Seconds between consecutive samples of a trace.
pub type SamplingInterval = Real;

/// Format used when rendering trace start times in log output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";
