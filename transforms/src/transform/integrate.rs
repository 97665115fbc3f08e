//! Time-domain integration, e.g. acceleration to velocity.

use crate::{
    Trace,
    window::{CumulativeTrapezoid, WindowFilter},
};
use gmprocess_common::Real;

/// Cumulative trapezoidal integral of the trace, zero at the first sample:
/// `y[i] = y[i-1] + dt·(x[i-1] + x[i])/2`.
pub(super) fn integrate(trace: &Trace) -> Vec<Real> {
    trace
        .samples()
        .iter()
        .copied()
        .window(CumulativeTrapezoid::new(trace.sampling_interval()))
        .collect()
}
