use crate::Real;
use serde::{Deserialize, Serialize};

/// The whole external configuration surface of a transform invocation.
/// Variants that do not consume a parameter ignore it.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformParameters {
    /// Fraction of critical damping, in `[0, 1)`.
    pub damping: Option<Real>,
    /// Natural period of the oscillator in seconds.
    pub period: Option<Real>,
    /// Evenly spaced, strictly increasing times (seconds from trace start)
    /// onto which the oscillator response is resampled.
    pub times: Option<Vec<Real>>,
}

impl TransformParameters {
    pub fn with_damping(self, damping: Real) -> Self {
        Self {
            damping: Some(damping),
            ..self
        }
    }

    pub fn with_period(self, period: Real) -> Self {
        Self {
            period: Some(period),
            ..self
        }
    }

    pub fn with_times(self, times: Vec<Real>) -> Self {
        Self {
            times: Some(times),
            ..self
        }
    }
}
