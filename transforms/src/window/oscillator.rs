use super::Window;
use crate::Real;
use std::f64::consts::TAU;

/// Single-degree-of-freedom oscillator driven by ground acceleration.
///
/// Solves `u'' + 2ζω u' + ω² u = -a(t)` exactly for an `a(t)` that is linear
/// between samples, starting from rest. The output is the absolute
/// acceleration of the mass, `-(2ζω u' + ω² u)`.
#[derive(Clone)]
pub(crate) struct SdofOscillator {
    omega: Real,
    damping: Real,
    damped_omega: Real,
    sampling_interval: Real,
    decay: Real,
    cos: Real,
    sin: Real,
    displacement: Real,
    velocity: Real,
    previous: Option<Real>,
}

impl SdofOscillator {
    /// `damping` must lie in `[0, 1)` and `period`, `sampling_interval` be positive.
    pub(crate) fn new(period: Real, damping: Real, sampling_interval: Real) -> Self {
        let omega = TAU / period;
        let damped_omega = omega * (1.0 - damping * damping).sqrt();
        SdofOscillator {
            omega,
            damping,
            damped_omega,
            sampling_interval,
            decay: (-damping * omega * sampling_interval).exp(),
            cos: (damped_omega * sampling_interval).cos(),
            sin: (damped_omega * sampling_interval).sin(),
            displacement: 0.0,
            velocity: 0.0,
            previous: None,
        }
    }

    /// Advances the state across one sampling interval in which the ground
    /// acceleration goes linearly from `start` to `end`.
    fn step(&mut self, start: Real, end: Real) {
        let omega2 = self.omega * self.omega;
        let zeta_omega = self.damping * self.omega;

        // Particular solution c0 + c1·τ for the linear forcing p0 + p1·τ.
        let p0 = -start;
        let p1 = -(end - start) / self.sampling_interval;
        let c1 = p1 / omega2;
        let c0 = (p0 - 2.0 * zeta_omega * c1) / omega2;

        let a = self.displacement - c0;
        let b = (self.velocity - c1 + zeta_omega * a) / self.damped_omega;
        let homogeneous = a * self.cos + b * self.sin;
        let homogeneous_rate = self.damped_omega * (b * self.cos - a * self.sin);

        self.displacement = self.decay * homogeneous + c0 + c1 * self.sampling_interval;
        self.velocity = self.decay * (homogeneous_rate - zeta_omega * homogeneous) + c1;
    }
}

impl Window for SdofOscillator {
    type InputType = Real;
    type OutputType = Real;

    fn push(&mut self, value: Real) -> bool {
        if let Some(previous) = self.previous {
            self.step(previous, value);
        }
        self.previous = Some(value);
        true
    }

    fn output(&self) -> Option<Real> {
        self.previous.map(|_| {
            -(2.0 * self.damping * self.omega * self.velocity
                + self.omega * self.omega * self.displacement)
        })
    }
}
