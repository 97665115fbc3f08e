//! Response of a damped single-degree-of-freedom oscillator to the trace.

use crate::{
    Parameter, ProcessingStep, Trace, TransformError, TransformParameters, TransformResult, Units,
    interpolate::resample_linear,
    window::{SdofOscillator, WindowFilter},
};
use gmprocess_common::Real;

const SPACING_TOLERANCE: Real = 1e-6;

/// Optional output time base, already checked to be strictly increasing
/// and evenly spaced.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TimeBase<'a> {
    times: &'a [Real],
    spacing: Option<Real>,
}

impl<'a> TimeBase<'a> {
    fn new(times: &'a [Real]) -> TransformResult<Self> {
        if times.is_empty() {
            return Err(TransformError::invalid_parameter(
                Parameter::Times,
                "at least one time is required",
            ));
        }
        if let Some(time) = times.iter().find(|t| !t.is_finite()) {
            return Err(TransformError::invalid_parameter(
                Parameter::Times,
                format!("{time} is not finite"),
            ));
        }
        let spacing = match times {
            [first, second, ..] => Some(second - first),
            _ => None,
        };
        if let Some(spacing) = spacing {
            for (earlier, later) in times.iter().zip(times.iter().skip(1)) {
                let step = later - earlier;
                if step <= 0.0 {
                    return Err(TransformError::invalid_parameter(
                        Parameter::Times,
                        format!("not strictly increasing at {later}"),
                    ));
                }
                if (step - spacing).abs() > SPACING_TOLERANCE * spacing {
                    return Err(TransformError::invalid_parameter(
                        Parameter::Times,
                        format!("not evenly spaced at {later}"),
                    ));
                }
            }
        }
        Ok(Self { times, spacing })
    }

    /// Every time must fall between the first and last sample of `trace`.
    fn check_within(&self, trace: &Trace) -> TransformResult<()> {
        if trace.is_empty() {
            return Err(TransformError::invalid_parameter(
                Parameter::Times,
                format!("{} has no samples to resample", trace.station_metadata()),
            ));
        }
        let duration = trace.duration();
        let slack = SPACING_TOLERANCE * trace.sampling_interval();
        let (Some(&first), Some(&last)) = (self.times.first(), self.times.last()) else {
            return Ok(());
        };
        if first < -slack || last > duration + slack {
            return Err(TransformError::invalid_parameter(
                Parameter::Times,
                format!(
                    "[{first}, {last}] exceeds the {duration} s span of {}",
                    trace.station_metadata()
                ),
            ));
        }
        Ok(())
    }
}

/// Validated oscillator configuration.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct OscillatorParameters<'a> {
    damping: Real,
    period: Real,
    times: Option<TimeBase<'a>>,
}

impl<'a> TryFrom<&'a TransformParameters> for OscillatorParameters<'a> {
    type Error = TransformError;

    fn try_from(parameters: &'a TransformParameters) -> TransformResult<Self> {
        let damping = parameters
            .damping
            .ok_or(TransformError::MissingParameter(Parameter::Damping))?;
        let period = parameters
            .period
            .ok_or(TransformError::MissingParameter(Parameter::Period))?;

        if !(period.is_finite() && period > 0.0) {
            return Err(TransformError::invalid_parameter(
                Parameter::Period,
                format!("{period} is not a positive number of seconds"),
            ));
        }
        if !(damping.is_finite() && (0.0..1.0).contains(&damping)) {
            return Err(TransformError::invalid_parameter(
                Parameter::Damping,
                format!("{damping} is outside [0, 1)"),
            ));
        }
        let times = parameters.times.as_deref().map(TimeBase::new).transpose()?;
        Ok(Self {
            damping,
            period,
            times,
        })
    }
}

impl OscillatorParameters<'_> {
    /// Absolute acceleration of the oscillator mass, at the trace's own
    /// samples or resampled onto the requested times.
    pub(super) fn respond(&self, trace: &Trace, step: ProcessingStep) -> TransformResult<Trace> {
        if let Some(time_base) = &self.times {
            time_base.check_within(trace)?;
        }
        let dt = trace.sampling_interval();
        let response: Vec<Real> = trace
            .samples()
            .iter()
            .copied()
            .window(SdofOscillator::new(self.period, self.damping, dt))
            .collect();

        Ok(match &self.times {
            None => trace.derive(response, Units::Acceleration, step),
            Some(TimeBase { times, spacing }) => trace
                .derive(
                    resample_linear(&response, dt, times),
                    Units::Acceleration,
                    step,
                )
                .resampled(spacing.unwrap_or(dt), times.first().copied().unwrap_or_default()),
        })
    }
}
