use crate::{
    InvalidDataReason, ProcessingStep, Real, SamplingInterval, StationMetadata, TransformError,
    TransformResult, Units,
};
use serde::{Deserialize, Serialize};

/// A single-channel time series.
///
/// The number of samples is fixed once the trace is built: transforms
/// produce new traces rather than editing existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "metadata")]
    station_metadata: StationMetadata,
    sampling_interval: SamplingInterval,
    /// Seconds between `station_metadata.start_time` and the first sample.
    #[serde(default)]
    start_offset: Real,
    units: Units,
    #[serde(default)]
    provenance: Vec<ProcessingStep>,
    samples: Vec<Real>,
}

impl Trace {
    pub fn new(
        samples: Vec<Real>,
        sampling_interval: SamplingInterval,
        units: Units,
        station_metadata: StationMetadata,
    ) -> Self {
        Self {
            station_metadata,
            sampling_interval,
            start_offset: 0.0,
            units,
            provenance: Vec::new(),
            samples,
        }
    }

    pub fn samples(&self) -> &[Real] {
        &self.samples
    }

    pub fn sampling_interval(&self) -> SamplingInterval {
        self.sampling_interval
    }

    pub fn sampling_rate(&self) -> Real {
        1.0 / self.sampling_interval
    }

    pub fn start_offset(&self) -> Real {
        self.start_offset
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn station_metadata(&self) -> &StationMetadata {
        &self.station_metadata
    }

    pub fn provenance(&self) -> &[ProcessingStep] {
        &self.provenance
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time spanned between the first and last sample, in seconds.
    pub fn duration(&self) -> Real {
        self.samples.len().saturating_sub(1) as Real * self.sampling_interval
    }

    /// Sample times in seconds relative to the metadata start time.
    pub fn times(&self) -> impl Iterator<Item = Real> + '_ {
        (0..self.samples.len()).map(|i| self.start_offset + i as Real * self.sampling_interval)
    }

    /// Largest absolute sample value; for an oscillator response this is
    /// the spectral ordinate at the oscillator's period.
    pub fn absolute_peak(&self) -> Option<Real> {
        self.samples.iter().map(|v| v.abs()).reduce(Real::max)
    }

    /// Checks the trace can be fed to a numerical transform.
    pub(crate) fn validate(&self) -> TransformResult<()> {
        let invalid = |reason| TransformError::InvalidData {
            channel: self.station_metadata.id(),
            reason,
        };
        if !(self.sampling_interval.is_finite() && self.sampling_interval > 0.0) {
            return Err(invalid(InvalidDataReason::SamplingInterval(
                self.sampling_interval,
            )));
        }
        match self.samples.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(invalid(InvalidDataReason::NonFiniteSample {
                index,
                value: self.samples.get(index).copied().unwrap_or(Real::NAN),
            })),
            None => Ok(()),
        }
    }

    /// Builds the trace a transform hands back: same channel, same time base,
    /// new samples and units, and one more provenance step.
    pub(crate) fn derive(&self, samples: Vec<Real>, units: Units, step: ProcessingStep) -> Self {
        let mut provenance = self.provenance.clone();
        provenance.push(step);
        Self {
            station_metadata: self.station_metadata.clone(),
            sampling_interval: self.sampling_interval,
            start_offset: self.start_offset,
            units,
            provenance,
            samples,
        }
    }

    /// Moves a derived trace onto a different time base.
    pub(crate) fn resampled(self, sampling_interval: SamplingInterval, first_time: Real) -> Self {
        Self {
            sampling_interval,
            start_offset: self.start_offset + first_time,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transform;
    use assert_approx_eq::assert_approx_eq;

    fn trace(samples: Vec<Real>) -> Trace {
        Trace::new(
            samples,
            0.5,
            Units::Acceleration,
            StationMetadata {
                network: "TA".to_owned(),
                station: "M04C".to_owned(),
                channel: "HNZ".to_owned(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn duration_and_times() {
        let trace = trace(vec![1.0, 2.0, 3.0, 4.0]);
        assert_approx_eq!(trace.duration(), 1.5);
        assert_approx_eq!(trace.sampling_rate(), 2.0);
        assert_eq!(trace.times().collect::<Vec<_>>(), vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn degenerate_durations() {
        assert_eq!(trace(vec![]).duration(), 0.0);
        assert_eq!(trace(vec![1.0]).duration(), 0.0);
    }

    #[test]
    fn absolute_peak_uses_magnitude() {
        assert_eq!(trace(vec![1.0, -3.0, 2.0]).absolute_peak(), Some(3.0));
        assert_eq!(trace(vec![]).absolute_peak(), None);
    }

    #[test]
    fn validate_reports_first_non_finite_sample() {
        let error = trace(vec![0.0, 1.0, Real::INFINITY, Real::NAN])
            .validate()
            .expect_err("infinite sample");
        assert_eq!(
            error,
            TransformError::InvalidData {
                channel: "TA.M04C..HNZ".to_owned(),
                reason: InvalidDataReason::NonFiniteSample {
                    index: 2,
                    value: Real::INFINITY
                },
            }
        );
    }

    #[test]
    fn validate_rejects_bad_sampling_interval() {
        for interval in [0.0, -0.01, Real::NAN] {
            let trace = Trace::new(
                vec![1.0],
                interval,
                Units::Acceleration,
                StationMetadata::default(),
            );
            assert!(matches!(
                trace.validate(),
                Err(TransformError::InvalidData {
                    reason: InvalidDataReason::SamplingInterval(_),
                    ..
                })
            ));
        }
    }

    #[test]
    fn derive_keeps_metadata_and_extends_provenance() {
        let source = trace(vec![1.0, 2.0]);
        let derived = source.derive(
            vec![0.0, 0.75],
            Units::Velocity,
            ProcessingStep::new(Transform::Integrate),
        );
        assert_eq!(derived.station_metadata(), source.station_metadata());
        assert_eq!(derived.units(), Units::Velocity);
        assert_eq!(derived.provenance().len(), 1);
        assert!(source.provenance().is_empty());
    }

    #[test]
    fn resampled_shifts_time_base() {
        let derived = trace(vec![1.0, 2.0, 3.0]).resampled(0.25, 0.5);
        assert_eq!(derived.sampling_interval(), 0.25);
        assert_eq!(derived.times().collect::<Vec<_>>(), vec![0.5, 0.75, 1.0]);
    }
}
