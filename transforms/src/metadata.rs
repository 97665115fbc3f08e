use crate::{Real, Transform, TransformParameters};
use chrono::{DateTime, Utc};
use gmprocess_common::TIMESTAMP_FORMAT;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Identifies the instrument channel a trace was recorded on.
/// Transforms copy this by value and never inspect it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationMetadata {
    pub network: String,
    pub station: String,
    #[serde(default)]
    pub location: String,
    pub channel: String,
    pub start_time: DateTime<Utc>,
}

impl StationMetadata {
    /// `NET.STA.LOC.CHA`
    pub fn id(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.network, self.station, self.location, self.channel
        )
    }

    pub fn formatted_start_time(&self) -> String {
        self.start_time.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Display for StationMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.id())
    }
}

/// One entry of a trace's processing history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStep {
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resampled_points: Option<usize>,
}

impl ProcessingStep {
    pub(crate) fn new(transform: Transform) -> Self {
        Self {
            transform,
            damping: None,
            period: None,
            resampled_points: None,
        }
    }

    /// Records only the parameters the transform actually consumed.
    pub(crate) fn with_parameters(transform: Transform, parameters: &TransformParameters) -> Self {
        match transform {
            Transform::Oscillator => Self {
                damping: parameters.damping,
                period: parameters.period,
                resampled_points: parameters.times.as_ref().map(Vec::len),
                ..Self::new(transform)
            },
            _ => Self::new(transform),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_joins_all_codes() {
        let metadata = StationMetadata {
            network: "BK".to_owned(),
            station: "CMB".to_owned(),
            location: "00".to_owned(),
            channel: "HNE".to_owned(),
            start_time: Utc.with_ymd_and_hms(2014, 8, 24, 10, 20, 44).unwrap(),
        };
        assert_eq!(metadata.id(), "BK.CMB.00.HNE");
        assert_eq!(metadata.to_string(), "BK.CMB.00.HNE");
        assert_eq!(
            metadata.formatted_start_time(),
            "2014-08-24T10:20:44.000000Z"
        );
    }

    #[test]
    fn ignored_parameters_are_not_recorded() {
        let parameters = TransformParameters::default()
            .with_damping(0.05)
            .with_period(1.0);
        let step = ProcessingStep::with_parameters(Transform::Integrate, &parameters);
        assert_eq!(step, ProcessingStep::new(Transform::Integrate));

        let step = ProcessingStep::with_parameters(Transform::Oscillator, &parameters);
        assert_eq!(step.damping, Some(0.05));
        assert_eq!(step.period, Some(1.0));
        assert_eq!(step.resampled_points, None);
    }
}
