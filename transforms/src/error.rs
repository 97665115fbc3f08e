use crate::Real;
use gmprocess_common::metrics::failures::FailureKind;
use thiserror::Error;

pub type TransformResult<T> = Result<T, TransformError>;

/// The parameters a transform may be invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Parameter {
    #[strum(to_string = "damping")]
    Damping,
    #[strum(to_string = "period")]
    Period,
    #[strum(to_string = "times")]
    Times,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidDataReason {
    #[error("Non-finite Sample {value} at Index {index}")]
    NonFiniteSample { index: usize, value: Real },
    #[error("Sampling Interval {0} is not a Positive Finite Number")]
    SamplingInterval(Real),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Missing Parameter: {0}")]
    MissingParameter(Parameter),
    #[error("Invalid Parameter {parameter}: {reason}")]
    InvalidParameter { parameter: Parameter, reason: String },
    #[error("Invalid Data in {channel}: {reason}")]
    InvalidData {
        channel: String,
        reason: InvalidDataReason,
    },
    #[error("Source Stream Contains No Traces")]
    EmptyInput,
}

impl TransformError {
    pub(crate) fn invalid_parameter(parameter: Parameter, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// The label under which this error is counted in the failures metric.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::MissingParameter(_) => FailureKind::MissingParameter,
            Self::InvalidParameter { .. } => FailureKind::InvalidParameter,
            Self::InvalidData { .. } => FailureKind::InvalidData,
            Self::EmptyInput => FailureKind::EmptyInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        assert_eq!(
            TransformError::MissingParameter(Parameter::Period).to_string(),
            "Missing Parameter: period"
        );
        assert_eq!(
            TransformError::invalid_parameter(Parameter::Damping, "must be below 1").to_string(),
            "Invalid Parameter damping: must be below 1"
        );
    }

    #[test]
    fn invalid_data_names_channel_and_index() {
        let error = TransformError::InvalidData {
            channel: "BK.CMB.00.HNE".to_owned(),
            reason: InvalidDataReason::NonFiniteSample {
                index: 3,
                value: Real::NAN,
            },
        };
        assert_eq!(
            error.to_string(),
            "Invalid Data in BK.CMB.00.HNE: Non-finite Sample NaN at Index 3"
        );
        assert_eq!(error.failure_kind(), FailureKind::InvalidData);
    }
}
