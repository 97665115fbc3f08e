use anyhow::{Error, anyhow};
use clap::{Parser, Subcommand};
use gmprocess_transforms::{Real, Transform, TransformParameters};
use std::str::FromStr;

/// Comma separated list of times, in seconds from the start of each trace.
#[derive(Default, Debug, Clone, PartialEq)]
pub(crate) struct TimesWrapper(pub(crate) Vec<Real>);

impl FromStr for TimesWrapper {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let times = s
            .split(',')
            .map(str::trim)
            .filter(|val| !val.is_empty())
            .map(Real::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if times.is_empty() {
            Err(anyhow!(
                "Expected at least one time in pattern '*,*,...', got '{s}'"
            ))
        } else {
            Ok(TimesWrapper(times))
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct OscillatorParameters {
    /// Fraction of critical damping, in [0, 1).
    #[clap(long)]
    pub(crate) damping: Real,

    /// Natural period of the oscillator, in seconds.
    #[clap(long)]
    pub(crate) period: Real,

    /// Evenly spaced times onto which the response is resampled.
    #[clap(long)]
    pub(crate) times: Option<TimesWrapper>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Mode {
    #[clap(about = "Copies every trace unchanged.")]
    Null,
    #[clap(
        about = "Integrates acceleration traces into velocity using the cumulative trapezoidal rule."
    )]
    Integrate,
    #[clap(
        about = "Differentiates traces using central differences: displacement to velocity, velocity to acceleration."
    )]
    Differentiate,
    #[clap(
        about = "Computes the absolute acceleration response of a damped single-degree-of-freedom oscillator."
    )]
    Oscillator(OscillatorParameters),
}

impl Mode {
    pub(crate) fn transform(&self) -> Transform {
        match self {
            Mode::Null => Transform::Null,
            Mode::Integrate => Transform::Integrate,
            Mode::Differentiate => Transform::Differentiate,
            Mode::Oscillator(_) => Transform::Oscillator,
        }
    }

    pub(crate) fn parameters(&self) -> TransformParameters {
        match self {
            Mode::Oscillator(oscillator) => {
                let parameters = TransformParameters::default()
                    .with_damping(oscillator.damping)
                    .with_period(oscillator.period);
                match &oscillator.times {
                    Some(TimesWrapper(times)) => parameters.with_times(times.clone()),
                    None => parameters,
                }
            }
            _ => TransformParameters::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn parse_times() {
        let TimesWrapper(times) = TimesWrapper::from_str("0.5, 1.0,1.5").expect("valid list");
        assert_eq!(times.len(), 3);
        assert_approx_eq!(times[1], 1.0);
    }

    #[test]
    fn reject_malformed_times() {
        assert!(TimesWrapper::from_str("").is_err());
        assert!(TimesWrapper::from_str("0.5,abc").is_err());
    }

    #[test]
    fn oscillator_threads_every_parameter() {
        let mode = Mode::Oscillator(OscillatorParameters {
            damping: 0.02,
            period: 2.0,
            times: Some(TimesWrapper(vec![0.0, 0.1])),
        });
        assert_eq!(mode.transform(), Transform::Oscillator);
        assert_eq!(
            mode.parameters(),
            TransformParameters::default()
                .with_damping(0.02)
                .with_period(2.0)
                .with_times(vec![0.0, 0.1])
        );
    }

    #[derive(Parser)]
    struct Cli {
        #[command(subcommand)]
        mode: Mode,
    }

    #[test]
    fn oscillator_requires_damping_and_period() {
        assert!(Cli::try_parse_from(["gm-transform", "oscillator", "--period", "1.0"]).is_err());
        assert!(Cli::try_parse_from(["gm-transform", "oscillator", "--damping", "0.05"]).is_err());

        let cli = Cli::try_parse_from([
            "gm-transform",
            "oscillator",
            "--damping",
            "0.05",
            "--period",
            "1.0",
        ])
        .expect("both flags given");
        assert_eq!(
            cli.mode.parameters(),
            TransformParameters::default()
                .with_damping(0.05)
                .with_period(1.0)
        );
    }

    #[test]
    fn other_modes_take_no_parameters() {
        assert_eq!(Mode::Integrate.parameters(), TransformParameters::default());
        assert_eq!(Mode::Differentiate.transform(), Transform::Differentiate);
    }
}
