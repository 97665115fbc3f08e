mod differentiate;
mod integrate;
mod oscillator;

use crate::{
    ProcessingStep, Real, SamplingInterval, Stream, Trace, TransformError, TransformParameters,
    TransformResult, Units,
};
use gmprocess_common::metrics::{
    failures,
    names::{FAILURES, STREAMS_TRANSFORMED, TRACES_TRANSFORMED},
    transform_kind,
};
use metrics::counter;
use oscillator::OscillatorParameters;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, warn};

/// The closed family of derived-quantity computations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Transform {
    /// Copies the samples unchanged.
    Null,
    /// Cumulative trapezoidal integral. The output is tagged
    /// [`Units::Velocity`] whatever the input units: callers must only
    /// integrate acceleration.
    Integrate,
    /// Central-difference derivative. Displacement becomes velocity and
    /// velocity becomes acceleration. There is no tag for the derivative of
    /// acceleration, so acceleration input keeps its tag.
    Differentiate,
    /// Absolute acceleration response of a damped oscillator; requires
    /// `damping` and `period`, and optionally resamples onto `times`.
    Oscillator,
}

/// What a transform is applied to.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Stream(&'a Stream),
    /// A bare array, treated as one acceleration channel.
    Samples {
        samples: &'a [Real],
        sampling_interval: SamplingInterval,
    },
}

impl<'a> From<&'a Stream> for Source<'a> {
    fn from(stream: &'a Stream) -> Self {
        Source::Stream(stream)
    }
}

impl<'a> From<(&'a [Real], SamplingInterval)> for Source<'a> {
    fn from((samples, sampling_interval): (&'a [Real], SamplingInterval)) -> Self {
        Source::Samples {
            samples,
            sampling_interval,
        }
    }
}

impl<'a> Source<'a> {
    fn into_stream(self) -> Cow<'a, Stream> {
        match self {
            Source::Stream(stream) => Cow::Borrowed(stream),
            Source::Samples {
                samples,
                sampling_interval,
            } => Cow::Owned(Stream::from_samples(samples.to_vec(), sampling_interval)),
        }
    }
}

/// A transform whose parameters have passed validation.
enum Validated<'p> {
    Null,
    Integrate,
    Differentiate,
    Oscillator(OscillatorParameters<'p>),
}

struct Invocation<'p> {
    transform: Transform,
    validated: Validated<'p>,
    step: ProcessingStep,
}

impl<'p> Invocation<'p> {
    fn new(transform: Transform, parameters: &'p TransformParameters) -> TransformResult<Self> {
        let validated = match transform {
            Transform::Null => Validated::Null,
            Transform::Integrate => Validated::Integrate,
            Transform::Differentiate => Validated::Differentiate,
            Transform::Oscillator => Validated::Oscillator(parameters.try_into()?),
        };
        Ok(Self {
            transform,
            validated,
            step: ProcessingStep::with_parameters(transform, parameters),
        })
    }

    #[tracing::instrument(skip_all, level = "trace", fields(channel = %trace.station_metadata(), samples = trace.len()))]
    fn transform_trace(&self, trace: &Trace) -> TransformResult<Trace> {
        trace.validate()?;
        let units = self.transform.output_units(trace.units());
        let step = self.step.clone();
        match &self.validated {
            Validated::Null => Ok(trace.derive(trace.samples().to_vec(), units, step)),
            Validated::Integrate => Ok(trace.derive(integrate::integrate(trace), units, step)),
            Validated::Differentiate => Ok(trace.derive(
                differentiate::differentiate(trace.samples(), trace.sampling_interval()),
                units,
                step,
            )),
            Validated::Oscillator(oscillator) => oscillator.respond(trace, step),
        }
    }
}

fn record_failure(error: &TransformError) {
    warn!("{error}");
    counter!(FAILURES, &[failures::get_label(error.failure_kind())]).increment(1);
}

impl Transform {
    /// The units tag carried by this transform's output.
    pub fn output_units(&self, input: Units) -> Units {
        match self {
            Transform::Null => input,
            Transform::Integrate => Units::Velocity,
            Transform::Differentiate => match input {
                Units::Displacement => Units::Velocity,
                Units::Velocity | Units::Acceleration => Units::Acceleration,
            },
            Transform::Oscillator => Units::Acceleration,
        }
    }

    fn label(&self) -> (&'static str, &'static str) {
        transform_kind::get_label((*self).into())
    }

    /// Applies the transform to every trace of `source`, in parallel.
    ///
    /// Fails as a whole on the first invalid parameter or trace: either every
    /// trace is transformed or no stream is returned. The output holds one
    /// trace per input trace, in the same order, with unchanged station
    /// metadata.
    #[tracing::instrument(skip_all, fields(transform = %self, traces = tracing::field::Empty))]
    pub fn apply<'a>(
        &self,
        source: impl Into<Source<'a>>,
        parameters: &TransformParameters,
    ) -> TransformResult<Stream> {
        let source: Source<'a> = source.into();
        let stream = source.into_stream();
        tracing::Span::current().record("traces", stream.len());

        let result = self.apply_to_stream(&stream, parameters);
        match &result {
            Ok(output) => {
                debug!("Transformed {} traces", output.len());
                counter!(TRACES_TRANSFORMED, &[self.label()]).increment(output.len() as u64);
                counter!(STREAMS_TRANSFORMED, &[self.label()]).increment(1);
            }
            Err(error) => record_failure(error),
        }
        result
    }

    fn apply_to_stream(
        &self,
        stream: &Stream,
        parameters: &TransformParameters,
    ) -> TransformResult<Stream> {
        if stream.is_empty() {
            return Err(TransformError::EmptyInput);
        }
        let invocation = Invocation::new(*self, parameters)?;
        stream
            .traces()
            .par_iter()
            .map(|trace| invocation.transform_trace(trace))
            .collect::<TransformResult<Vec<_>>>()
            .map(Stream::new)
    }

    /// Applies the transform to every trace, keeping going past failures.
    ///
    /// Errors that concern the invocation as a whole (no traces, bad
    /// parameters) are still returned up front. Otherwise the result holds
    /// one entry per input trace, in order, each either the transformed
    /// trace or the reason that trace could not be transformed.
    #[tracing::instrument(skip_all, fields(transform = %self))]
    pub fn apply_each<'a>(
        &self,
        source: impl Into<Source<'a>>,
        parameters: &TransformParameters,
    ) -> TransformResult<Vec<TransformResult<Trace>>> {
        let source: Source<'a> = source.into();
        let stream = source.into_stream();
        if stream.is_empty() {
            record_failure(&TransformError::EmptyInput);
            return Err(TransformError::EmptyInput);
        }
        let invocation = Invocation::new(*self, parameters).inspect_err(record_failure)?;
        let results: Vec<_> = stream
            .traces()
            .par_iter()
            .map(|trace| invocation.transform_trace(trace).inspect_err(record_failure))
            .collect();

        let succeeded = results.iter().filter(|result| result.is_ok()).count();
        debug!("Transformed {succeeded} of {} traces", results.len());
        counter!(TRACES_TRANSFORMED, &[self.label()]).increment(succeeded as u64);
        Ok(results)
    }

    /// Applies the transform to many streams in parallel. Each stream
    /// succeeds or fails on its own; results are in input order.
    #[tracing::instrument(skip_all, fields(transform = %self, streams = streams.len()))]
    pub fn apply_to_streams(
        &self,
        streams: &[Stream],
        parameters: &TransformParameters,
    ) -> Vec<TransformResult<Stream>> {
        streams
            .par_iter()
            .map(|stream| self.apply(stream, parameters))
            .collect()
    }
}
