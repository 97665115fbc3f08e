//! Derives velocity, displacement and oscillator response from recorded
//! ground-motion traces.
//!
//! Every transform borrows its input and returns a freshly allocated
//! [`Stream`]. A typical chain for an intensity measure looks like:
//! ```rust
//! use gmprocess_transforms::{Stream, Transform, TransformParameters};
//!
//! let acceleration = Stream::from_samples(vec![0.0, 1.0, 2.0, 1.0, 0.0], 1.0);
//! let velocity = Transform::Integrate
//!     .apply(&acceleration, &TransformParameters::default())
//!     .expect("acceleration is finite");
//! assert_eq!(velocity.traces()[0].samples(), &[0.0, 0.5, 2.0, 3.5, 4.0]);
//! ```

mod error;
mod interpolate;
mod metadata;
mod parameters;
mod stream;
mod trace;
mod transform;
mod units;
mod window;

pub use error::{InvalidDataReason, Parameter, TransformError, TransformResult};
pub use metadata::{ProcessingStep, StationMetadata};
pub use parameters::TransformParameters;
pub use stream::Stream;
pub use trace::Trace;
pub use transform::{Source, Transform};
pub use units::Units;

pub use gmprocess_common::{Real, SamplingInterval};
