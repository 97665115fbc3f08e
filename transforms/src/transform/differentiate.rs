//! Time-domain differentiation, e.g. velocity to acceleration.

use gmprocess_common::Real;
use itertools::Itertools;
use std::iter::once;

/// Central differences in the interior, one-sided differences at both ends.
/// The output has the same length as the input; fewer than two samples
/// have no slope and differentiate to zero.
pub(super) fn differentiate(samples: &[Real], sampling_interval: Real) -> Vec<Real> {
    let (Some([first, second]), Some([penultimate, last])) =
        (samples.first_chunk::<2>(), samples.last_chunk::<2>())
    else {
        return vec![0.0; samples.len()];
    };
    let forward = (second - first) / sampling_interval;
    let backward = (last - penultimate) / sampling_interval;
    once(forward)
        .chain(
            samples
                .iter()
                .tuple_windows()
                .map(|(previous, _, next)| (next - previous) / (2.0 * sampling_interval)),
        )
        .chain(once(backward))
        .collect()
}
