use crate::Real;

/// Linearly interpolates uniformly sampled `samples` at `times`
/// (seconds from the first sample). Times past either end take the
/// nearest end value.
pub(crate) fn resample_linear(samples: &[Real], sampling_interval: Real, times: &[Real]) -> Vec<Real> {
    let first = samples.first().copied().unwrap_or_default();
    let last = samples.last().copied().unwrap_or_default();
    times
        .iter()
        .map(|&time| {
            let position = time / sampling_interval;
            if position <= 0.0 {
                return first;
            }
            let index = position.floor() as usize;
            match (samples.get(index), samples.get(index + 1)) {
                (Some(&left), Some(&right)) => left + (right - left) * (position - index as Real),
                _ => last,
            }
        })
        .collect()
}
