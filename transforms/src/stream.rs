use crate::{Real, SamplingInterval, StationMetadata, Trace, Units};
use serde::{Deserialize, Serialize};

/// The traces recorded by one station/instrument grouping.
/// Trace order is channel order and is preserved by every transform.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    traces: Vec<Trace>,
}

impl Stream {
    pub fn new(traces: Vec<Trace>) -> Self {
        Self { traces }
    }

    /// Wraps a bare array as a single acceleration channel with empty metadata.
    pub fn from_samples(samples: Vec<Real>, sampling_interval: SamplingInterval) -> Self {
        Self::new(vec![Trace::new(
            samples,
            sampling_interval,
            Units::Acceleration,
            StationMetadata::default(),
        )])
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trace> {
        self.traces.iter()
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn into_traces(self) -> Vec<Trace> {
        self.traces
    }

    /// `NET.STA.` followed by the band and instrument codes of the first
    /// channel, e.g. `BK.CMB.HN`.
    pub fn id(&self) -> Option<String> {
        self.traces.first().map(|trace| {
            let metadata = trace.station_metadata();
            let instrument: String = metadata.channel.chars().take(2).collect();
            format!("{}.{}.{instrument}", metadata.network, metadata.station)
        })
    }
}

impl FromIterator<Trace> for Stream {
    fn from_iter<T: IntoIterator<Item = Trace>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Stream {
    type Item = Trace;
    type IntoIter = std::vec::IntoIter<Trace>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stream {
    type Item = &'a Trace;
    type IntoIter = std::slice::Iter<'a, Trace>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(channel: &str) -> Trace {
        Trace::new(
            vec![0.0; 4],
            0.01,
            Units::Acceleration,
            StationMetadata {
                network: "BK".to_owned(),
                station: "CMB".to_owned(),
                channel: channel.to_owned(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn id_uses_instrument_prefix() {
        let stream: Stream = ["HNE", "HNN", "HNZ"].into_iter().map(channel).collect();
        assert_eq!(stream.id().as_deref(), Some("BK.CMB.HN"));
        assert_eq!(stream.len(), 3);
    }

    #[test]
    fn empty_stream_has_no_id() {
        assert_eq!(Stream::default().id(), None);
        assert!(Stream::default().is_empty());
    }

    #[test]
    fn from_samples_is_single_acceleration_channel() {
        let stream = Stream::from_samples(vec![1.0, 2.0], 0.02);
        assert_eq!(stream.len(), 1);
        let trace = &stream.traces()[0];
        assert_eq!(trace.units(), Units::Acceleration);
        assert_eq!(trace.samples(), &[1.0, 2.0]);
        assert_eq!(trace.sampling_interval(), 0.02);
    }
}
