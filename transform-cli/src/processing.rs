use crate::parameters::Mode;
use anyhow::{Result, anyhow};
use gmprocess_transforms::Stream;
use tracing::{info, warn};

/// Applies the selected transform to every stream.
///
/// Without `keep_going` the first failing stream aborts the run; with it,
/// failing streams are logged and left out of the output.
#[tracing::instrument(skip_all, fields(transform = %mode.transform(), streams = streams.len()))]
pub(crate) fn process(streams: &[Stream], mode: &Mode, keep_going: bool) -> Result<Vec<Stream>> {
    let transform = mode.transform();
    let parameters = mode.parameters();

    let mut transformed = Vec::with_capacity(streams.len());
    for (index, result) in transform
        .apply_to_streams(streams, &parameters)
        .into_iter()
        .enumerate()
    {
        let id = streams
            .get(index)
            .and_then(Stream::id)
            .unwrap_or_else(|| format!("stream {index}"));
        match result {
            Ok(stream) => transformed.push(stream),
            Err(e) if keep_going => warn!("Skipping {id}: {e}"),
            Err(e) => return Err(anyhow!("Cannot {transform} {id}: {e}")),
        }
    }
    info!(
        "Transformed {} of {} streams",
        transformed.len(),
        streams.len()
    );
    Ok(transformed)
}
