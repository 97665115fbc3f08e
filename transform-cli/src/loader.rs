use anyhow::{Context, Result};
use gmprocess_transforms::Stream;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};
use tracing::info;

/// Input documents hold either one stream or a list of streams.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum StreamDocument {
    Many(Vec<Stream>),
    Single(Stream),
}

impl StreamDocument {
    pub(crate) fn into_streams(self) -> Vec<Stream> {
        match self {
            StreamDocument::Many(streams) => streams,
            StreamDocument::Single(stream) => vec![stream],
        }
    }
}

pub(crate) fn read_streams<R: Read>(reader: R) -> Result<Vec<Stream>> {
    let document: StreamDocument =
        serde_json::from_reader(reader).context("Cannot parse stream document")?;
    Ok(document.into_streams())
}

/// Reads from `path`, or from stdin when no path is given.
#[tracing::instrument(skip_all, fields(path = ?path))]
pub(crate) fn load_streams(path: Option<&Path>) -> Result<Vec<Stream>> {
    let streams = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open input file {}", path.display()))?;
            read_streams(BufReader::new(file))?
        }
        None => read_streams(std::io::stdin().lock())?,
    };
    info!("Loaded {} streams", streams.len());
    Ok(streams)
}

pub(crate) fn write_streams<W: Write>(writer: W, streams: &[Stream]) -> Result<()> {
    serde_json::to_writer_pretty(writer, streams).context("Cannot serialise streams")
}

/// Writes to `path`, or to stdout when no path is given.
#[tracing::instrument(skip_all, fields(path = ?path, streams = streams.len()))]
pub(crate) fn save_streams(path: Option<&Path>, streams: &[Stream]) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_streams(&mut writer, streams)?;
            writer.flush()?;
        }
        None => {
            let mut writer = std::io::stdout().lock();
            write_streams(&mut writer, streams)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
